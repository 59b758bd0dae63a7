use alloc::vec::Vec;
use core::f64::consts::PI;

use log::debug;

use crate::error::ToneError;

pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;
pub const DEFAULT_DURATION_SECS: f32 = 0.5;
/// Amplitude of a full-scale sample.
pub const FULL_SCALE: i16 = i16::MAX;

/// A fixed-frequency sine tone to synthesize. Mono, 16-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub sample_rate_hz: u32,
}

impl ToneRequest {
    pub fn new(frequency_hz: f32) -> Self {
        Self {
            frequency_hz,
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }

    pub fn with_duration(mut self, duration_secs: f32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    /// `int(rate * duration)`, truncated toward zero.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz as f64 * self.duration_secs as f64) as usize
    }

    pub fn validate(&self) -> Result<(), ToneError> {
        if self.sample_rate_hz == 0 {
            return Err(ToneError::InvalidSampleRate(self.sample_rate_hz));
        }
        let nyquist = self.sample_rate_hz as f32 / 2.0;
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 || self.frequency_hz >= nyquist
        {
            return Err(ToneError::InvalidFrequency(self.frequency_hz));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 || self.sample_count() == 0
        {
            return Err(ToneError::InvalidDuration(self.duration_secs));
        }
        Ok(())
    }
}

/// Synthesized PCM samples plus the rate they were generated at.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneBuffer {
    samples: Vec<i16>,
    sample_rate_hz: u32,
}

impl ToneBuffer {
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate_hz as f32
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Root mean square of the normalized samples.
    pub fn rms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .samples
            .iter()
            .map(|&s| {
                let x = normalize_sample(s);
                x * x
            })
            .sum();
        libm::sqrtf(sum / self.samples.len() as f32)
    }
}

/// Scales a value in [-1, 1] to a 16-bit sample, truncating toward zero.
pub fn quantize_sample(value: f64) -> i16 {
    (value * FULL_SCALE as f64) as i16
}

/// Normalize a single sample from i16 to f32.
pub fn normalize_sample(sample: i16) -> f32 {
    sample as f32 / FULL_SCALE as f32
}

/// Normalize a slice of i16 samples into `normalized`, pairwise.
pub fn normalize_samples(samples: &[i16], normalized: &mut [f32]) {
    for (out, &sample) in normalized.iter_mut().zip(samples) {
        *out = normalize_sample(sample);
    }
}

/// `sin(2π f t) · 32767` for `t = i · duration / n`, `i` in `0..n`.
pub fn synthesize_tone(request: &ToneRequest) -> Result<ToneBuffer, ToneError> {
    request.validate()?;
    let n = request.sample_count();
    let frequency = request.frequency_hz as f64;
    let step = request.duration_secs as f64 / n as f64;
    let samples = (0..n)
        .map(|i| quantize_sample(libm::sin(2.0 * PI * frequency * i as f64 * step)))
        .collect();
    debug!(
        "synthesized {} samples of {} Hz at {} Hz",
        n, request.frequency_hz, request.sample_rate_hz
    );
    Ok(ToneBuffer {
        samples,
        sample_rate_hz: request.sample_rate_hz,
    })
}

/// Destination for synthesized tones, e.g. an audio device.
pub trait AudioSink {
    type Error;

    fn play(&mut self, tone: &ToneBuffer) -> Result<(), Self::Error>;
}
