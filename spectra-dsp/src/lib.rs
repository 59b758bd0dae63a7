#![no_std]

extern crate alloc;

pub mod error;
pub mod tone;

use log::trace;
use microdsp::common::{apply_window_function, real_fft, WindowFunctionType::Hann};
use microfft::Complex32;

pub use error::ToneError;
pub use tone::{
    normalize_sample, normalize_samples, quantize_sample, synthesize_tone, AudioSink, ToneBuffer,
    ToneRequest, DEFAULT_DURATION_SECS, DEFAULT_SAMPLE_RATE_HZ, FULL_SCALE,
};

/// Samples per analysis frame.
pub const FRAME_LEN: usize = 1024;
/// Magnitude bins produced per frame.
pub const BIN_COUNT: usize = FRAME_LEN / 2;

/// Dominant frequency found in a tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpectrum {
    pub peak_bin: usize,
    pub peak_hz: f32,
    pub peak_magnitude: f32,
}

/// Apply a Hann window to a slice of f32 samples.
pub fn apply_hann_window(samples: &mut [f32]) {
    apply_window_function(Hann, samples);
}

/// Compute the FFT of one frame in place.
pub fn compute_fft(samples: &mut [f32; FRAME_LEN]) -> &mut [Complex32] {
    real_fft(samples)
}

/// Magnitude of each FFT bin. Missing bins stay at zero.
pub fn compute_magnitude(fft_output: &[Complex32]) -> [f32; BIN_COUNT] {
    let mut magnitude = [0.0; BIN_COUNT];
    for (out, c) in magnitude.iter_mut().zip(fft_output) {
        *out = libm::sqrtf(c.re * c.re + c.im * c.im);
    }
    magnitude
}

/// Magnitude spectrum of the first `FRAME_LEN` samples.
pub fn process_frame(samples: &[i16]) -> Result<[f32; BIN_COUNT], ToneError> {
    if samples.len() < FRAME_LEN {
        return Err(ToneError::FrameTooShort {
            needed: FRAME_LEN,
            got: samples.len(),
        });
    }

    let mut frame = [0.0; FRAME_LEN];
    normalize_samples(&samples[..FRAME_LEN], &mut frame);
    apply_hann_window(&mut frame);
    let fft_output = compute_fft(&mut frame);
    Ok(compute_magnitude(fft_output))
}

/// Finds the strongest bin of a tone's first frame, skipping DC.
pub fn analyze_tone(tone: &ToneBuffer) -> Result<ToneSpectrum, ToneError> {
    let magnitude = process_frame(tone.samples())?;
    let (peak_bin, peak_magnitude) = magnitude
        .iter()
        .copied()
        .enumerate()
        .skip(1)
        .fold((0, 0.0f32), |best, (bin, m)| if m > best.1 { (bin, m) } else { best });
    let peak_hz = peak_bin as f32 * tone.sample_rate_hz() as f32 / FRAME_LEN as f32;
    trace!("peak at bin {} ({} Hz), magnitude {}", peak_bin, peak_hz, peak_magnitude);
    Ok(ToneSpectrum {
        peak_bin,
        peak_hz,
        peak_magnitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compute_magnitude() {
        let mut fft_output = [Complex32 { re: 0.0, im: 0.0 }; BIN_COUNT];
        fft_output[0] = Complex32 { re: 1.0, im: 0.0 };
        fft_output[1] = Complex32 { re: 0.0, im: 1.0 };
        fft_output[2] = Complex32 { re: 3.0, im: 4.0 };
        fft_output[511] = Complex32 { re: -1.0, im: 0.0 };

        let magnitude = compute_magnitude(&fft_output);
        assert_eq!(magnitude[0], 1.0);
        assert_eq!(magnitude[1], 1.0);
        assert_abs_diff_eq!(magnitude[2], 5.0, epsilon = 1e-5);
        assert_eq!(magnitude[511], 1.0);
    }

    #[test]
    fn test_short_input_is_rejected() {
        assert_eq!(
            process_frame(&[0; 100]),
            Err(ToneError::FrameTooShort {
                needed: 1024,
                got: 100
            })
        );
    }

    #[test]
    fn test_silence_has_no_energy() {
        let magnitude = process_frame(&[0; FRAME_LEN]).unwrap();
        assert!(magnitude.iter().all(|&m| m == 0.0));
    }
}
