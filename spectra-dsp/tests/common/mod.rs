use wavegen::{sine, wf};

pub const SAMPLE_RATE: f32 = 44_100.0;

/// Reference sine from an independent generator, normalized to [-1, 1].
pub fn reference_sine(frequency: f32, count: usize) -> Vec<f32> {
    let waveform = wf!(f32, SAMPLE_RATE, sine!(frequency));
    waveform.iter().take(count).collect()
}

/// Frequency resolution of one analysis bin at the reference rate.
pub fn bin_width_hz() -> f32 {
    SAMPLE_RATE / spectra_dsp::FRAME_LEN as f32
}
