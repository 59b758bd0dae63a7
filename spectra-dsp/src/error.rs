use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToneError {
    #[error("frequency {0} Hz is not between 0 and the Nyquist limit")]
    InvalidFrequency(f32),
    #[error("duration {0} s does not yield any samples")]
    InvalidDuration(f32),
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),
    #[error("analysis needs {needed} samples, got {got}")]
    FrameTooShort { needed: usize, got: usize },
}
