use thiserror::Error;

/// Failures raised while turning a static dataset into a scene.
///
/// Every variant points at a bug in a compiled-in table or in the caller's
/// arguments; none of them is recoverable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VizError {
    #[error("logarithmic axis cannot map non-positive value {0}")]
    NonPositiveLogValue(f64),
    #[error("domain range [{lo}, {hi}] is empty or inverted")]
    InvalidRange { lo: f64, hi: f64 },
    #[error("domain value is not finite")]
    NonFiniteValue,
    #[error("index {index} outside 1..={count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("polar layout needs at least one position")]
    EmptyLayout,
    #[error("color code is not of the form #rrggbb")]
    InvalidColor,
}

pub type Result<T> = core::result::Result<T, VizError>;
