use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Window length must be strictly positive")]
    InvalidPeriod,
    #[error("Series has {len} points but the window needs {period}")]
    InsufficientData { len: usize, period: usize },
    #[error("Weights for a window of {period} points sum to zero")]
    DegenerateWeights { period: usize },
}
