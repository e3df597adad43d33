use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgorithmError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("start index {start} cannot be greater than end index {end}")]
    InvertedRange { start: usize, end: usize },
    #[error("element is not tracked by the structure")]
    NotFound,
    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected { reached: usize, total: usize },
}

impl AlgorithmError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Bad index and inverted range both count as out-of-range failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::InvertedRange { .. })
    }
}
