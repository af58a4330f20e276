//! Error types for the mining pipeline

pub type MineResult<T> = Result<T, MineError>;

/// Errors that can occur while encoding a corpus or building its index
#[derive(Debug)]
pub enum MineError {
    /// An input sentence contains the reserved sentinel byte
    InvalidInput(String),
    /// Suffix array / LCP interval construction failed
    ///
    /// Fatal and non-retryable: either the corpus exceeds the supported
    /// size or the sorter produced inconsistent output.
    Construction(String),
}

impl std::fmt::Display for MineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MineError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            MineError::Construction(msg) => write!(f, "Construction failed: {}", msg),
        }
    }
}

impl std::error::Error for MineError {}
