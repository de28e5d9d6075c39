use thiserror::Error;

/// Errors produced by slice resolution and tensor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("Shape mismatch in operation '{operation}': expected {expected}, got {got}")]
    ShapeMismatch {
        operation: String,
        expected: String,
        got: String,
    },

    #[error("Invalid stride in operation '{operation}': stride for dimension {dimension} must be non-zero")]
    InvalidStride { operation: String, dimension: usize },

    #[error("Rank mismatch in operation '{operation}': slice spec has {spec_len} entries but tensor has rank {rank}")]
    RankMismatch {
        operation: String,
        spec_len: usize,
        rank: usize,
    },

    #[error("Invalid shape in operation '{operation}': {reason}")]
    InvalidShape { operation: String, reason: String },

    #[error("Invalid argument in operation '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },
}

impl TensorError {
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            operation: operation.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }

    pub fn invalid_stride(operation: impl Into<String>, dimension: usize) -> Self {
        Self::InvalidStride {
            operation: operation.into(),
            dimension,
        }
    }

    pub fn rank_mismatch(operation: impl Into<String>, spec_len: usize, rank: usize) -> Self {
        Self::RankMismatch {
            operation: operation.into(),
            spec_len,
            rank,
        }
    }

    pub fn invalid_shape(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, TensorError>;
