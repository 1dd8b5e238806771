// src/error.rs
//
// Error taxonomy for the PLP pipeline.

use thiserror::Error;

/// Errors surfaced by configuration and extraction.
///
/// Silent or zero-energy frames are not errors: they produce zero-valued
/// feature rows.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlpError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sample rate mismatch: configured for {expected} Hz, got {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    #[error("Non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("Transform failed: {0}")]
    Transform(String),
}

impl PlpError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message() {
        let err = PlpError::SampleRateMismatch { expected: 16000, actual: 8000 };
        let msg = err.to_string();
        assert!(msg.contains("16000"));
        assert!(msg.contains("8000"));
    }
}
