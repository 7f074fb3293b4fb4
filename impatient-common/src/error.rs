//! Error type for stream construction and stream-processing helpers.

/// Errors raised when a stream helper is given arguments it cannot work with.
///
/// Only argument validation lives here. Failures produced *by* a stream
/// (items of type `Result<T, E>`) are handed back to the caller unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("linear congruential modulus must be positive, got {modulus}")]
    InvalidModulus { modulus: i64 },

    #[error("at least one worker thread is required")]
    NoWorkers,
}

/// Result alias used across the exercise crates.
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StreamError::InvalidModulus { modulus: 0 };
        assert_eq!(
            err.to_string(),
            "linear congruential modulus must be positive, got 0"
        );
        assert_eq!(
            StreamError::NoWorkers.to_string(),
            "at least one worker thread is required"
        );
    }
}
