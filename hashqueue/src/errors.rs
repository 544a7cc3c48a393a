//! Error types shared by every hashqueue module.
//!
//! # Error Taxonomy
//!
//! The library distinguishes three kinds of failure:
//!
//! 1. **Invariant violations**: asking the candidate generator for an index
//!    outside its space, or building a job whose range does not fit the
//!    space. Correct partitioning never produces these.
//!
//! 2. **Invalid input**: a target hash that is not a 128-bit hex digest, an
//!    empty alphabet, or a candidate space too large to index with `u64`.
//!
//! 3. **Environment failures**: configuration files that fail to parse,
//!    channels whose peers have gone away, and I/O.
//!
//! Not finding a plaintext is *not* an error. A search that exhausts its
//! space reports `plaintext: None` in its outcome, and an empty poll of
//! the result channel is simply retried.
//!
//! ```rust,ignore
//! match Combinations::new(alphabet, 3)?.get(index) {
//!     Ok(candidate) => // hash it,
//!     Err(HashQueueError::IndexOutOfRange { .. }) => // partitioning bug,
//!     Err(e) => // anything else
//! }
//! ```

use thiserror::Error;

/// Result type for hashqueue operations
pub type HashQueueResult<T> = Result<T, HashQueueError>;

/// Errors that can occur while building or running a search
#[derive(Error, Debug)]
pub enum HashQueueError {
    #[error("Index {index} out of range for candidate space of size {size}")]
    IndexOutOfRange { index: u64, size: u64 },
    #[error("Invalid hash: {0}")]
    InvalidHash(String),
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,
    #[error("Candidate space too large: {alphabet_len}^{length} does not fit in 64 bits")]
    SpaceTooLarge { alphabet_len: usize, length: u32 },
    #[error("Invalid job range [{start}, {stop}) for candidate space of size {size}")]
    InvalidRange { start: u64, stop: u64, size: u64 },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Channel closed: {0}")]
    ChannelClosed(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HashQueueError {
    pub fn index_out_of_range(index: u64, size: u64) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    pub fn invalid_hash(msg: impl Into<String>) -> Self {
        Self::InvalidHash(msg.into())
    }

    pub fn space_too_large(alphabet_len: usize, length: u32) -> Self {
        Self::SpaceTooLarge {
            alphabet_len,
            length,
        }
    }

    pub fn invalid_range(start: u64, stop: u64, size: u64) -> Self {
        Self::InvalidRange { start, stop, size }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn channel_closed(msg: impl Into<String>) -> Self {
        Self::ChannelClosed(msg.into())
    }
}

impl From<config::ConfigError> for HashQueueError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HashQueueError::index_out_of_range(26, 26);
        assert!(matches!(
            err,
            HashQueueError::IndexOutOfRange { index: 26, size: 26 }
        ));

        let err = HashQueueError::invalid_hash("zz");
        assert!(matches!(err, HashQueueError::InvalidHash(_)));

        let err = HashQueueError::space_too_large(26, 20);
        assert!(matches!(err, HashQueueError::SpaceTooLarge { .. }));

        let err = HashQueueError::invalid_range(5, 3, 10);
        assert!(matches!(err, HashQueueError::InvalidRange { .. }));

        let err = HashQueueError::channel_closed("input");
        assert!(matches!(err, HashQueueError::ChannelClosed(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = HashQueueError::index_out_of_range(676, 676);
        assert_eq!(
            err.to_string(),
            "Index 676 out of range for candidate space of size 676"
        );

        let err = HashQueueError::space_too_large(26, 14);
        assert_eq!(
            err.to_string(),
            "Candidate space too large: 26^14 does not fit in 64 bits"
        );

        let err = HashQueueError::config_error("max_length must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: max_length must be positive"
        );

        assert_eq!(
            HashQueueError::EmptyAlphabet.to_string(),
            "Alphabet must contain at least one character"
        );
    }
}
