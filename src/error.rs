//! Error types for trie operations.

use thiserror::Error;

/// Error type for trie and prefix-set operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// No value (or, for prefix operations, no node) is stored at the key.
    #[error("key not present in trie")]
    KeyAbsent,
    /// A codec was constructed with an unusable parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// The operation is not supported by this container.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TrieError::KeyAbsent.to_string(), "key not present in trie");
        assert_eq!(
            TrieError::InvalidConfiguration("separator can not be empty").to_string(),
            "invalid configuration: separator can not be empty"
        );
        assert_eq!(
            TrieError::UnsupportedOperation("PrefixSet::remove").to_string(),
            "unsupported operation: PrefixSet::remove"
        );
    }
}
