//! Error types for command assembly.

/// Errors from the strict command assembly APIs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmdError {
    /// A flag-string token exceeded [`crate::MAX_TOKEN_LEN`] bytes.
    #[error("argument of {len} bytes exceeds the {max}-byte limit: {prefix}...")]
    TokenTooLong {
        /// Full length of the token in bytes.
        len: usize,
        /// The limit that was exceeded.
        max: usize,
        /// Leading characters of the token, for the diagnostic.
        prefix: String,
    },
}

/// Result type for command assembly.
pub type Result<T> = std::result::Result<T, CmdError>;
