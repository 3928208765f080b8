//! Error types for platform name parsing.

/// Errors that can occur when parsing platform names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The operating system name is not one of the canonical names.
    #[error("unknown operating system: '{name}'")]
    UnknownOs {
        /// The name that failed to parse.
        name: String,
    },

    /// The architecture name is not one of the canonical names.
    #[error("unknown architecture: '{name}'")]
    UnknownArch {
        /// The name that failed to parse.
        name: String,
    },

    /// A platform string did not have the `<os>-<arch>` shape.
    #[error("malformed platform name '{input}', expected <os>-<arch>")]
    Malformed {
        /// The full input string.
        input: String,
    },
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
