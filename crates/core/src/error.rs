// Central Error Type for version handling

use thiserror::Error;

/// The only failure a run can end in.
///
/// Malformed syntax and out-of-range numbers share this variant.
/// `reason` only reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version {input:?}: {reason}")]
    InvalidVersion { input: String, reason: String },
}

impl VersionError {
    pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using VersionError
pub type Result<T> = std::result::Result<T, VersionError>;
