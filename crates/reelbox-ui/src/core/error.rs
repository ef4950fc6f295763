//! Error types raised before a request ever leaves the browser.

use thiserror::Error;

/// Client-side rejections for profile interactions.
///
/// None of these reach the network: the interaction is blocked and the
/// user is told why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The rename form was submitted without a usable name.
    #[error("video name is required")]
    VideoNameRequired,
    /// A video action was requested but the profile has no video id.
    #[error("profile has no personal video")]
    MissingVideo,
    /// The session carries no access token.
    #[error("access token missing")]
    MissingAccessToken,
    /// The selected file is above the configured upload limit.
    #[error("file exceeds the upload limit")]
    FileTooLarge {
        /// Configured ceiling in bytes.
        limit_bytes: u64,
        /// Size of the rejected file in bytes.
        actual_bytes: u64,
    },
    /// The selected file does not match the picker's accepted media type.
    #[error("unsupported media type")]
    UnsupportedMediaType {
        /// Accepted MIME pattern, e.g. `video/*`.
        expected: &'static str,
        /// MIME type reported for the file (may be empty).
        actual: String,
    },
}

/// Errors raised while loading [`crate::core::config::UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document was not valid JSON for the schema.
    #[error("failed to parse ui configuration")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// A field held an unusable value.
    #[error("invalid ui configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}
