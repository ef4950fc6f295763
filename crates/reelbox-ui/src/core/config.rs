//! Runtime configuration for the web UI.
//!
//! # Design
//! - Keep configuration as plain data; defaults and an embedded JSON document both produce it.
//! - Express limits in bytes; render them for humans at the edge.
//! - Validate once at load so views can trust the values.

use crate::core::error::ConfigError;
use serde::Deserialize;

/// Default API origin when nothing better is known.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7070";
/// Default ceiling for personal video uploads (10 MiB).
pub const DEFAULT_MAX_VIDEO_BYTES: u64 = 10 * 1024 * 1024;
/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings consumed by the profile page and its HTTP client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Origin of the profile API (no trailing slash required).
    pub api_base_url: String,
    /// Largest personal video accepted for upload, in bytes.
    pub max_video_bytes: u64,
    /// Largest profile picture accepted for upload, in bytes (`None` disables the check).
    pub max_picture_bytes: Option<u64>,
    /// Tracing filter directive, e.g. `info` or `reelbox_ui=debug`.
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_video_bytes: DEFAULT_MAX_VIDEO_BYTES,
            max_picture_bytes: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON configuration document. Missing keys take defaults, except
    /// the API origin, which falls back to `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json_with_origin(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let document: serde_json::Value =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        let has_origin = document.get("api_base_url").is_some();
        let config: Self =
            serde_json::from_value(document).map_err(|source| ConfigError::Parse { source })?;
        let config = if has_origin {
            config
        } else {
            config.with_api_base_url(origin)
        };
        config.validate()
    }

    /// Replace the API origin, typically with one derived from the page location.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "api_base_url",
                reason: "must not be empty",
            });
        }
        if self.max_video_bytes == 0 {
            return Err(ConfigError::InvalidField {
                field: "max_video_bytes",
                reason: "must be greater than zero",
            });
        }
        if self.max_picture_bytes == Some(0) {
            return Err(ConfigError::InvalidField {
                field: "max_picture_bytes",
                reason: "must be greater than zero when set",
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "log_level",
                reason: "must not be empty",
            });
        }
        Ok(self)
    }
}
