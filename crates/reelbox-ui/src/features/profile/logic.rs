//! Request builders and client-side validation for profile operations.
//!
//! # Design
//! - Build every request from the read-only identity/profile snapshots.
//! - Reject invalid input before anything is dispatched.
//! - Treat blank identifiers and tokens as missing.

use crate::core::config::UiConfig;
use crate::core::error::ProfileError;
use crate::core::session::{AccessToken, ProfileSnapshot, UserIdentity};

/// Inputs that determine which video the page shows.
///
/// A new fetch is due whenever this key changes identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FetchKey {
    /// Token the fetch is issued with.
    pub access_token: AccessToken,
    /// Video being fetched.
    pub video_id: String,
}

/// Derive the fetch key from the current snapshots, if both inputs are present.
#[must_use]
pub fn fetch_key(identity: &UserIdentity, profile: &ProfileSnapshot) -> Option<FetchKey> {
    if identity.access_token.is_blank() {
        return None;
    }
    profile.video_id().map(|video_id| FetchKey {
        access_token: identity.access_token.clone(),
        video_id: video_id.to_string(),
    })
}

/// Which file picker an upload came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    /// Profile picture picker.
    Picture,
    /// Personal video picker.
    Video,
}

impl UploadKind {
    /// `accept` attribute for the file input.
    #[must_use]
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Picture => "image/*",
            Self::Video => "video/*",
        }
    }

    const fn mime_prefix(self) -> &'static str {
        match self {
            Self::Picture => "image/",
            Self::Video => "video/",
        }
    }

    /// Configured size ceiling for this kind of upload.
    #[must_use]
    pub const fn limit_bytes(self, config: &UiConfig) -> Option<u64> {
        match self {
            Self::Picture => config.max_picture_bytes,
            Self::Video => Some(config.max_video_bytes),
        }
    }
}

/// A file picked by the user, with the metadata validation needs.
///
/// `F` is the platform file handle (`web_sys::File` in the browser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile<F> {
    /// File name reported by the picker.
    pub name: String,
    /// MIME type reported by the picker (may be empty).
    pub mime: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Platform handle passed through to the transport.
    pub file: F,
}

/// Request for the personal video descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchVideoRequest {
    /// Caller credential.
    pub access_token: AccessToken,
    /// Video to fetch.
    pub video_id: String,
}

impl From<FetchKey> for FetchVideoRequest {
    fn from(key: FetchKey) -> Self {
        Self {
            access_token: key.access_token,
            video_id: key.video_id,
        }
    }
}

/// Request carrying a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest<F> {
    /// Caller credential.
    pub access_token: AccessToken,
    /// Validated file.
    pub file: UploadFile<F>,
}

/// Request to rename the personal video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameVideoRequest {
    /// Caller credential.
    pub access_token: AccessToken,
    /// Video to rename.
    pub video_id: String,
    /// Trimmed, non-empty new name.
    pub video_name: String,
}

/// Request to share the personal video with the community feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertVideoRequest {
    /// Caller credential.
    pub access_token: AccessToken,
    /// Video to share.
    pub video_id: String,
}

/// Apply the required-field rule to a submitted video name.
///
/// # Errors
///
/// Returns [`ProfileError::VideoNameRequired`] when the name is empty after trimming.
pub fn validate_video_name(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::VideoNameRequired);
    }
    Ok(trimmed.to_string())
}

/// Check a picked file against the picker's media type and configured size limit.
///
/// # Errors
///
/// Returns [`ProfileError::UnsupportedMediaType`] or [`ProfileError::FileTooLarge`].
pub fn validate_upload<F>(
    kind: UploadKind,
    file: &UploadFile<F>,
    config: &UiConfig,
) -> Result<(), ProfileError> {
    if !file.mime.to_ascii_lowercase().starts_with(kind.mime_prefix()) {
        return Err(ProfileError::UnsupportedMediaType {
            expected: kind.accept(),
            actual: file.mime.clone(),
        });
    }
    if let Some(limit_bytes) = kind.limit_bytes(config)
        && file.size_bytes > limit_bytes
    {
        return Err(ProfileError::FileTooLarge {
            limit_bytes,
            actual_bytes: file.size_bytes,
        });
    }
    Ok(())
}

fn token(identity: &UserIdentity) -> Result<AccessToken, ProfileError> {
    if identity.access_token.is_blank() {
        return Err(ProfileError::MissingAccessToken);
    }
    Ok(identity.access_token.clone())
}

fn video_id(profile: &ProfileSnapshot) -> Result<String, ProfileError> {
    profile
        .video_id()
        .map(ToString::to_string)
        .ok_or(ProfileError::MissingVideo)
}

/// Build an upload request after validating the file.
///
/// # Errors
///
/// Propagates token and file validation failures.
pub fn build_upload_request<F>(
    identity: &UserIdentity,
    kind: UploadKind,
    file: UploadFile<F>,
    config: &UiConfig,
) -> Result<UploadRequest<F>, ProfileError> {
    let access_token = token(identity)?;
    validate_upload(kind, &file, config)?;
    Ok(UploadRequest { access_token, file })
}

/// Build a rename request from the submitted form value.
///
/// # Errors
///
/// Fails on a blank name, a missing token, or a profile without a video.
pub fn build_rename_request(
    identity: &UserIdentity,
    profile: &ProfileSnapshot,
    raw_name: &str,
) -> Result<RenameVideoRequest, ProfileError> {
    let video_name = validate_video_name(raw_name)?;
    Ok(RenameVideoRequest {
        access_token: token(identity)?,
        video_id: video_id(profile)?,
        video_name,
    })
}

/// Build a share-with-community request.
///
/// # Errors
///
/// Fails on a missing token or a profile without a video.
pub fn build_convert_request(
    identity: &UserIdentity,
    profile: &ProfileSnapshot,
) -> Result<ConvertVideoRequest, ProfileError> {
    Ok(ConvertVideoRequest {
        access_token: token(identity)?,
        video_id: video_id(profile)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(token: &str) -> UserIdentity {
        UserIdentity {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            access_token: AccessToken::new(token),
        }
    }

    fn profile(video_id: Option<&str>) -> ProfileSnapshot {
        ProfileSnapshot {
            video_id: video_id.map(ToString::to_string),
            ..ProfileSnapshot::default()
        }
    }

    fn file(mime: &str, size_bytes: u64) -> UploadFile<()> {
        UploadFile {
            name: "clip".to_string(),
            mime: mime.to_string(),
            size_bytes,
            file: (),
        }
    }

    #[test]
    fn fetch_key_requires_token_and_video() {
        assert!(fetch_key(&identity("tok1"), &profile(None)).is_none());
        assert!(fetch_key(&identity(" "), &profile(Some("v1"))).is_none());
        let key = fetch_key(&identity("tok1"), &profile(Some("v1"))).expect("key");
        assert_eq!(key.video_id, "v1");
        assert_eq!(key.access_token.expose(), "tok1");
        assert_ne!(
            Some(key),
            fetch_key(&identity("tok2"), &profile(Some("v1")))
        );
    }

    #[test]
    fn video_name_is_required_and_trimmed() {
        assert_eq!(validate_video_name(""), Err(ProfileError::VideoNameRequired));
        assert_eq!(
            validate_video_name("   "),
            Err(ProfileError::VideoNameRequired)
        );
        assert_eq!(validate_video_name("  Road trip "), Ok("Road trip".to_string()));
    }

    #[test]
    fn uploads_check_media_type() {
        let config = UiConfig::default();
        let err = validate_upload(UploadKind::Video, &file("image/png", 10), &config)
            .expect_err("wrong type");
        assert_eq!(
            err,
            ProfileError::UnsupportedMediaType {
                expected: "video/*",
                actual: "image/png".to_string(),
            }
        );
        assert!(validate_upload(UploadKind::Picture, &file("IMAGE/PNG", 10), &config).is_ok());
        assert!(validate_upload(UploadKind::Picture, &file("", 10), &config).is_err());
    }

    #[test]
    fn uploads_respect_configured_limits() {
        let config = UiConfig::default();
        let limit = config.max_video_bytes;
        assert!(validate_upload(UploadKind::Video, &file("video/mp4", limit), &config).is_ok());
        let err = validate_upload(UploadKind::Video, &file("video/mp4", limit + 1), &config)
            .expect_err("too large");
        assert_eq!(
            err,
            ProfileError::FileTooLarge {
                limit_bytes: limit,
                actual_bytes: limit + 1,
            }
        );

        assert!(
            validate_upload(UploadKind::Picture, &file("image/png", u64::MAX), &config).is_ok()
        );
        let capped = UiConfig {
            max_picture_bytes: Some(100),
            ..UiConfig::default()
        };
        assert!(validate_upload(UploadKind::Picture, &file("image/png", 101), &capped).is_err());
    }

    #[test]
    fn rename_request_validates_before_identity() {
        let err = build_rename_request(&identity(""), &profile(None), "")
            .expect_err("blank name wins");
        assert_eq!(err, ProfileError::VideoNameRequired);

        let err = build_rename_request(&identity("tok1"), &profile(None), "Drive")
            .expect_err("missing video");
        assert_eq!(err, ProfileError::MissingVideo);

        let request =
            build_rename_request(&identity("tok1"), &profile(Some("v1")), " Drive ").expect("ok");
        assert_eq!(request.video_id, "v1");
        assert_eq!(request.video_name, "Drive");
    }

    #[test]
    fn convert_and_upload_require_token() {
        assert_eq!(
            build_convert_request(&identity(""), &profile(Some("v1"))),
            Err(ProfileError::MissingAccessToken)
        );
        let request = build_upload_request(
            &identity("tok1"),
            UploadKind::Picture,
            file("image/jpeg", 5),
            &UiConfig::default(),
        )
        .expect("upload request");
        assert_eq!(request.file.mime, "image/jpeg");
    }
}
