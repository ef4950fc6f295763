//! Fixed notification catalog.
//!
//! # Design
//! - Notices carry catalog keys, not rendered strings, so state stays locale-free.
//! - Every key has an English default used when a bundle lacks the entry.

use crate::core::error::ProfileError;
use crate::core::logic::format_megabytes;
use crate::i18n::TranslationBundle;

/// Catalog entries used for notification titles and bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Title for success notices.
    SuccessTitle,
    /// Title for failure notices.
    FailureTitle,
    /// Body after a profile picture upload.
    ProfilePictureUpdated,
    /// Body after a video upload.
    VideoUpdated,
    /// Body after a video rename.
    VideoNameChanged,
    /// Required-field message for the rename form.
    VideoNameRequired,
    /// Fallback body when a failure carries no message.
    GenericFailure,
    /// Body when a video action has no video to act on.
    MissingVideo,
    /// Body when the session has no access token.
    MissingToken,
    /// Prefix for oversize upload rejections.
    FileTooLarge,
    /// Prefix for wrong media type rejections.
    UnsupportedMediaType,
}

impl MessageKey {
    /// Dotted bundle path for the entry.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SuccessTitle => "notice.success_title",
            Self::FailureTitle => "notice.failure_title",
            Self::ProfilePictureUpdated => "notice.picture_updated",
            Self::VideoUpdated => "notice.video_updated",
            Self::VideoNameChanged => "notice.video_name_changed",
            Self::VideoNameRequired => "notice.video_name_required",
            Self::GenericFailure => "notice.generic_failure",
            Self::MissingVideo => "notice.missing_video",
            Self::MissingToken => "notice.missing_token",
            Self::FileTooLarge => "notice.file_too_large",
            Self::UnsupportedMediaType => "notice.unsupported_type",
        }
    }

    /// English text used when the bundle has no entry.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::SuccessTitle => "Success",
            Self::FailureTitle => "Failed",
            Self::ProfilePictureUpdated => "Your profile picture has been updated.",
            Self::VideoUpdated => "Your video has been updated.",
            Self::VideoNameChanged => "Your video name has been changed.",
            Self::VideoNameRequired => "Please enter a video name.",
            Self::GenericFailure => "Something went wrong. Please try again.",
            Self::MissingVideo => "Upload a video first.",
            Self::MissingToken => "Your session has expired. Please sign in again.",
            Self::FileTooLarge => "The file is too large. Maximum size:",
            Self::UnsupportedMediaType => "This file type is not supported. Expected:",
        }
    }

    /// Resolve the entry against a bundle.
    #[must_use]
    pub fn text(self, bundle: &TranslationBundle) -> String {
        bundle.text(self.path(), self.default_text())
    }
}

/// Render a client-side rejection for display.
#[must_use]
pub fn describe_rejection(bundle: &TranslationBundle, error: &ProfileError) -> String {
    match error {
        ProfileError::VideoNameRequired => MessageKey::VideoNameRequired.text(bundle),
        ProfileError::MissingVideo => MessageKey::MissingVideo.text(bundle),
        ProfileError::MissingAccessToken => MessageKey::MissingToken.text(bundle),
        ProfileError::FileTooLarge { limit_bytes, .. } => format!(
            "{} {}",
            MessageKey::FileTooLarge.text(bundle),
            format_megabytes(*limit_bytes)
        ),
        ProfileError::UnsupportedMediaType { expected, .. } => format!(
            "{} {expected}",
            MessageKey::UnsupportedMediaType.text(bundle)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    const ALL: [MessageKey; 11] = [
        MessageKey::SuccessTitle,
        MessageKey::FailureTitle,
        MessageKey::ProfilePictureUpdated,
        MessageKey::VideoUpdated,
        MessageKey::VideoNameChanged,
        MessageKey::VideoNameRequired,
        MessageKey::GenericFailure,
        MessageKey::MissingVideo,
        MessageKey::MissingToken,
        MessageKey::FileTooLarge,
        MessageKey::UnsupportedMediaType,
    ];

    #[test]
    fn english_bundle_matches_defaults() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        for key in ALL {
            assert_eq!(key.text(&bundle), key.default_text(), "{key:?}");
        }
    }

    #[test]
    fn every_locale_translates_every_key() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in ALL {
                assert!(!key.text(&bundle).is_empty(), "{locale:?} {key:?}");
            }
        }
    }

    #[test]
    fn rejections_include_limits() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let text = describe_rejection(
            &bundle,
            &ProfileError::FileTooLarge {
                limit_bytes: 10 * 1024 * 1024,
                actual_bytes: 11 * 1024 * 1024,
            },
        );
        assert_eq!(text, "The file is too large. Maximum size: 10MB");

        let text = describe_rejection(
            &bundle,
            &ProfileError::UnsupportedMediaType {
                expected: "video/*",
                actual: "text/plain".to_string(),
            },
        );
        assert!(text.ends_with("video/*"));
    }
}
