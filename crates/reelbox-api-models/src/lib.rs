#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Reelbox profile API.
//!
//! The profile service speaks camelCase JSON (`videoId`, `profileVideo`,
//! `profilePicData`). These types pin that contract in one place so the web
//! client and its tests agree on field names.
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Message suitable for showing to a user: the detail when present, else the title.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

/// Account fields for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub number: String,
}

/// Last-known profile media fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Profile picture reference (URL or data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_data: Option<String>,
    /// Display name of the personal video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_name: Option<String>,
    /// Identifier of the personal video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Session bootstrap payload returned by `GET /v1/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Account fields.
    pub user: UserResponse,
    /// Profile media fields.
    #[serde(default)]
    pub profile: ProfileResponse,
}

/// Personal video descriptor returned by fetch, upload and rename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileVideoResponse {
    /// Identifier of the video.
    pub video_id: String,
    /// Current display name of the video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_name: Option<String>,
    /// Playable reference for the video element.
    pub profile_video: String,
}

/// Result of a profile picture upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePictureResponse {
    /// New profile picture reference.
    pub profile_pic_data: String,
}

/// Body for renaming the personal video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenameVideoRequest {
    /// Requested display name.
    pub video_name: String,
}

/// Result of sharing the personal video with the community feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityVideoResponse {
    /// Identifier of the community copy.
    pub community_video_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_message_prefers_detail() {
        let problem = ProblemDetails {
            kind: "about:blank".to_string(),
            title: "Bad Request".to_string(),
            status: 400,
            detail: Some("video name already taken".to_string()),
        };
        assert_eq!(problem.message(), "video name already taken");

        let blank = ProblemDetails {
            detail: Some("  ".to_string()),
            ..problem
        };
        assert_eq!(blank.message(), "Bad Request");
    }

    #[test]
    fn session_decodes_camel_case_and_missing_profile() {
        let json = r#"{"user":{"name":"Ada","email":"ada@example.com","number":"555-0100"}}"#;
        let session: SessionResponse = serde_json::from_str(json).expect("session decodes");
        assert_eq!(session.user.number, "555-0100");
        assert_eq!(session.profile, ProfileResponse::default());

        let json = r#"{"user":{"name":"Ada","email":"a@b.c","number":"1"},
            "profile":{"profilePicData":"https://cdn/p.png","videoId":"v1","videoName":"Drive"}}"#;
        let session: SessionResponse = serde_json::from_str(json).expect("session decodes");
        assert_eq!(session.profile.video_id.as_deref(), Some("v1"));
        assert_eq!(session.profile.video_name.as_deref(), Some("Drive"));
        assert_eq!(
            session.profile.profile_pic_data.as_deref(),
            Some("https://cdn/p.png")
        );
    }

    #[test]
    fn rename_request_uses_wire_field_name() {
        let body = serde_json::to_value(RenameVideoRequest {
            video_name: "Road trip".to_string(),
        })
        .expect("request encodes");
        assert_eq!(body, serde_json::json!({ "videoName": "Road trip" }));
    }

    #[test]
    fn video_response_tolerates_missing_name() {
        let json = r#"{"videoId":"v1","profileVideo":"blob:v1"}"#;
        let video: ProfileVideoResponse = serde_json::from_str(json).expect("video decodes");
        assert_eq!(video.video_name, None);
        assert_eq!(video.profile_video, "blob:v1");
    }
}
