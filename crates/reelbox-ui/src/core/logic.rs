//! Pure helpers for request paths and display formatting, testable outside wasm.

use reelbox_api_models::ProblemDetails;

/// Session bootstrap path.
pub const PROFILE_PATH: &str = "/v1/profile";
/// Profile picture upload path.
pub const PROFILE_PICTURE_PATH: &str = "/v1/profile/picture";
/// Personal video collection path.
pub const PROFILE_VIDEOS_PATH: &str = "/v1/profile/videos";

/// Path for a single personal video.
#[must_use]
pub fn video_path(video_id: &str) -> String {
    format!("{PROFILE_VIDEOS_PATH}/{}", urlencoding::encode(video_id))
}

/// Path for renaming a personal video.
#[must_use]
pub fn video_name_path(video_id: &str) -> String {
    format!("{}/name", video_path(video_id))
}

/// Path for sharing a personal video with the community feed.
#[must_use]
pub fn community_path(video_id: &str) -> String {
    format!("{}/community", video_path(video_id))
}

/// Join an API origin and an absolute path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Human-friendly size for upload limits: whole megabytes when exact, else one decimal.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    const BYTES_PER_MIB: u64 = 1024 * 1024;
    if bytes % BYTES_PER_MIB == 0 {
        return format!("{}MB", bytes / BYTES_PER_MIB);
    }
    let tenths = bytes.saturating_mul(10) / BYTES_PER_MIB;
    format!("{}.{}MB", tenths / 10, tenths % 10)
}

/// Message for a non-success HTTP response.
///
/// Prefers the problem document's detail or title; falls back to the status line.
#[must_use]
pub fn http_failure_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(problem) = serde_json::from_str::<ProblemDetails>(body) {
        let message = problem.message().trim();
        if !message.is_empty() {
            return message.to_string();
        }
    }
    let status_text = status_text.trim();
    if status_text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status} {status_text}")
    }
}
