//! Session data owned by the global store.
//!
//! # Design
//! - Identity and profile snapshots are read-only inputs for the profile view-controller.
//! - Keep the access token opaque so it never lands in logs.

use reelbox_api_models::{ProfileResponse, SessionResponse};
use std::fmt;

/// Bearer credential for the profile API.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token for request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token carries any usable characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Signed-in user as published by the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Credential used for every profile operation.
    pub access_token: AccessToken,
}

/// Last-known server state of the profile media.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    /// Profile picture reference, if one was uploaded.
    pub profile_picture_ref: Option<String>,
    /// Display name of the personal video.
    pub video_name: Option<String>,
    /// Identifier of the personal video.
    pub video_id: Option<String>,
    /// Playable reference for the personal video, once one is known.
    pub video_ref: Option<String>,
}

impl ProfileSnapshot {
    /// Video identifier, ignoring blank values.
    #[must_use]
    pub fn video_id(&self) -> Option<&str> {
        self.video_id
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

impl From<ProfileResponse> for ProfileSnapshot {
    fn from(value: ProfileResponse) -> Self {
        Self {
            profile_picture_ref: value.profile_pic_data,
            video_name: value.video_name,
            video_id: value.video_id,
            video_ref: None,
        }
    }
}

/// Split a bootstrap response into the identity and profile halves.
#[must_use]
pub fn session_from_response(
    response: SessionResponse,
    access_token: AccessToken,
) -> (UserIdentity, ProfileSnapshot) {
    let identity = UserIdentity {
        name: response.user.name,
        email: response.user.email,
        phone_number: response.user.number,
        access_token,
    };
    (identity, ProfileSnapshot::from(response.profile))
}
