//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Only the session bootstrap and the profile operations mutate the session slice;
//!   views read it through selectors.

use crate::core::session::{AccessToken, ProfileSnapshot, UserIdentity, session_from_response};
use reelbox_api_models::SessionResponse;
#[cfg(target_arch = "wasm32")]
use yewdux::dispatch::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Signed-in user and profile snapshot.
    pub session: SessionSlice,
}

/// Shared session state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Bootstrap progress.
    pub status: SessionStatus,
    /// Signed-in user, once loaded.
    pub identity: Option<UserIdentity>,
    /// Last-known profile media state.
    pub profile: ProfileSnapshot,
}

/// Progress of the session bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Bootstrap request in flight.
    #[default]
    Loading,
    /// No access token is stored.
    SignedOut,
    /// Identity and profile are available.
    Ready,
    /// Bootstrap failed with a message.
    Failed(String),
}

/// Shared dispatch handle for the app store.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Mark the session as loading.
pub fn begin_session_load(store: &mut AppStore) {
    store.session.status = SessionStatus::Loading;
}

/// Clear the session; no token is available.
pub fn sign_out(store: &mut AppStore) {
    store.session = SessionSlice {
        status: SessionStatus::SignedOut,
        ..SessionSlice::default()
    };
}

/// Install a freshly loaded session.
pub fn apply_session(store: &mut AppStore, response: SessionResponse, token: AccessToken) {
    let (identity, profile) = session_from_response(response, token);
    store.session = SessionSlice {
        status: SessionStatus::Ready,
        identity: Some(identity),
        profile,
    };
}

/// Record a failed bootstrap.
pub fn session_failed(store: &mut AppStore, message: impl Into<String>) {
    store.session.status = SessionStatus::Failed(message.into());
}

/// Record the picture reference returned by a successful upload.
pub fn record_profile_picture(store: &mut AppStore, picture_ref: String) {
    store.session.profile.profile_picture_ref = Some(picture_ref);
}

/// Record the video returned by a successful upload.
pub fn record_uploaded_video(store: &mut AppStore, video_id: String, video_name: Option<String>) {
    let profile = &mut store.session.profile;
    profile.video_id = Some(video_id);
    profile.video_name = video_name;
    profile.video_ref = None;
}

/// Record the name and playable reference returned by a successful rename.
pub fn record_video_name(store: &mut AppStore, video_name: String, video_ref: String) {
    let profile = &mut store.session.profile;
    profile.video_name = Some(video_name);
    profile.video_ref = Some(video_ref);
}
