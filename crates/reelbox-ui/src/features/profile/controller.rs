//! Profile view-controller.
//!
//! # Design
//! - Identity, profile snapshot, config and the remote operations are injected; nothing is
//!   looked up from ambient globals.
//! - Every operation returns an [`OperationHandle`] immediately; callers feed the resolved
//!   outcome into [`crate::features::profile::state::ProfileViewState`].
//! - Requests are never queued or de-duplicated; each call starts an independent operation.

use crate::core::config::UiConfig;
use crate::core::error::ProfileError;
use crate::core::operation::OperationHandle;
use crate::core::session::{ProfileSnapshot, UserIdentity};
use crate::features::profile::actions::{MenuEffect, VideoMenuAction};
use crate::features::profile::logic::{
    ConvertVideoRequest, FetchKey, FetchVideoRequest, RenameVideoRequest, UploadFile, UploadKind,
    UploadRequest, build_convert_request, build_rename_request, build_upload_request, fetch_key,
};
use crate::features::profile::state::ProfileEvent;
use std::rc::Rc;

/// Playable personal video, owned by the view-controller until the next fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFetchResult {
    /// Identifier of the video.
    pub video_id: String,
    /// Reference handed to the video element.
    pub video_ref: String,
}

/// Payload of a successful profile picture upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PictureUploaded {
    /// New profile picture reference.
    pub picture_ref: String,
}

/// Payload of a successful video upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoUploaded {
    /// Identifier assigned to the new video.
    pub video_id: String,
    /// Display name assigned by the server, if any.
    pub video_name: Option<String>,
}

/// Payload of a successful rename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRenamed {
    /// Name now stored for the video.
    pub video_name: String,
    /// Updated playable video.
    pub video: VideoFetchResult,
}

/// Payload of a successful share with the community feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoShared {
    /// Identifier of the community copy.
    pub community_video_id: String,
}

/// Remote operations the profile page depends on.
///
/// Implementations start the work and return at once; the handle resolves exactly once.
pub trait ProfileOperations {
    /// Platform file handle carried by upload requests.
    type File;

    /// Fetch the playable personal video.
    fn fetch_video(&self, request: FetchVideoRequest) -> OperationHandle<VideoFetchResult>;

    /// Upload a new profile picture.
    fn upload_profile_picture(
        &self,
        request: UploadRequest<Self::File>,
    ) -> OperationHandle<PictureUploaded>;

    /// Upload a new personal video.
    fn upload_video(&self, request: UploadRequest<Self::File>) -> OperationHandle<VideoUploaded>;

    /// Rename the personal video.
    fn rename_video(&self, request: RenameVideoRequest) -> OperationHandle<VideoRenamed>;

    /// Share the personal video with the community feed.
    fn convert_video(&self, request: ConvertVideoRequest) -> OperationHandle<VideoShared>;
}

/// A video fetch in flight, tagged with the inputs it was issued for.
#[derive(Debug)]
pub struct PendingFetch {
    /// Inputs the fetch was issued with.
    pub key: FetchKey,
    /// Result handle.
    pub handle: OperationHandle<VideoFetchResult>,
}

/// Orchestrates profile operations for one render of the page.
pub struct ProfileController<O: ProfileOperations> {
    operations: Rc<O>,
    identity: UserIdentity,
    profile: ProfileSnapshot,
    config: Rc<UiConfig>,
}

impl<O: ProfileOperations> Clone for ProfileController<O> {
    fn clone(&self) -> Self {
        Self {
            operations: Rc::clone(&self.operations),
            identity: self.identity.clone(),
            profile: self.profile.clone(),
            config: Rc::clone(&self.config),
        }
    }
}

impl<O: ProfileOperations> ProfileController<O> {
    /// Bind the controller to its collaborators and the current snapshots.
    pub const fn new(
        operations: Rc<O>,
        identity: UserIdentity,
        profile: ProfileSnapshot,
        config: Rc<UiConfig>,
    ) -> Self {
        Self {
            operations,
            identity,
            profile,
            config,
        }
    }

    /// Inputs that currently determine the shown video.
    #[must_use]
    pub fn fetch_key(&self) -> Option<FetchKey> {
        fetch_key(&self.identity, &self.profile)
    }

    /// Issue a video fetch unless one was already issued for the current inputs.
    ///
    /// `issued` is the key of the most recent fetch; pass `None` on first mount.
    #[must_use]
    pub fn fetch_video(&self, issued: Option<&FetchKey>) -> Option<PendingFetch> {
        let key = self.fetch_key()?;
        if issued == Some(&key) {
            return None;
        }
        tracing::debug!(video_id = %key.video_id, "fetching personal video");
        let handle = self
            .operations
            .fetch_video(FetchVideoRequest::from(key.clone()));
        Some(PendingFetch { key, handle })
    }

    /// Bring the shown video in line with the current inputs.
    ///
    /// Records the new fetch through `dispatch` straight away and returns the future that
    /// dispatches its result; `None` when the video is already current or cannot be fetched.
    #[must_use]
    pub fn refresh_video<D>(
        &self,
        issued: Option<&FetchKey>,
        dispatch: D,
    ) -> Option<impl Future<Output = ()> + use<O, D>>
    where
        D: Fn(ProfileEvent),
    {
        let PendingFetch { key, handle } = self.fetch_video(issued)?;
        dispatch(ProfileEvent::FetchIssued(key.clone()));
        Some(async move {
            let outcome = handle.await;
            dispatch(ProfileEvent::VideoFetched { key, outcome });
        })
    }

    /// Validate and upload a new profile picture.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; no request is dispatched in that case.
    pub fn upload_profile_picture(
        &self,
        file: UploadFile<O::File>,
    ) -> Result<OperationHandle<PictureUploaded>, ProfileError> {
        let request =
            build_upload_request(&self.identity, UploadKind::Picture, file, &self.config)?;
        tracing::info!(operation = "upload_profile_picture", "dispatching upload");
        Ok(self.operations.upload_profile_picture(request))
    }

    /// Validate and upload a new personal video.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; no request is dispatched in that case.
    pub fn upload_video(
        &self,
        file: UploadFile<O::File>,
    ) -> Result<OperationHandle<VideoUploaded>, ProfileError> {
        let request = build_upload_request(&self.identity, UploadKind::Video, file, &self.config)?;
        tracing::info!(operation = "upload_video", "dispatching upload");
        Ok(self.operations.upload_video(request))
    }

    /// Submit the rename form.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::VideoNameRequired`] for blank names, before any request.
    pub fn rename_video(
        &self,
        raw_name: &str,
    ) -> Result<OperationHandle<VideoRenamed>, ProfileError> {
        let request = build_rename_request(&self.identity, &self.profile, raw_name)?;
        tracing::info!(
            operation = "rename_video",
            video_id = %request.video_id,
            "dispatching rename"
        );
        Ok(self.operations.rename_video(request))
    }

    /// Share the personal video with the community feed.
    ///
    /// # Errors
    ///
    /// Fails when the session has no token or the profile has no video.
    pub fn share_video(&self) -> Result<OperationHandle<VideoShared>, ProfileError> {
        let request = build_convert_request(&self.identity, &self.profile)?;
        tracing::info!(
            operation = "convert_video",
            video_id = %request.video_id,
            "dispatching share"
        );
        Ok(self.operations.convert_video(request))
    }

    /// Map a menu click to the effect the view must perform.
    #[must_use]
    pub fn select_menu_item(&self, key: &str) -> Option<MenuEffect> {
        tracing::debug!(key, "video action selected");
        VideoMenuAction::from_key(key).map(MenuEffect::from)
    }

    /// Upload limit shown next to the video section.
    #[must_use]
    pub fn video_limit_bytes(&self) -> u64 {
        self.config.max_video_bytes
    }
}
