//! HTTP-backed profile operations.
//!
//! # Design
//! - Each call spawns its request and returns the handle at once.
//! - Successful uploads and renames update the global store before the handle resolves,
//!   so selectors see the new snapshot by the time the page reacts.
//! - Transport and status errors collapse into [`RemoteFailure`].

use crate::core::operation::{OperationHandle, Outcome, RemoteFailure, pending};
use crate::core::store::{
    AppStore, record_profile_picture, record_uploaded_video, record_video_name,
};
use crate::features::profile::controller::{
    PictureUploaded, ProfileOperations, VideoFetchResult, VideoRenamed, VideoShared,
    VideoUploaded,
};
use crate::features::profile::logic::{
    ConvertVideoRequest, FetchVideoRequest, RenameVideoRequest, UploadRequest,
};
use crate::services::api::{ApiClient, ApiError};
use std::future::Future;
use std::rc::Rc;
use yewdux::dispatch::Dispatch;

/// Profile operations served by the REST API.
pub(crate) struct HttpProfileOperations {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl HttpProfileOperations {
    pub(crate) const fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }
}

fn spawn_operation<T, F>(operation: &'static str, work: F) -> OperationHandle<T>
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let (completer, handle) = pending();
    yew::platform::spawn_local(async move {
        let outcome: Outcome<T> = work.await.map_err(|err| {
            tracing::warn!(operation, error = %err, "profile operation failed");
            RemoteFailure::from(err)
        });
        completer.complete(outcome);
    });
    handle
}

impl ProfileOperations for HttpProfileOperations {
    type File = web_sys::File;

    fn fetch_video(&self, request: FetchVideoRequest) -> OperationHandle<VideoFetchResult> {
        let client = Rc::clone(&self.client);
        spawn_operation("fetch_video", async move {
            let video = client
                .fetch_video(&request.access_token, &request.video_id)
                .await?;
            Ok(VideoFetchResult {
                video_id: video.video_id,
                video_ref: video.profile_video,
            })
        })
    }

    fn upload_profile_picture(
        &self,
        request: UploadRequest<Self::File>,
    ) -> OperationHandle<PictureUploaded> {
        let client = Rc::clone(&self.client);
        let dispatch = self.dispatch.clone();
        spawn_operation("upload_profile_picture", async move {
            let uploaded = client
                .upload_profile_picture(&request.access_token, &request.file.file)
                .await?;
            let picture_ref = uploaded.profile_pic_data;
            let stored = picture_ref.clone();
            dispatch.reduce_mut(move |store| record_profile_picture(store, stored));
            Ok(PictureUploaded { picture_ref })
        })
    }

    fn upload_video(&self, request: UploadRequest<Self::File>) -> OperationHandle<VideoUploaded> {
        let client = Rc::clone(&self.client);
        let dispatch = self.dispatch.clone();
        spawn_operation("upload_video", async move {
            let uploaded = client
                .upload_video(&request.access_token, &request.file.file)
                .await?;
            let result = VideoUploaded {
                video_id: uploaded.video_id,
                video_name: uploaded.video_name,
            };
            let (video_id, video_name) = (result.video_id.clone(), result.video_name.clone());
            dispatch.reduce_mut(move |store| record_uploaded_video(store, video_id, video_name));
            Ok(result)
        })
    }

    fn rename_video(&self, request: RenameVideoRequest) -> OperationHandle<VideoRenamed> {
        let client = Rc::clone(&self.client);
        let dispatch = self.dispatch.clone();
        spawn_operation("rename_video", async move {
            let renamed = client
                .rename_video(&request.access_token, &request.video_id, &request.video_name)
                .await?;
            let result = VideoRenamed {
                video_name: renamed.video_name.unwrap_or(request.video_name),
                video: VideoFetchResult {
                    video_id: renamed.video_id,
                    video_ref: renamed.profile_video,
                },
            };
            let (video_name, video_ref) =
                (result.video_name.clone(), result.video.video_ref.clone());
            dispatch.reduce_mut(move |store| record_video_name(store, video_name, video_ref));
            Ok(result)
        })
    }

    fn convert_video(&self, request: ConvertVideoRequest) -> OperationHandle<VideoShared> {
        let client = Rc::clone(&self.client);
        spawn_operation("convert_video", async move {
            let shared = client
                .convert_video(&request.access_token, &request.video_id)
                .await?;
            Ok(VideoShared {
                community_video_id: shared.community_video_id,
            })
        })
    }
}
