//! HTTP client helpers (REST).

use crate::core::logic::{
    PROFILE_PATH, PROFILE_PICTURE_PATH, PROFILE_VIDEOS_PATH, bearer, community_path,
    http_failure_message, join_url, video_name_path, video_path,
};
use crate::core::operation::RemoteFailure;
use crate::core::session::AccessToken;
use gloo_net::http::{Request, Response};
use reelbox_api_models::{
    CommunityVideoResponse, ProfilePictureResponse, ProfileVideoResponse, RenameVideoRequest,
    SessionResponse,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::FormData;

/// Transport-level failures from the profile API.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request never produced a response, or the body did not decode.
    #[error("request failed: {source}")]
    Transport {
        /// Underlying fetch or decode error.
        #[source]
        source: gloo_net::Error,
    },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or the status line.
        message: String,
    },
    /// The multipart body could not be assembled.
    #[error("failed to attach file to request")]
    Form,
}

impl From<gloo_net::Error> for ApiError {
    fn from(source: gloo_net::Error) -> Self {
        Self::Transport { source }
    }
}

impl From<ApiError> for RemoteFailure {
    fn from(error: ApiError) -> Self {
        Self::new(error.to_string())
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: http_failure_message(status, &status_text, &body),
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let response = request.send().await?;
        Self::read_json(response).await
    }

    fn file_form(file: &web_sys::File) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Form)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Form)?;
        Ok(form)
    }

    pub(crate) async fn fetch_session(
        &self,
        token: &AccessToken,
    ) -> Result<SessionResponse, ApiError> {
        let request =
            Request::get(&self.url(PROFILE_PATH)).header("Authorization", &bearer(token.expose()));
        Self::send(request).await
    }

    pub(crate) async fn fetch_video(
        &self,
        token: &AccessToken,
        video_id: &str,
    ) -> Result<ProfileVideoResponse, ApiError> {
        let request = Request::get(&self.url(&video_path(video_id)))
            .header("Authorization", &bearer(token.expose()));
        Self::send(request).await
    }

    pub(crate) async fn upload_profile_picture(
        &self,
        token: &AccessToken,
        file: &web_sys::File,
    ) -> Result<ProfilePictureResponse, ApiError> {
        let request = Request::post(&self.url(PROFILE_PICTURE_PATH))
            .header("Authorization", &bearer(token.expose()))
            .body(Self::file_form(file)?);
        Self::send(request).await
    }

    pub(crate) async fn upload_video(
        &self,
        token: &AccessToken,
        file: &web_sys::File,
    ) -> Result<ProfileVideoResponse, ApiError> {
        let request = Request::post(&self.url(PROFILE_VIDEOS_PATH))
            .header("Authorization", &bearer(token.expose()))
            .body(Self::file_form(file)?);
        Self::send(request).await
    }

    pub(crate) async fn rename_video(
        &self,
        token: &AccessToken,
        video_id: &str,
        video_name: &str,
    ) -> Result<ProfileVideoResponse, ApiError> {
        let request = Request::put(&self.url(&video_name_path(video_id)))
            .header("Authorization", &bearer(token.expose()))
            .json(&RenameVideoRequest {
                video_name: video_name.to_string(),
            })?;
        Self::send(request).await
    }

    pub(crate) async fn convert_video(
        &self,
        token: &AccessToken,
        video_id: &str,
    ) -> Result<CommunityVideoResponse, ApiError> {
        let request = Request::post(&self.url(&community_path(video_id)))
            .header("Authorization", &bearer(token.expose()));
        Self::send(request).await
    }
}
