//! Scripted [`ProfileOperations`] for tests.
//!
//! Records every call and keeps its completer so a test can resolve operations in any order.

use crate::core::operation::{Completer, OperationHandle, pending};
use crate::features::profile::controller::{
    PictureUploaded, ProfileOperations, VideoFetchResult, VideoRenamed, VideoShared,
    VideoUploaded,
};
use crate::features::profile::logic::{
    ConvertVideoRequest, FetchVideoRequest, RenameVideoRequest, UploadRequest,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A recorded operation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    FetchVideo {
        token: String,
        video_id: String,
    },
    UploadPicture {
        token: String,
        file_name: String,
    },
    UploadVideo {
        token: String,
        file_name: String,
    },
    RenameVideo {
        token: String,
        video_id: String,
        video_name: String,
    },
    ConvertVideo {
        token: String,
        video_id: String,
    },
}

enum Waiting {
    Fetch(Completer<VideoFetchResult>),
    Picture(Completer<PictureUploaded>),
    Video(Completer<VideoUploaded>),
    Rename(Completer<VideoRenamed>),
    Convert(Completer<VideoShared>),
}

impl Waiting {
    fn fail(self, message: &str) {
        match self {
            Self::Fetch(completer) => completer.fail(message),
            Self::Picture(completer) => completer.fail(message),
            Self::Video(completer) => completer.fail(message),
            Self::Rename(completer) => completer.fail(message),
            Self::Convert(completer) => completer.fail(message),
        }
    }
}

#[derive(Default)]
pub(crate) struct ScriptedOperations {
    calls: RefCell<Vec<Call>>,
    waiting: RefCell<VecDeque<Waiting>>,
}

impl ScriptedOperations {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn outstanding(&self) -> usize {
        self.waiting.borrow().len()
    }

    /// Fail the oldest outstanding operation.
    pub(crate) fn fail_next(&self, message: &str) {
        let waiting = self.waiting.borrow_mut().pop_front();
        waiting.expect("no outstanding operation").fail(message);
    }

    /// Fail the newest outstanding operation.
    pub(crate) fn fail_last(&self, message: &str) {
        let waiting = self.waiting.borrow_mut().pop_back();
        waiting.expect("no outstanding operation").fail(message);
    }

    pub(crate) fn fetch_next(&self, video_id: &str, video_ref: &str) {
        match self.take(|w| matches!(w, Waiting::Fetch(_))) {
            Waiting::Fetch(completer) => completer.succeed(VideoFetchResult {
                video_id: video_id.to_string(),
                video_ref: video_ref.to_string(),
            }),
            _ => unreachable!(),
        }
    }

    pub(crate) fn picture_next(&self, picture_ref: &str) {
        match self.take(|w| matches!(w, Waiting::Picture(_))) {
            Waiting::Picture(completer) => completer.succeed(PictureUploaded {
                picture_ref: picture_ref.to_string(),
            }),
            _ => unreachable!(),
        }
    }

    pub(crate) fn video_next(&self, video_id: &str) {
        match self.take(|w| matches!(w, Waiting::Video(_))) {
            Waiting::Video(completer) => completer.succeed(VideoUploaded {
                video_id: video_id.to_string(),
                video_name: None,
            }),
            _ => unreachable!(),
        }
    }

    pub(crate) fn rename_next(&self, video_name: &str, video_ref: &str) {
        match self.take(|w| matches!(w, Waiting::Rename(_))) {
            Waiting::Rename(completer) => completer.succeed(VideoRenamed {
                video_name: video_name.to_string(),
                video: VideoFetchResult {
                    video_id: "v1".to_string(),
                    video_ref: video_ref.to_string(),
                },
            }),
            _ => unreachable!(),
        }
    }

    pub(crate) fn share_next(&self, community_video_id: &str) {
        match self.take(|w| matches!(w, Waiting::Convert(_))) {
            Waiting::Convert(completer) => completer.succeed(VideoShared {
                community_video_id: community_video_id.to_string(),
            }),
            _ => unreachable!(),
        }
    }

    fn take(&self, matches: impl Fn(&Waiting) -> bool) -> Waiting {
        let mut waiting = self.waiting.borrow_mut();
        let index = waiting
            .iter()
            .position(matches)
            .expect("no outstanding operation of that kind");
        waiting.remove(index).expect("index in range")
    }

    fn record<T>(
        &self,
        call: Call,
        wrap: impl FnOnce(Completer<T>) -> Waiting,
    ) -> OperationHandle<T> {
        let (completer, handle) = pending();
        self.calls.borrow_mut().push(call);
        self.waiting.borrow_mut().push_back(wrap(completer));
        handle
    }
}

impl ProfileOperations for ScriptedOperations {
    type File = Vec<u8>;

    fn fetch_video(&self, request: FetchVideoRequest) -> OperationHandle<VideoFetchResult> {
        self.record(
            Call::FetchVideo {
                token: request.access_token.expose().to_string(),
                video_id: request.video_id,
            },
            Waiting::Fetch,
        )
    }

    fn upload_profile_picture(
        &self,
        request: UploadRequest<Self::File>,
    ) -> OperationHandle<PictureUploaded> {
        self.record(
            Call::UploadPicture {
                token: request.access_token.expose().to_string(),
                file_name: request.file.name,
            },
            Waiting::Picture,
        )
    }

    fn upload_video(&self, request: UploadRequest<Self::File>) -> OperationHandle<VideoUploaded> {
        self.record(
            Call::UploadVideo {
                token: request.access_token.expose().to_string(),
                file_name: request.file.name,
            },
            Waiting::Video,
        )
    }

    fn rename_video(&self, request: RenameVideoRequest) -> OperationHandle<VideoRenamed> {
        self.record(
            Call::RenameVideo {
                token: request.access_token.expose().to_string(),
                video_id: request.video_id,
                video_name: request.video_name,
            },
            Waiting::Rename,
        )
    }

    fn convert_video(&self, request: ConvertVideoRequest) -> OperationHandle<VideoShared> {
        self.record(
            Call::ConvertVideo {
                token: request.access_token.expose().to_string(),
                video_id: request.video_id,
            },
            Waiting::Convert,
        )
    }
}
