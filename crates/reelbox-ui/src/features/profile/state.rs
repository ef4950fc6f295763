//! Local interaction state for the profile page.
//!
//! # Design
//! - The view-controller is the sole mutator; every change flows through [`ProfileEvent`].
//! - The rename error lives in one optional field, so "has error" and "non-empty message"
//!   cannot drift apart.
//! - Notices carry catalog keys and remote text, never rendered strings.

use crate::core::error::ProfileError;
use crate::core::messages::{MessageKey, describe_rejection};
use crate::core::operation::Outcome;
use crate::core::session::ProfileSnapshot;
use crate::features::profile::actions::MenuState;
use crate::features::profile::controller::{
    PictureUploaded, VideoFetchResult, VideoRenamed, VideoShared, VideoUploaded,
};
use crate::features::profile::logic::FetchKey;
use crate::i18n::TranslationBundle;
use std::rc::Rc;
use yew::Reducible;

/// Body of a notice or inline error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeBody {
    /// Fixed catalog entry.
    Catalog(MessageKey),
    /// Message returned by a remote operation.
    Remote(String),
    /// Client-side rejection.
    Rejected(ProfileError),
}

impl NoticeBody {
    /// Body for a remote failure; empty messages fall back to the generic text.
    #[must_use]
    pub fn from_failure(message: &str) -> Self {
        if message.trim().is_empty() {
            Self::Catalog(MessageKey::GenericFailure)
        } else {
            Self::Remote(message.to_string())
        }
    }

    /// Render the body with the active bundle.
    #[must_use]
    pub fn text(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Catalog(key) => key.text(bundle),
            Self::Remote(message) => message.clone(),
            Self::Rejected(error) => describe_rejection(bundle, error),
        }
    }
}

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed or was rejected.
    Error,
}

/// Dismissible modal notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Identifier used to dismiss the notice.
    pub id: u64,
    /// Severity.
    pub kind: NoticeKind,
    /// Title entry.
    pub title: MessageKey,
    /// Body content.
    pub body: NoticeBody,
}

/// Rename modal visibility and its inline error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    rename_modal_open: bool,
    rename_error: Option<NoticeBody>,
}

impl InteractionState {
    /// Whether the rename modal is visible.
    #[must_use]
    pub const fn is_rename_modal_open(&self) -> bool {
        self.rename_modal_open
    }

    /// Whether an inline rename error is shown.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.rename_error.is_some()
    }

    /// Inline rename error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&NoticeBody> {
        self.rename_error.as_ref()
    }

    /// Rendered inline error; empty when there is none.
    #[must_use]
    pub fn error_message(&self, bundle: &TranslationBundle) -> String {
        self.rename_error
            .as_ref()
            .map(|body| body.text(bundle))
            .unwrap_or_default()
    }

    fn open_rename(&mut self) {
        self.rename_modal_open = true;
        self.rename_error = None;
    }

    fn close_rename(&mut self) {
        self.rename_modal_open = false;
        self.rename_error = None;
    }
}

/// Everything that can change the profile page's local state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileEvent {
    /// The rename modal was opened from the menu.
    RenameModalOpened,
    /// The rename modal was dismissed.
    RenameModalClosed,
    /// The rename form failed client-side validation.
    RenameRejected(ProfileError),
    /// An upload or share was blocked before dispatch.
    ActionRejected(ProfileError),
    /// A video fetch was issued for the given inputs.
    FetchIssued(FetchKey),
    /// A video fetch resolved.
    VideoFetched {
        /// Inputs the fetch was issued with.
        key: FetchKey,
        /// Result of the fetch.
        outcome: Outcome<VideoFetchResult>,
    },
    /// A profile picture upload resolved.
    PictureUploaded(Outcome<PictureUploaded>),
    /// A video upload resolved.
    VideoUploaded(Outcome<VideoUploaded>),
    /// A rename resolved.
    VideoRenamed(Outcome<VideoRenamed>),
    /// A share with the community feed resolved.
    VideoShared(Outcome<VideoShared>),
    /// The user acknowledged a notice.
    NoticeDismissed(u64),
}

/// Local state owned by the profile view-controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileViewState {
    /// Rename modal and inline error.
    pub interaction: InteractionState,
    video: Option<VideoFetchResult>,
    issued_fetch: Option<FetchKey>,
    notices: Vec<Notice>,
    next_notice_id: u64,
}

impl ProfileViewState {
    /// State for a freshly mounted page; a video already known to the store plays until
    /// the fetch for the current inputs lands.
    #[must_use]
    pub fn from_snapshot(profile: &ProfileSnapshot) -> Self {
        let video = profile
            .video_id()
            .zip(profile.video_ref.as_deref())
            .map(|(video_id, video_ref)| VideoFetchResult {
                video_id: video_id.to_string(),
                video_ref: video_ref.to_string(),
            });
        Self {
            video,
            ..Self::default()
        }
    }

    /// Playable video, once fetched.
    #[must_use]
    pub const fn video(&self) -> Option<&VideoFetchResult> {
        self.video.as_ref()
    }

    /// Key of the most recently issued fetch.
    #[must_use]
    pub const fn issued_fetch(&self) -> Option<&FetchKey> {
        self.issued_fetch.as_ref()
    }

    /// Current action menu state.
    #[must_use]
    pub const fn menu_state(&self) -> MenuState {
        if self.video.is_some() {
            MenuState::HasVideo
        } else {
            MenuState::NoVideo
        }
    }

    /// Notice awaiting acknowledgement, oldest first.
    #[must_use]
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    /// All queued notices.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: ProfileEvent) {
        match event {
            ProfileEvent::RenameModalOpened => self.interaction.open_rename(),
            ProfileEvent::RenameModalClosed => self.interaction.close_rename(),
            ProfileEvent::RenameRejected(error) => {
                self.interaction.rename_error = Some(NoticeBody::Rejected(error));
            }
            ProfileEvent::ActionRejected(error) => {
                self.push_error(NoticeBody::Rejected(error));
            }
            ProfileEvent::FetchIssued(key) => self.issued_fetch = Some(key),
            ProfileEvent::VideoFetched { key, outcome } => self.apply_fetch(&key, outcome),
            ProfileEvent::PictureUploaded(outcome) => match outcome {
                Ok(_) => self.push_success(MessageKey::ProfilePictureUpdated),
                Err(failure) => self.push_error(NoticeBody::from_failure(failure.message())),
            },
            ProfileEvent::VideoUploaded(outcome) => match outcome {
                Ok(_) => self.push_success(MessageKey::VideoUpdated),
                Err(failure) => self.push_error(NoticeBody::from_failure(failure.message())),
            },
            ProfileEvent::VideoRenamed(outcome) => match outcome {
                Ok(renamed) => {
                    self.interaction.close_rename();
                    self.video = Some(renamed.video);
                    self.push_success(MessageKey::VideoNameChanged);
                }
                Err(failure) => {
                    self.interaction.rename_error =
                        Some(NoticeBody::from_failure(failure.message()));
                }
            },
            ProfileEvent::VideoShared(outcome) => match outcome {
                Ok(shared) => {
                    tracing::info!(
                        community_video_id = %shared.community_video_id,
                        "video shared with community"
                    );
                }
                Err(failure) => self.push_error(NoticeBody::from_failure(failure.message())),
            },
            ProfileEvent::NoticeDismissed(id) => self.notices.retain(|notice| notice.id != id),
        }
    }

    fn apply_fetch(&mut self, key: &FetchKey, outcome: Outcome<VideoFetchResult>) {
        if self.issued_fetch.as_ref() != Some(key) {
            tracing::debug!(video_id = %key.video_id, "ignoring stale video fetch");
            return;
        }
        match outcome {
            Ok(video) => self.video = Some(video),
            Err(failure) => {
                tracing::warn!(
                    video_id = %key.video_id,
                    error = %failure,
                    "personal video fetch failed"
                );
            }
        }
    }

    fn push_success(&mut self, body: MessageKey) {
        self.push(NoticeKind::Success, MessageKey::SuccessTitle, NoticeBody::Catalog(body));
    }

    fn push_error(&mut self, body: NoticeBody) {
        self.push(NoticeKind::Error, MessageKey::FailureTitle, body);
    }

    fn push(&mut self, kind: NoticeKind, title: MessageKey, body: NoticeBody) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            title,
            body,
        });
    }
}

impl Reducible for ProfileViewState {
    type Action = ProfileEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
