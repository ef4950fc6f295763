//! Video action menu state machine and navigation intents.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Menu contents are a pure function of the menu state.

/// Secondary actions offered for an existing personal video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoMenuAction {
    /// Pick a replacement video file.
    ChangeVideo,
    /// Open the rename modal.
    RenameVideo,
    /// Share the video with the community feed.
    ShareVideo,
}

impl VideoMenuAction {
    /// Stable menu key for the item.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ChangeVideo => "1",
            Self::RenameVideo => "2",
            Self::ShareVideo => "3",
        }
    }

    /// Resolve a menu key back to its action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_ACTIONS.iter().copied().find(|action| action.key() == key)
    }

    /// Translation path for the menu label.
    #[must_use]
    pub const fn label_path(self) -> &'static str {
        match self {
            Self::ChangeVideo => "video_menu.change",
            Self::RenameVideo => "video_menu.rename",
            Self::ShareVideo => "video_menu.share",
        }
    }

    /// English label used when a bundle lacks the entry.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::ChangeVideo => "Change Video",
            Self::RenameVideo => "Change Video Name",
            Self::ShareVideo => "Share Video with Community",
        }
    }
}

const ALL_ACTIONS: [VideoMenuAction; 3] = [
    VideoMenuAction::ChangeVideo,
    VideoMenuAction::RenameVideo,
    VideoMenuAction::ShareVideo,
];

/// Whether the page currently holds a playable video.
///
/// Once a video is present it stays present for the page's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    /// No video reference yet; the menu is empty.
    #[default]
    NoVideo,
    /// A video reference is loaded; all actions are offered.
    HasVideo,
}

/// Actions offered in a given menu state.
#[must_use]
pub const fn menu_for(state: MenuState) -> &'static [VideoMenuAction] {
    match state {
        MenuState::NoVideo => &[],
        MenuState::HasVideo => &ALL_ACTIONS,
    }
}

/// What the view must do after a menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    /// Open the hidden video file picker.
    OpenVideoPicker,
    /// Show the rename modal.
    OpenRenameModal,
    /// Dispatch a share-with-community request.
    ShareVideo,
}

impl From<VideoMenuAction> for MenuEffect {
    fn from(action: VideoMenuAction) -> Self {
        match action {
            VideoMenuAction::ChangeVideo => Self::OpenVideoPicker,
            VideoMenuAction::RenameVideo => Self::OpenRenameModal,
            VideoMenuAction::ShareVideo => Self::ShareVideo,
        }
    }
}

/// Destinations owned by the router for editing contact fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactEdit {
    /// Change the email address.
    Email,
    /// Change the phone number.
    PhoneNumber,
}
