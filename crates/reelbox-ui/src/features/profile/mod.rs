//! Profile page feature slice.
//!
//! # Design
//! - `actions`, `logic`, `state` and `controller` are DOM-free and tested natively.
//! - `api` and `view` bind the controller to HTTP and Yew on wasm32.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod controller;
#[cfg(test)]
mod fake;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

#[cfg(test)]
mod tests {
    use super::actions::{MenuEffect, MenuState, menu_for};
    use super::controller::ProfileController;
    use super::fake::{Call, ScriptedOperations};
    use super::logic::UploadFile;
    use super::state::{NoticeBody, NoticeKind, ProfileEvent, ProfileViewState};
    use crate::core::config::UiConfig;
    use crate::core::messages::MessageKey;
    use crate::core::session::{AccessToken, ProfileSnapshot, UserIdentity};
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Page {
        ops: Rc<ScriptedOperations>,
        controller: ProfileController<ScriptedOperations>,
        state: ProfileViewState,
        inbox: Rc<RefCell<Vec<ProfileEvent>>>,
        mount_fetch: Option<LocalBoxFuture<'static, ()>>,
    }

    impl Page {
        fn mount(token: &str, video_id: Option<&str>) -> Self {
            let ops = Rc::new(ScriptedOperations::default());
            let profile = ProfileSnapshot {
                video_id: video_id.map(ToString::to_string),
                video_name: Some("Drive".to_string()),
                ..ProfileSnapshot::default()
            };
            let controller = ProfileController::new(
                Rc::clone(&ops),
                UserIdentity {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    phone_number: "555-0100".to_string(),
                    access_token: AccessToken::new(token),
                },
                profile.clone(),
                Rc::new(UiConfig::default()),
            );
            let mut page = Self {
                ops,
                controller,
                state: ProfileViewState::from_snapshot(&profile),
                inbox: Rc::default(),
                mount_fetch: None,
            };
            page.mount_fetch = page.render();
            page
        }

        /// Run the page's video refresh the way the mount effect does.
        fn render(&mut self) -> Option<LocalBoxFuture<'static, ()>> {
            let inbox = Rc::clone(&self.inbox);
            let settle = self
                .controller
                .refresh_video(self.state.issued_fetch(), move |event| {
                    inbox.borrow_mut().push(event);
                });
            self.deliver();
            settle.map(FutureExt::boxed_local)
        }

        fn deliver(&mut self) {
            let events: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
            for event in events {
                self.state.apply(event);
            }
        }
    }

    fn image(name: &str) -> UploadFile<Vec<u8>> {
        UploadFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size_bytes: 2048,
            file: vec![1, 2, 3],
        }
    }

    #[test]
    fn mounting_fetches_once_and_fills_the_menu() {
        let mut page = Page::mount("tok1", Some("v1"));
        assert!(page.render().is_none());
        assert!(page.render().is_none());
        assert_eq!(
            page.ops.calls(),
            vec![Call::FetchVideo {
                token: "tok1".to_string(),
                video_id: "v1".to_string(),
            }]
        );

        let settle = page.mount_fetch.take().expect("mount fetch");
        page.ops.fetch_next("v1", "blob:v1");
        block_on(settle);
        page.deliver();

        assert_eq!(page.state.menu_state(), MenuState::HasVideo);
        assert_eq!(menu_for(page.state.menu_state()).len(), 3);
        assert_eq!(
            page.state.video().map(|video| video.video_ref.as_str()),
            Some("blob:v1")
        );
    }

    #[test]
    fn signed_out_or_videoless_pages_do_not_fetch() {
        let videoless = Page::mount("tok1", None);
        assert!(videoless.mount_fetch.is_none());
        assert!(videoless.ops.calls().is_empty());

        let signed_out = Page::mount("", Some("v1"));
        assert!(signed_out.mount_fetch.is_none());
        assert_eq!(menu_for(signed_out.state.menu_state()).len(), 0);
    }

    #[test]
    fn rename_success_closes_modal_with_payload_video() {
        let mut page = Page::mount("tok1", Some("v1"));
        page.ops.fail_next("fetch unavailable");

        assert_eq!(
            page.controller.select_menu_item("2"),
            Some(MenuEffect::OpenRenameModal)
        );
        page.state.apply(ProfileEvent::RenameModalOpened);
        let handle = page.controller.rename_video("Road trip").expect("dispatched");
        page.ops.rename_next("Road trip", "blob:v1-renamed");
        page.state.apply(ProfileEvent::VideoRenamed(block_on(handle)));

        assert!(!page.state.interaction.is_rename_modal_open());
        assert_eq!(
            page.state.video().map(|video| video.video_ref.as_str()),
            Some("blob:v1-renamed")
        );
        assert_eq!(page.state.menu_state(), MenuState::HasVideo);
    }

    #[test]
    fn rename_failure_shows_payload_inline() {
        let mut page = Page::mount("tok1", Some("v1"));
        page.state.apply(ProfileEvent::RenameModalOpened);
        let handle = page.controller.rename_video("Road trip").expect("dispatched");
        page.ops.fail_last("name taken");
        page.state.apply(ProfileEvent::VideoRenamed(block_on(handle)));

        assert!(page.state.interaction.is_rename_modal_open());
        assert_eq!(
            page.state.interaction.error(),
            Some(&NoticeBody::Remote("name taken".to_string()))
        );
    }

    #[test]
    fn blank_rename_is_blocked_before_any_call() {
        let mut page = Page::mount("tok1", Some("v1"));
        let calls_before = page.ops.calls().len();
        page.state.apply(ProfileEvent::RenameModalOpened);

        let error = page.controller.rename_video("").expect_err("blocked");
        page.state.apply(ProfileEvent::RenameRejected(error));

        assert_eq!(page.ops.calls().len(), calls_before);
        assert!(page.state.interaction.has_error());
        assert!(page.state.interaction.is_rename_modal_open());
    }

    #[test]
    fn picture_upload_failure_only_adds_a_notice() {
        let mut page = Page::mount("tok1", None);
        let before = page.state.clone();
        let handle = page
            .controller
            .upload_profile_picture(image("me.png"))
            .expect("dispatched");
        page.ops.fail_next("disk full");
        page.state.apply(ProfileEvent::PictureUploaded(block_on(handle)));

        let notice = page.state.current_notice().expect("notice").clone();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, MessageKey::FailureTitle);
        assert_eq!(notice.body, NoticeBody::Remote("disk full".to_string()));

        page.state.apply(ProfileEvent::NoticeDismissed(notice.id));
        assert_eq!(page.state.notices(), before.notices());
        assert_eq!(page.state.menu_state(), before.menu_state());
        assert_eq!(page.state.interaction, before.interaction);
        assert_eq!(page.state.video(), before.video());
    }

    #[test]
    fn uploads_report_success_in_completion_order() {
        let mut page = Page::mount("tok1", None);
        let picture = page
            .controller
            .upload_profile_picture(image("me.png"))
            .expect("picture");
        let video = page
            .controller
            .upload_video(UploadFile {
                name: "clip.mp4".to_string(),
                mime: "video/mp4".to_string(),
                size_bytes: 4096,
                file: Vec::new(),
            })
            .expect("video");

        page.ops.video_next("v2");
        page.state.apply(ProfileEvent::VideoUploaded(block_on(video)));
        page.ops.picture_next("https://cdn/me.png");
        page.state.apply(ProfileEvent::PictureUploaded(block_on(picture)));

        let bodies: Vec<_> = page.state.notices().iter().map(|n| n.body.clone()).collect();
        assert_eq!(
            bodies,
            vec![
                NoticeBody::Catalog(MessageKey::VideoUpdated),
                NoticeBody::Catalog(MessageKey::ProfilePictureUpdated),
            ]
        );
    }

    #[test]
    fn sharing_twice_is_not_deduplicated() {
        let mut page = Page::mount("tok1", Some("v1"));
        let first = page.controller.share_video().expect("first");
        let second = page.controller.share_video().expect("second");

        let converts = page
            .ops
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::ConvertVideo { .. }))
            .count();
        assert_eq!(converts, 2);

        page.ops.share_next("c-1");
        page.ops.fail_last("quota exceeded");
        page.state.apply(ProfileEvent::VideoShared(block_on(first)));
        page.state.apply(ProfileEvent::VideoShared(block_on(second)));
        assert_eq!(page.state.notices().len(), 1);
        assert_eq!(
            page.state.current_notice().map(|n| n.body.clone()),
            Some(NoticeBody::Remote("quota exceeded".to_string()))
        );
    }
}
