//! Profile page view.
//!
//! # Design
//! - Identity and profile arrive as props from the store selectors; the view never reads
//!   the store for them directly.
//! - A fresh controller is bound every render; local state lives in one reducer.
//! - Each dispatched operation resolves on the local task queue and feeds one event back.

use crate::app::api::ServicesCtx;
use crate::app::routes::Route;
use crate::components::action_menu::VideoActionMenu;
use crate::components::modal::Modal;
use crate::components::notice::NoticeDialog;
use crate::core::config::UiConfig;
use crate::core::logic::format_megabytes;
use crate::core::operation::{OperationHandle, Outcome};
use crate::core::session::{ProfileSnapshot, UserIdentity};
use crate::features::profile::actions::{ContactEdit, MenuEffect, menu_for};
use crate::features::profile::api::HttpProfileOperations;
use crate::features::profile::controller::ProfileController;
use crate::features::profile::logic::{UploadFile, UploadKind};
use crate::features::profile::state::{ProfileEvent, ProfileViewState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Avatar shown until a profile picture is uploaded.
pub(crate) const DEFAULT_AVATAR: &str = "/assets/default-avatar.svg";

type Controller = ProfileController<HttpProfileOperations>;
type StateHandle = UseReducerHandle<ProfileViewState>;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfilePageProps {
    pub identity: UserIdentity,
    pub profile: ProfileSnapshot,
}

fn settle<T: 'static>(
    state: StateHandle,
    handle: OperationHandle<T>,
    event: fn(Outcome<T>) -> ProfileEvent,
) {
    yew::platform::spawn_local(async move {
        state.dispatch(event(handle.await));
    });
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn picked_file(event: &Event) -> Option<UploadFile<web_sys::File>> {
    let input = event.target_dyn_into::<HtmlInputElement>()?;
    let file = input.files()?.get(0);
    // Clear so picking the same file again still fires `change`.
    input.set_value("");
    let file = file?;
    Some(UploadFile {
        name: file.name(),
        mime: file.type_(),
        // Blob sizes are whole, non-negative byte counts.
        size_bytes: file.size() as u64,
        file,
    })
}

fn open_picker(input: &NodeRef) {
    if let Some(input) = input.cast::<HtmlInputElement>() {
        input.click();
    }
}

fn upload_callback(
    controller: Controller,
    state: StateHandle,
    kind: UploadKind,
) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let Some(file) = picked_file(&event) else {
            return;
        };
        let dispatched = match kind {
            UploadKind::Picture => controller
                .upload_profile_picture(file)
                .map(|handle| settle(state.clone(), handle, ProfileEvent::PictureUploaded)),
            UploadKind::Video => controller
                .upload_video(file)
                .map(|handle| settle(state.clone(), handle, ProfileEvent::VideoUploaded)),
        };
        if let Err(error) = dispatched {
            state.dispatch(ProfileEvent::ActionRejected(error));
        }
    })
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &ProfilePageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let config = use_context::<Rc<UiConfig>>().unwrap_or_default();
    let services = use_context::<ServicesCtx>().unwrap_or_else(|| ServicesCtx::new(&config));
    let state = {
        let profile = props.profile.clone();
        use_reducer(move || ProfileViewState::from_snapshot(&profile))
    };
    let navigator = use_navigator();
    let picture_input = use_node_ref();
    let video_input = use_node_ref();
    let rename_input = use_node_ref();

    let controller: Controller = ProfileController::new(
        Rc::clone(&services.profile),
        props.identity.clone(),
        props.profile.clone(),
        Rc::clone(&config),
    );

    {
        let fetch_key = controller.fetch_key();
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let issued = state.issued_fetch().cloned();
                let settle = controller
                    .refresh_video(issued.as_ref(), move |event| state.dispatch(event));
                if let Some(settle) = settle {
                    yew::platform::spawn_local(settle);
                }
                || ()
            },
            fetch_key,
        );
    }

    let on_picture_change =
        upload_callback(controller.clone(), state.clone(), UploadKind::Picture);
    let on_video_change = upload_callback(controller.clone(), state.clone(), UploadKind::Video);

    let on_change_picture = {
        let picture_input = picture_input.clone();
        Callback::from(move |_: MouseEvent| open_picker(&picture_input))
    };
    let on_pick_video = {
        let video_input = video_input.clone();
        Callback::from(move |()| open_picker(&video_input))
    };

    let on_menu_select = {
        let controller = controller.clone();
        let state = state.clone();
        let video_input = video_input.clone();
        Callback::from(move |key: String| match controller.select_menu_item(&key) {
            Some(MenuEffect::OpenVideoPicker) => open_picker(&video_input),
            Some(MenuEffect::OpenRenameModal) => state.dispatch(ProfileEvent::RenameModalOpened),
            Some(MenuEffect::ShareVideo) => match controller.share_video() {
                Ok(handle) => settle(state.clone(), handle, ProfileEvent::VideoShared),
                Err(error) => state.dispatch(ProfileEvent::ActionRejected(error)),
            },
            None => {}
        })
    };

    let on_rename_submit = {
        let controller = controller.clone();
        let state = state.clone();
        let rename_input = rename_input.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value = rename_input
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            match controller.rename_video(&value) {
                Ok(handle) => settle(state.clone(), handle, ProfileEvent::VideoRenamed),
                Err(error) => state.dispatch(ProfileEvent::RenameRejected(error)),
            }
        })
    };
    let on_rename_close = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(ProfileEvent::RenameModalClosed))
    };
    let on_notice_dismiss = {
        let state = state.clone();
        Callback::from(move |id: u64| state.dispatch(ProfileEvent::NoticeDismissed(id)))
    };

    let navigate_contact = |edit: ContactEdit| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::from(edit));
            }
        })
    };

    let identity = &props.identity;
    let avatar = props
        .profile
        .profile_picture_ref
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let video_limit = format!(
        "{} {}",
        bundle.text("profile.video_limit", "Max File Size:"),
        format_megabytes(controller.video_limit_bytes())
    );
    let video_section = match state.video() {
        Some(video) => html! {
            <>
                <video
                    key={video.video_ref.clone()}
                    class="w-full rounded-box"
                    controls=true
                    src={video.video_ref.clone()} />
                <VideoActionMenu
                    class="mt-4"
                    items={menu_for(state.menu_state()).to_vec()}
                    main_label={bundle.text("video_menu.change", "Change Video")}
                    on_main={on_pick_video}
                    on_select={on_menu_select} />
            </>
        },
        None => html! {
            <button
                type="button"
                class="btn btn-primary"
                onclick={Callback::from(move |_: MouseEvent| on_pick_video.emit(()))}>
                {bundle.text("profile.upload_video", "Upload Video")}
            </button>
        },
    };
    let rename_error = state
        .interaction
        .has_error()
        .then(|| state.interaction.error_message(&bundle));

    html! {
        <div class="profile-page grid gap-6 p-6 lg:grid-cols-2">
            <section class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <h2 class="card-title">{bundle.text("profile.title", "Your Profile")}</h2>
                    <button
                        type="button"
                        class="avatar"
                        aria-label={bundle.text("profile.change_picture", "Change profile picture")}
                        onclick={on_change_picture}>
                        <div class="w-32 rounded-full">
                            <img src={avatar} alt={identity.name.clone()} />
                        </div>
                    </button>
                    <input
                        ref={picture_input}
                        type="file"
                        class="hidden"
                        accept={UploadKind::Picture.accept()}
                        onchange={on_picture_change} />
                    <dl class="grid grid-cols-[auto_1fr_auto] gap-x-4 gap-y-2 text-left">
                        <dt class="font-semibold">{bundle.text("profile.name", "Name")}</dt>
                        <dd class="col-span-2">{identity.name.clone()}</dd>
                        <dt class="font-semibold">{bundle.text("profile.email", "Email")}</dt>
                        <dd>{identity.email.clone()}</dd>
                        <dd>
                            <button type="button" class="btn btn-link btn-xs"
                                onclick={navigate_contact(ContactEdit::Email)}>
                                {bundle.text("profile.change_email", "Change email")}
                            </button>
                        </dd>
                        <dt class="font-semibold">{bundle.text("profile.phone", "Phone No.")}</dt>
                        <dd>{identity.phone_number.clone()}</dd>
                        <dd>
                            <button type="button" class="btn btn-link btn-xs"
                                onclick={navigate_contact(ContactEdit::PhoneNumber)}>
                                {bundle.text("profile.change_phone", "Change phone number")}
                            </button>
                        </dd>
                    </dl>
                </div>
            </section>
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{bundle.text("profile.video_title", "My Personal Video")}</h2>
                    <p class="text-sm opacity-70">{video_limit}</p>
                    {video_section}
                    <input
                        ref={video_input}
                        type="file"
                        class="hidden"
                        accept={UploadKind::Video.accept()}
                        onchange={on_video_change} />
                </div>
            </section>
            <Modal
                open={state.interaction.is_rename_modal_open()}
                title={bundle.text("rename.title", "Enter new Video Name")}
                close_label={bundle.text("rename.close", "Close")}
                on_close={on_rename_close}>
                <form class="grid gap-3" onsubmit={on_rename_submit} novalidate=true>
                    <input
                        ref={rename_input}
                        type="text"
                        class={classes!("input", "input-bordered", rename_error.is_some().then_some("input-error"))}
                        placeholder={bundle.text("rename.placeholder", "Car Video Name")}
                        value={props.profile.video_name.clone().unwrap_or_default()} />
                    {rename_error.map(|message| html! {
                        <p class="text-error text-sm" role="alert">{message}</p>
                    })}
                    <button type="submit" class="btn btn-primary">
                        {bundle.text("rename.submit", "Change Video Name")}
                    </button>
                </form>
            </Modal>
            <NoticeDialog notice={state.current_notice().cloned()} on_dismiss={on_notice_dismiss} />
        </div>
    }
}
