//! Acknowledgement dialog for operation notices.
//!
//! # Design
//! - Show one notice at a time; the queue lives in the page state.
//! - Render catalog keys through the active translation bundle.

use crate::components::modal::Modal;
use crate::features::profile::state::{Notice, NoticeKind};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NoticeDialogProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NoticeDialog)]
pub(crate) fn notice_dialog(props: &NoticeDialogProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let id = notice.id;
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |()| on_dismiss.emit(id))
    };
    let on_ok = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };
    let tone = match notice.kind {
        NoticeKind::Success => "text-success",
        NoticeKind::Error => "text-error",
    };
    let footer = html! {
        <button type="button" class="btn btn-primary" onclick={on_ok}>
            {bundle.text("notice.ok", "OK")}
        </button>
    };

    html! {
        <Modal
            open=true
            title={notice.title.text(&bundle)}
            class={classes!(tone)}
            on_close={dismiss}
            footer={footer}>
            <p role={if notice.kind == NoticeKind::Error { "alert" } else { "status" }}>
                {notice.body.text(&bundle)}
            </p>
        </Modal>
    }
}

