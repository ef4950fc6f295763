//! Split button with the video action dropdown.
//!
//! # Design
//! - Stateless: the caller passes the items for the current menu state.
//! - Items emit their stable key; mapping keys to effects happens in the controller.

use crate::features::profile::actions::VideoMenuAction;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VideoActionMenuProps {
    pub items: Vec<VideoMenuAction>,
    pub main_label: String,
    pub on_main: Callback<()>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(VideoActionMenu)]
pub(crate) fn video_action_menu(props: &VideoActionMenuProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let on_main = {
        let on_main = props.on_main.clone();
        Callback::from(move |_: MouseEvent| on_main.emit(()))
    };

    html! {
        <div class={classes!("join", props.class.clone())}>
            <button type="button" class="btn btn-primary join-item" onclick={on_main}>
                {props.main_label.clone()}
            </button>
            {if props.items.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="dropdown dropdown-end join-item">
                        <button
                            type="button"
                            tabindex="0"
                            aria-label={bundle.text("profile.video_actions", "Video actions")}
                            class="btn btn-primary btn-square">
                            <span class="iconify lucide--chevron-down size-4"></span>
                        </button>
                        <ul
                            tabindex="0"
                            class="dropdown-content menu bg-base-100 rounded-box w-60 p-1 shadow">
                            {for props.items.iter().map(|action| {
                                let key = action.key().to_string();
                                let on_select = props.on_select.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    on_select.emit(key.clone());
                                });
                                html! {
                                    <li key={action.key()}>
                                        <button type="button" class="justify-start" {onclick}>
                                            {bundle.text(action.label_path(), action.default_label())}
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    </div>
                }
            }}
        </div>
    }
}
