//! Daisy-style modal shell.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub footer: Html,
    /// Fired by the backdrop and the close button.
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub close_label: Option<String>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let classes = classes!("modal", "modal-open", props.class.clone());
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="modal-box">
                {props.close_label.as_ref().map(|label| html! {
                    <button
                        type="button"
                        class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                        aria-label={label.clone()}
                        onclick={on_close.clone()}>
                        {"x"}
                    </button>
                })}
                {props.title.as_ref().map(|title| html! {
                    <h3 class="text-lg font-bold">{title.clone()}</h3>
                })}
                <div class="py-4">{ for props.children.iter() }</div>
                <div class="modal-action">{props.footer.clone()}</div>
            </div>
            <button type="button" class="modal-backdrop" onclick={on_close}></button>
        </div>
    }
}
