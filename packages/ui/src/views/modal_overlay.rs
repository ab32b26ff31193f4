use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a dialog card with a title bar.
/// Clicking outside the card or the close icon triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let card_class = if wide { "sm-dialog sm-dialog-wide" } else { "sm-dialog" };
    rsx! {
        div {
            class: "sm-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "{card_class}",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "sm-dialog-header",
                    h2 { class: "sm-dialog-title", "{title}" }
                    button {
                        class: "sm-icon-btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div { class: "sm-dialog-body", {children} }
            }
        }
    }
}

/// "Are you sure?" prompt before a destructive action.
#[component]
pub fn ConfirmDialog(
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay { title: "Are you sure?", on_close: move |_| on_cancel.call(()),
            p { class: "sm-muted", "{message}" }
            div { class: "sm-dialog-actions",
                crate::components::Button {
                    variant: crate::components::ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                crate::components::Button {
                    variant: crate::components::ButtonVariant::Danger,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
