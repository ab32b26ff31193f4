//! Small styled building blocks shared by every form and dialog.
//!
//! Class names resolve against [`crate::MAIN_CSS`].

mod alert;
mod avatar;
mod button;
mod input;

pub use alert::{Alert, AlertKind};
pub use avatar::Avatar;
pub use button::{Button, ButtonVariant};
pub use input::{Checkbox, Input, Label};

use dioxus::prelude::*;

/// Centered loading indicator.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div { class: "sm-spinner-wrap",
            div { class: "sm-spinner" }
            if !label.is_empty() {
                span { class: "sm-muted", "{label}" }
            }
        }
    }
}
