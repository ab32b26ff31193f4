use dioxus::prelude::*;

use crate::initials::get_initials_from_name;

/// Round image, or the name's initials when there is no image.
#[component]
pub fn Avatar(
    #[props(default)] src: String,
    name: String,
    #[props(default = 48)] size: u32,
) -> Element {
    let style = format!("width: {size}px; height: {size}px; font-size: {}px;", size * 2 / 5);
    rsx! {
        if src.is_empty() {
            div { class: "sm-avatar", style: "{style}", {get_initials_from_name(&name)} }
        } else {
            img { class: "sm-avatar", style: "{style}", src: "{src}", alt: "{name}" }
        }
    }
}
