use api::models::SchoolClass;
use dioxus::prelude::*;

use crate::icons::FaUserGroup;
use crate::Icon;

#[component]
pub fn ClassCard(class: SchoolClass, onclick: EventHandler<SchoolClass>) -> Element {
    let name = class.name.clone();
    let members = class.member_label();
    let is_treasurer = class.is_treasurer;

    rsx! {
        div {
            class: "sm-list-card",
            onclick: move |_| onclick.call(class.clone()),
            div { class: "sm-avatar sm-avatar-icon",
                Icon { icon: FaUserGroup, width: 18, height: 18 }
            }
            div { class: "sm-list-card-text",
                div { class: "sm-row",
                    span { class: "sm-strong sm-ellipsis", "{name}" }
                    if is_treasurer {
                        span { class: "sm-chip", "Treasurer" }
                    }
                }
                span { class: "sm-muted", "{members}" }
            }
        }
    }
}
