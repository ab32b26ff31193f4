use api::models::Student;
use dioxus::prelude::*;

use crate::components::Avatar;

#[component]
pub fn StudentCard(student: Student, onclick: EventHandler<Student>) -> Element {
    let name = student.full_name();
    let age = student
        .age()
        .map(|age| age.to_string())
        .unwrap_or_else(|| "-".to_string());
    let avatar = student.avatar.clone();

    rsx! {
        div {
            class: "sm-list-card",
            onclick: move |_| onclick.call(student.clone()),
            Avatar { src: avatar, name: name.clone() }
            div { class: "sm-list-card-text",
                span { class: "sm-strong sm-ellipsis", "{name}" }
                span { class: "sm-muted", "Age: {age}" }
            }
        }
    }
}
