use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    let class = match kind {
        AlertKind::Error => "sm-alert sm-alert-error",
        AlertKind::Success => "sm-alert sm-alert-success",
        AlertKind::Info => "sm-alert sm-alert-info",
    };
    rsx! {
        div { class: class, role: "alert", "{message}" }
    }
}
