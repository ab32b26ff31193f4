//! Route targets for the signed-in area. Page bodies live in `ui::views`.

use dioxus::prelude::*;
use ui::views::{DashboardPage, FinanceView, ProfilePage, StudentsPage};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
pub fn Students() -> Element {
    rsx! { StudentsPage {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfilePage {} }
}

#[component]
pub fn Finance() -> Element {
    rsx! { FinanceView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "sm-center-screen",
            div { class: "sm-auth-card",
                h1 { class: "sm-title", "Page not found" }
                p { class: "sm-muted", "Nothing lives at /{path}." }
                Link { class: "sm-link", to: Route::Root {}, "Back to start" }
            }
        }
    }
}
