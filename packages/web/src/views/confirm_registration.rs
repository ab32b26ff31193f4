use dioxus::prelude::*;

use crate::Route;

/// Activation code entry for the address passed in `?email=`.
#[component]
pub fn ConfirmRegistration(email: String) -> Element {
    let nav = use_navigator();

    if email.trim().is_empty() {
        return rsx! {
            div { class: "sm-center-screen",
                div { class: "sm-auth-card",
                    h1 { class: "sm-title", "Confirm Registration" }
                    p { class: "sm-muted", "No email address was given. Please register first." }
                    Link { class: "sm-link", to: Route::Register {}, "Go to registration" }
                }
            }
        };
    }

    rsx! {
        div { class: "sm-center-screen",
            ui::ConfirmRegistration {
                email: email,
                on_activated: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
