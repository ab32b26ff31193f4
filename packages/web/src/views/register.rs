//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "sm-center-screen",
            RegisterForm {
                on_registered: move |email: String| {
                    nav.push(Route::ConfirmRegistration { email });
                },
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
