//! Login page view.

use dioxus::prelude::*;
use ui::{use_auth, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: skip the form.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div { class: "sm-center-screen",
            LoginForm {
                on_success: move |_| {
                    nav.replace(Route::Dashboard {});
                },
                on_register: move |_| {
                    nav.push(Route::Register {});
                },
            }
        }
    }
}
