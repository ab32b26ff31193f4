use dioxus::prelude::*;

use ui::{use_auth, AuthGate, AuthProvider, MAIN_CSS};
use views::{
    ConfirmRegistration, Dashboard, Finance, Login, NotFound, Profile, ProtectedLayout, Register,
    Students,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/confirm-registration?:email")]
    ConfirmRegistration { email: String },
    #[layout(ProtectedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/students")]
        Students {},
        #[route("/profile")]
        Profile {},
        #[route("/finance")]
        Finance {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting SchoolMoney");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SchoolMoney" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            AuthGate {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard or the login page once the session is known.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "sm-center-screen", ui::components::Spinner {} }
    }
}
