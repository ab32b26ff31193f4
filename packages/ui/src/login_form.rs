use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, Checkbox, Input, Label};
use crate::delay::{sleep, ALERT_TIMEOUT};
use crate::hooks::use_login;

/// Email/password sign-in card.
#[component]
pub fn LoginForm(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let login = use_login();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut stay_signed_in = use_signal(|| false);

    let handle_submit = {
        let login = login.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let login = login.clone();
            spawn(async move {
                let ok = login.login(&email(), &password(), stay_signed_in()).await;
                if ok {
                    on_success.call(());
                } else {
                    sleep(ALERT_TIMEOUT).await;
                    login.clear_messages();
                }
            });
        }
    };

    let loading = (login.loading)();

    rsx! {
        div { class: "sm-auth-card",
            h1 { class: "sm-title", "Welcome back" }
            p { class: "sm-muted", "Sign in to manage your children's school finances" }

            if let Some(message) = (login.error)() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = (login.success)() {
                Alert { kind: AlertKind::Success, message: message }
            }

            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "login-email", "Email Address" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: email(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Checkbox {
                    id: "login-stay",
                    checked: stay_signed_in(),
                    disabled: loading,
                    onchange: move |checked| stay_signed_in.set(checked),
                    "Stay signed in"
                }
                Button { r#type: "submit", disabled: loading, class: "sm-full",
                    if loading { "Signing in..." } else { "Sign In" }
                }
            }

            p { class: "sm-muted sm-center",
                "Don't have an account? "
                a {
                    class: "sm-link",
                    onclick: move |_| on_register.call(()),
                    "Sign up"
                }
            }
        }
    }
}
