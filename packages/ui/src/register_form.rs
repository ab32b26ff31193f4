use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, Input, Label};
use crate::delay::{sleep, ALERT_TIMEOUT};
use crate::hooks::use_register;

/// Account creation card. `on_registered` receives the email to activate.
#[component]
pub fn RegisterForm(on_registered: EventHandler<String>, on_login: EventHandler<()>) -> Element {
    let register = use_register();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);

    let handle_submit = {
        let register = register.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let register = register.clone();
            spawn(async move {
                let address = email().trim().to_string();
                if register.register(&address, &password(), &confirmation()).await {
                    on_registered.call(address);
                } else {
                    sleep(ALERT_TIMEOUT).await;
                    register.clear_messages();
                }
            });
        }
    };

    let loading = (register.loading)();

    rsx! {
        div { class: "sm-auth-card",
            h1 { class: "sm-title", "Create account" }
            p { class: "sm-muted", "Register as a parent to join your child's class" }

            if let Some(message) = (register.error)() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = (register.success)() {
                Alert { kind: AlertKind::Success, message: message }
            }

            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "register-email", "Email Address" }
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: email(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        r#type: "password",
                        placeholder: "At least 8 characters",
                        value: password(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "register-confirm", "Confirm Password" }
                    Input {
                        id: "register-confirm",
                        r#type: "password",
                        value: confirmation(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| confirmation.set(evt.value()),
                    }
                }
                Button { r#type: "submit", disabled: loading, class: "sm-full",
                    if loading { "Creating account..." } else { "Sign Up" }
                }
            }

            p { class: "sm-muted sm-center",
                "Already have an account? "
                a {
                    class: "sm-link",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
