use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, Input, Label};
use crate::delay::{sleep, ALERT_TIMEOUT};
use crate::hooks::use_activation;

/// Pause before leaving for the login screen after activation.
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// 4-digit activation code entry for `email`, with a resend link.
#[component]
pub fn ConfirmRegistration(email: String, on_activated: EventHandler<()>) -> Element {
    let activation = use_activation();
    let mut code = use_signal(String::new);

    let handle_submit = {
        let activation = activation.clone();
        let email = email.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let activation = activation.clone();
            let email = email.clone();
            spawn(async move {
                if activation.activate(&email, &code()).await {
                    sleep(REDIRECT_DELAY).await;
                    on_activated.call(());
                } else {
                    sleep(ALERT_TIMEOUT).await;
                    activation.clear_messages();
                }
            });
        }
    };

    let handle_resend = {
        let activation = activation.clone();
        let email = email.clone();
        move |_| {
            let activation = activation.clone();
            let email = email.clone();
            spawn(async move {
                activation.resend(&email).await;
                sleep(ALERT_TIMEOUT).await;
                activation.clear_messages();
            });
        }
    };

    let loading = (activation.loading)();
    let resending = (activation.resending)();

    rsx! {
        div { class: "sm-auth-card",
            h1 { class: "sm-title", "Confirm your email" }
            p { class: "sm-muted",
                "We sent a 4-digit code to "
                strong { "{email}" }
            }

            if let Some(message) = (activation.error)() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = (activation.success)() {
                Alert { kind: AlertKind::Success, message: message }
            }
            if let Some(message) = (activation.resend_error)() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = (activation.resend_success)() {
                Alert { kind: AlertKind::Info, message: message }
            }

            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "activation-code", "Activation Code" }
                    Input {
                        id: "activation-code",
                        class: "sm-code-input",
                        placeholder: "0000",
                        maxlength: 4,
                        value: code(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| {
                            let digits: String = evt.value().chars().filter(char::is_ascii_digit).take(4).collect();
                            code.set(digits);
                        },
                    }
                }
                Button { r#type: "submit", disabled: loading || code().len() != 4, class: "sm-full",
                    if loading { "Verifying..." } else { "Confirm" }
                }
            }

            p { class: "sm-muted sm-center",
                "Didn't get the code? "
                button {
                    class: "sm-link",
                    r#type: "button",
                    disabled: resending,
                    onclick: handle_resend,
                    if resending { "Sending..." } else { "Resend code" }
                }
            }
        }
    }
}
