use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input, Label};
use crate::hooks::UseClasses;
use crate::views::ModalOverlay;

#[component]
pub fn AddClassDialog(classes: UseClasses, on_close: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let classes = classes.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let result = classes.add(&name()).await;
            saving.set(false);
            match result {
                Ok(()) => on_close.call(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        ModalOverlay { title: "Create Class", on_close: move |_| on_close.call(()),
            p { class: "sm-muted", "You will become the treasurer of the new class." }
            if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            }
            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "class-name", "Class Name" }
                    Input {
                        id: "class-name",
                        placeholder: "e.g. 3B",
                        maxlength: 100,
                        value: name(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div { class: "sm-dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: saving(),
                        if saving() { "Creating..." } else { "Create Class" }
                    }
                }
            }
        }
    }
}
