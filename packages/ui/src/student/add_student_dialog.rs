use api::models::StudentRequest;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input, Label};
use crate::hooks::UseStudents;
use crate::views::ModalOverlay;

#[component]
pub fn AddStudentDialog(students: UseStudents, on_close: EventHandler<()>) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut birth_date = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let students = students.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let request = StudentRequest::new(first_name(), last_name(), birth_date());
            match students.add(&request).await {
                Ok(()) => {
                    saving.set(false);
                    on_close.call(());
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay { title: "Add Student", on_close: move |_| on_close.call(()),
            if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            }
            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "student-first-name", "First Name" }
                    Input {
                        id: "student-first-name",
                        value: first_name(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "student-last-name", "Last Name" }
                    Input {
                        id: "student-last-name",
                        value: last_name(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "student-birth-date", "Birth Date" }
                    Input {
                        id: "student-birth-date",
                        r#type: "date",
                        value: birth_date(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| birth_date.set(evt.value()),
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
                        if saving() { "Adding..." } else { "Add Student" }
                    }
                }
            }
        }
    }
}
