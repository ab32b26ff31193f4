use std::time::Duration;

use api::models::{Id, Student};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input, Label};
use crate::delay::sleep;
use crate::hooks::UseClasses;
use crate::views::ModalOverlay;

/// Pause on the success message before the dialog closes.
const CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Enrol one of the parent's students into a class with its 4-digit code.
#[component]
pub fn JoinClassDialog(
    classes: UseClasses,
    students: Vec<Student>,
    on_close: EventHandler<()>,
) -> Element {
    let mut student_id = use_signal(String::new);
    let mut class_id = use_signal(String::new);
    let mut access_code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let options: Vec<(String, String)> = students
        .iter()
        .filter_map(|s| s.id.as_ref().map(|id| (id.to_string(), s.full_name())))
        .collect();

    let close = move |_| {
        if !loading() {
            on_close.call(());
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        if student_id().is_empty() {
            error.set(Some("Please select a student".to_string()));
            return;
        }
        let classes = classes.clone();
        spawn(async move {
            loading.set(true);
            let result = classes
                .join(
                    &Id::new(class_id().trim()),
                    &Id::new(student_id()),
                    access_code().trim(),
                )
                .await;
            match result {
                Ok(_) => {
                    success.set(Some("Successfully joined the class!".to_string()));
                    sleep(CLOSE_DELAY).await;
                    classes.reload().await;
                    loading.set(false);
                    on_close.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay { title: "Join Class", on_close: close,
            if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = success() {
                Alert { kind: AlertKind::Success, message: message }
            }
            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "join-student", "Student" }
                    select {
                        id: "join-student",
                        class: "sm-input",
                        value: student_id(),
                        disabled: loading(),
                        onchange: move |evt| student_id.set(evt.value()),
                        option { value: "", "Select a student" }
                        for (id, full_name) in options {
                            option { key: "{id}", value: id.clone(), "{full_name}" }
                        }
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "join-class-id", "Class ID" }
                    Input {
                        id: "join-class-id",
                        value: class_id(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| class_id.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "join-code", "Access Code" }
                    Input {
                        id: "join-code",
                        class: "sm-code-input",
                        placeholder: "0000",
                        maxlength: 4,
                        value: access_code(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| access_code.set(evt.value()),
                    }
                }
                div { class: "sm-dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: loading(),
                        onclick: move |_| {
                            if !loading() {
                                on_close.call(());
                            }
                        },
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: loading(),
                        if loading() { "Joining..." } else { "Join Class" }
                    }
                }
            }
        }
    }
}
