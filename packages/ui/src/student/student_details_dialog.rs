use api::models::{Student, StudentRequest};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Avatar, Button, ButtonVariant, Input, Label};
use crate::delay::alert;
use crate::hooks::UseStudents;
use crate::views::{ConfirmDialog, ModalOverlay};

/// Read-only details with an edit mode working on a local copy, and delete.
#[component]
pub fn StudentDetailsDialog(
    student: Student,
    students: UseStudents,
    on_close: EventHandler<()>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut draft = use_signal(StudentRequest::default);
    let mut edit_error = use_signal(|| Option::<String>::None);

    let Some(id) = student.id.clone() else {
        return rsx! {};
    };
    let full_name = student.full_name();
    let birth_date = student.birth_date.clone().unwrap_or_default();
    let age = student
        .age()
        .map(|age| format!("{age} years"))
        .unwrap_or_else(|| "-".to_string());
    let parent = student.parent.as_ref().map(|p| p.display_name());
    let classes = student.classes.clone();

    let start_edit = {
        let student = student.clone();
        move |_| {
            draft.set(StudentRequest::new(
                student.first_name.clone(),
                student.last_name.clone(),
                student.birth_date.clone().unwrap_or_default(),
            ));
            edit_error.set(None);
            editing.set(true);
        }
    };

    let save = {
        let students = students.clone();
        let id = id.clone();
        move |_| {
            let request = draft();
            let students = students.clone();
            let id = id.clone();
            spawn(async move {
                edit_error.set(None);
                match students.update(&id, &request).await {
                    Ok(()) => editing.set(false),
                    Err(err) if err.is_validation() => edit_error.set(Some(err.to_string())),
                    Err(err) => alert(&format!("Failed to update student: {err}")),
                }
            });
        }
    };

    let delete = {
        let students = students.clone();
        let id = id.clone();
        move |_| {
            let students = students.clone();
            let id = id.clone();
            confirm_delete.set(false);
            on_close.call(());
            spawn(async move {
                if let Err(err) = students.delete(&id).await {
                    alert(&format!("Failed to delete student: {err}"));
                }
            });
        }
    };

    let close = move |_| {
        editing.set(false);
        on_close.call(());
    };

    let title = if editing() { "Edit Student" } else { "Student Details" };

    rsx! {
        ModalOverlay { title: title.to_string(), on_close: close, wide: true,
            div { class: "sm-details-head",
                Avatar { src: student.avatar.clone(), name: full_name.clone(), size: 80 }
                if !editing() {
                    h3 { class: "sm-title", "{full_name}" }
                    span { class: "sm-muted", "{age}" }
                }
            }

            if editing() {
                if let Some(message) = edit_error() {
                    Alert { kind: AlertKind::Error, message: message }
                }
                div { class: "sm-form",
                    div { class: "sm-field",
                        Label { html_for: "edit-first-name", "First Name" }
                        Input {
                            id: "edit-first-name",
                            value: draft().first_name,
                            oninput: move |evt: FormEvent| draft.write().first_name = evt.value(),
                        }
                    }
                    div { class: "sm-field",
                        Label { html_for: "edit-last-name", "Last Name" }
                        Input {
                            id: "edit-last-name",
                            value: draft().last_name,
                            oninput: move |evt: FormEvent| draft.write().last_name = evt.value(),
                        }
                    }
                    div { class: "sm-field",
                        Label { html_for: "edit-birth-date", "Birth Date" }
                        Input {
                            id: "edit-birth-date",
                            r#type: "date",
                            value: draft().birth_date,
                            oninput: move |evt: FormEvent| draft.write().birth_date = evt.value(),
                        }
                    }
                }
                div { class: "sm-dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                    Button { onclick: save, "Save Changes" }
                }
            } else {
                dl { class: "sm-details",
                    dt { "Birth Date" }
                    dd { "{birth_date}" }
                    if let Some(parent) = parent {
                        dt { "Parent" }
                        dd { "{parent}" }
                    }
                    dt { "Classes" }
                    dd {
                        if classes.is_empty() {
                            span { class: "sm-muted", "Not enrolled in any class" }
                        }
                        for enrolled in classes {
                            span { class: "sm-chip", {enrolled.name.clone()} }
                        }
                    }
                }
                div { class: "sm-dialog-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| confirm_delete.set(true),
                        "Delete"
                    }
                    Button { onclick: start_edit, "Edit" }
                }
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                message: "This will permanently delete {full_name} from your students list. This action cannot be undone.",
                confirm_label: "Delete Student",
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}
