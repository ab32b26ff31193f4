use api::models::SchoolClass;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Avatar, Button, ButtonVariant, Input, Label};
use crate::delay::alert;
use crate::hooks::UseClasses;
use crate::views::{ConfirmDialog, ModalOverlay};

/// Class details. Treasurers can rename, delete and reveal the access code.
#[component]
pub fn ClassDetailsDialog(
    class: SchoolClass,
    classes: UseClasses,
    on_close: EventHandler<()>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut edit_error = use_signal(|| Option::<String>::None);
    let mut access_code = use_signal(|| Option::<String>::None);
    let mut code_error = use_signal(|| Option::<String>::None);

    let Some(id) = class.id.clone() else {
        return rsx! {};
    };
    let name = class.name.clone();
    let members = class.member_label();
    let is_treasurer = class.is_treasurer;
    let treasurer = class.treasurer.clone();

    let start_edit = {
        let name = name.clone();
        move |_| {
            draft.set(name.clone());
            edit_error.set(None);
            editing.set(true);
        }
    };

    let save = {
        let classes = classes.clone();
        let id = id.clone();
        move |_| {
            let new_name = draft();
            let classes = classes.clone();
            let id = id.clone();
            spawn(async move {
                edit_error.set(None);
                match classes.update(&id, &new_name).await {
                    Ok(()) => editing.set(false),
                    Err(err) if err.is_validation() => edit_error.set(Some(err.to_string())),
                    Err(err) => alert(&format!("Failed to update class: {err}")),
                }
            });
        }
    };

    let delete = {
        let classes = classes.clone();
        let id = id.clone();
        move |_| {
            let classes = classes.clone();
            let id = id.clone();
            confirm_delete.set(false);
            on_close.call(());
            spawn(async move {
                if let Err(err) = classes.delete(&id).await {
                    alert(&format!("Failed to delete class: {err}"));
                }
            });
        }
    };

    let show_code = {
        let classes = classes.clone();
        let id = id.clone();
        move |_| {
            let classes = classes.clone();
            let id = id.clone();
            spawn(async move {
                code_error.set(None);
                match classes.access_code(&id).await {
                    Ok(code) => access_code.set(Some(code.token)),
                    Err(err) => code_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let close = move |_| {
        editing.set(false);
        on_close.call(());
    };

    let title = if editing() { "Edit Class" } else { "Class Details" };

    rsx! {
        ModalOverlay { title: title.to_string(), on_close: close, wide: true,
            if editing() {
                if let Some(message) = edit_error() {
                    Alert { kind: AlertKind::Error, message: message }
                }
                div { class: "sm-form",
                    div { class: "sm-field",
                        Label { html_for: "edit-class-name", "Class Name" }
                        Input {
                            id: "edit-class-name",
                            maxlength: 100,
                            value: draft(),
                            oninput: move |evt: FormEvent| draft.set(evt.value()),
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
                div { class: "sm-details-head",
                    h3 { class: "sm-title", "{name}" }
                    span { class: "sm-muted", "{members}" }
                }
                dl { class: "sm-details",
                    dt { "Treasurer" }
                    dd {
                        {match treasurer {
                            Some(user) => rsx! {
                                div { class: "sm-row",
                                    Avatar { src: user.avatar.clone(), name: user.display_name(), size: 32 }
                                    span { {user.display_name()} }
                                }
                            },
                            None => rsx! { span { class: "sm-muted", "Unknown" } },
                        }}
                    }
                    if is_treasurer {
                        dt { "Access Code" }
                        dd {
                            {match access_code() {
                                Some(code) => rsx! { span { class: "sm-code", "{code}" } },
                                None => rsx! {
                                    Button { variant: ButtonVariant::Ghost, onclick: show_code, "Show access code" }
                                },
                            }}
                            if let Some(message) = code_error() {
                                span { class: "sm-error-text", "{message}" }
                            }
                        }
                    }
                }
                if is_treasurer {
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
        }

        if confirm_delete() {
            ConfirmDialog {
                message: "This will permanently delete the class \"{name}\". This action cannot be undone.",
                confirm_label: "Delete Class",
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}
