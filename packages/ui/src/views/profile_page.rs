use std::time::Duration;

use api::models::UserUpdateRequest;
use api::services::MAX_AVATAR_BYTES;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Avatar, Button, ButtonVariant, Input, Label, Spinner};
use crate::delay::sleep;
use crate::hooks::{use_user, UseUser};
use crate::views::ModalOverlay;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// Profile editing, avatar upload and password change.
#[component]
pub fn ProfilePage() -> Element {
    let user = use_user();
    let mut form = use_signal(UserUpdateRequest::default);
    let mut notice = use_signal(|| Option::<(AlertKind, String)>::None);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    let seed_state = user.state;
    use_effect(move || {
        if let Some(current) = seed_state.read().value() {
            form.set(UserUpdateRequest {
                name: current.name.clone(),
                surname: current.surname.clone(),
                phone: current.phone.clone(),
                bio: current.bio.clone(),
            });
        }
    });

    let mut show_notice = move |kind: AlertKind, message: String| {
        notice.set(Some((kind, message)));
        spawn(async move {
            sleep(NOTICE_TIMEOUT).await;
            notice.set(None);
        });
    };

    let save_user = user.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let user = save_user.clone();
        spawn(async move {
            saving.set(true);
            let result = user.update_profile(&form()).await;
            saving.set(false);
            match result {
                Ok(()) => show_notice(AlertKind::Success, "Profile updated".to_string()),
                Err(err) => show_notice(AlertKind::Error, err.to_string()),
            }
        });
    };

    let upload_user = user.clone();
    let handle_avatar = move |evt: FormEvent| {
        let user = upload_user.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            uploading.set(true);
            let name = file.name();
            let content_type = file.content_type().unwrap_or_default();
            let result = match file.read_bytes().await {
                Ok(bytes) => user.upload_avatar(&name, &content_type, bytes.to_vec()).await,
                Err(err) => {
                    tracing::error!("Reading {name} failed: {err}");
                    Err(api::ApiError::validation("Could not read the selected file"))
                }
            };
            uploading.set(false);
            match result {
                Ok(()) => show_notice(AlertKind::Success, "Avatar uploaded".to_string()),
                Err(err) => show_notice(AlertKind::Error, err.to_string()),
            }
        }
    };

    let Some(current) = user.user() else {
        if user.loading() {
            return rsx! { Spinner { label: "Loading profile..." } };
        }
        let message = user
            .state
            .read()
            .error()
            .map(|err| err.to_string())
            .unwrap_or_else(|| "Failed to load user profile".to_string());
        return rsx! {
            div { class: "sm-page",
                Alert { kind: AlertKind::Error, message: message }
            }
        };
    };
    let display_name = current.display_name();
    let max_mb = MAX_AVATAR_BYTES / (1024 * 1024);

    rsx! {
        div { class: "sm-page",
            header { class: "sm-page-header",
                h1 { class: "sm-title", "Profile" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_password.set(true),
                    "Change Password"
                }
            }

            if let Some((kind, message)) = notice() {
                Alert { kind: kind, message: message }
            }

            section { class: "sm-card sm-profile-head",
                Avatar { src: current.avatar.clone(), name: display_name.clone(), size: 96 }
                div { class: "sm-list-card-text",
                    span { class: "sm-strong", "{display_name}" }
                    span { class: "sm-muted", "{current.email}" }
                    label { class: "sm-btn sm-btn-ghost sm-file-label",
                        if uploading() { "Uploading..." } else { "Upload avatar" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "sm-hidden",
                            disabled: uploading(),
                            onchange: handle_avatar,
                        }
                    }
                    span { class: "sm-muted sm-small", "Images up to {max_mb} MB" }
                }
            }

            form { class: "sm-card sm-form", onsubmit: handle_save,
                div { class: "sm-field-row",
                    div { class: "sm-field",
                        Label { html_for: "profile-name", "First Name" }
                        Input {
                            id: "profile-name",
                            value: form().name,
                            disabled: saving(),
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    div { class: "sm-field",
                        Label { html_for: "profile-surname", "Last Name" }
                        Input {
                            id: "profile-surname",
                            value: form().surname,
                            disabled: saving(),
                            oninput: move |evt: FormEvent| form.write().surname = evt.value(),
                        }
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "profile-email", "Email" }
                    Input { id: "profile-email", value: current.email.clone(), disabled: true }
                }
                div { class: "sm-field",
                    Label { html_for: "profile-phone", "Phone" }
                    Input {
                        id: "profile-phone",
                        r#type: "tel",
                        value: form().phone,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "profile-bio", "Bio" }
                    textarea {
                        id: "profile-bio",
                        class: "sm-input sm-textarea",
                        rows: 4,
                        value: form().bio,
                        disabled: saving(),
                        oninput: move |evt| form.write().bio = evt.value(),
                    }
                }
                div { class: "sm-dialog-actions",
                    Button { r#type: "submit", disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }

        if show_password() {
            ChangePasswordDialog { user: user.clone(), on_close: move |_| show_password.set(false) }
        }
    }
}

#[component]
fn ChangePasswordDialog(user: UseUser, on_close: EventHandler<()>) -> Element {
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let user = user.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            success.set(None);
            let result = user
                .change_password(&current(), &new_password(), &confirmation())
                .await;
            saving.set(false);
            match result {
                Ok(message) => {
                    success.set(Some(message));
                    current.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    sleep(NOTICE_TIMEOUT).await;
                    on_close.call(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        ModalOverlay { title: "Change Password", on_close: move |_| on_close.call(()),
            if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            }
            if let Some(message) = success() {
                Alert { kind: AlertKind::Success, message: message }
            }
            form { class: "sm-form", onsubmit: handle_submit,
                div { class: "sm-field",
                    Label { html_for: "current-password", "Current Password" }
                    Input {
                        id: "current-password",
                        r#type: "password",
                        value: current(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| current.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "new-password", "New Password" }
                    Input {
                        id: "new-password",
                        r#type: "password",
                        value: new_password(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }
                }
                div { class: "sm-field",
                    Label { html_for: "confirm-new-password", "Confirm New Password" }
                    Input {
                        id: "confirm-new-password",
                        r#type: "password",
                        value: confirmation(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| confirmation.set(evt.value()),
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
                        if saving() { "Changing..." } else { "Change Password" }
                    }
                }
            }
        }
    }
}
