use api::models::SchoolClass;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::class::{AddClassDialog, ClassCard, ClassDetailsDialog, JoinClassDialog};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, Spinner};
use crate::hooks::{use_classes, use_students, TREASURER_TAB};

const TABS: [&str; 2] = ["All Classes", "Treasurer"];

/// Landing page after sign-in: greeting plus the user's classes.
#[component]
pub fn DashboardPage() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| 0usize);
    let classes = use_classes(tab);
    let students = use_students();
    let mut show_add = use_signal(|| false);
    let mut show_join = use_signal(|| false);

    let greeting = match auth.read().user.as_ref() {
        Some(user) if !user.name.trim().is_empty() => format!("Welcome back, {}!", user.name.trim()),
        _ => "Welcome back!".to_string(),
    };

    let error = classes.state.read().error().map(|err| err.to_string());
    let refresh_error = (classes.refresh_error)();
    let list = classes.classes();
    let selected = classes.selected.read().clone();
    let card_classes = classes.clone();

    rsx! {
        div { class: "sm-page",
            header { class: "sm-page-header",
                div {
                    h1 { class: "sm-title", "{greeting}" }
                    p { class: "sm-muted", "Here are the classes your students belong to." }
                }
                div { class: "sm-row",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| show_join.set(true),
                        "Join Class"
                    }
                    Button { onclick: move |_| show_add.set(true), "+ Create Class" }
                }
            }

            div { class: "sm-tabs",
                for (index, label) in TABS.iter().enumerate() {
                    button {
                        key: "{label}",
                        class: if tab() == index { "sm-tab active" } else { "sm-tab" },
                        onclick: move |_| tab.set(index),
                        "{label}"
                    }
                }
            }

            if let Some(message) = refresh_error {
                Alert { kind: AlertKind::Info, message: message }
            }

            if classes.loading() {
                Spinner { label: "Loading classes..." }
            } else if let Some(message) = error {
                Alert { kind: AlertKind::Error, message: message }
            } else if list.is_empty() {
                p { class: "sm-empty",
                    if tab() == TREASURER_TAB {
                        "You are not a treasurer of any class yet."
                    } else {
                        "No classes found. Create a class or join one with an access code."
                    }
                }
            } else {
                div { class: "sm-grid",
                    for class in list {
                        ClassCard {
                            key: "{class.id.clone().unwrap_or_default()}",
                            class: class.clone(),
                            onclick: {
                                let card_classes = card_classes.clone();
                                move |picked: SchoolClass| card_classes.select(Some(picked))
                            },
                        }
                    }
                }
            }
        }

        if show_add() {
            AddClassDialog { classes: classes.clone(), on_close: move |_| show_add.set(false) }
        }
        if show_join() {
            JoinClassDialog {
                classes: classes.clone(),
                students: students.students(),
                on_close: move |_| show_join.set(false),
            }
        }
        if let Some(class) = selected {
            ClassDetailsDialog {
                class: class,
                classes: classes.clone(),
                on_close: {
                    let classes = classes.clone();
                    move |_| classes.select(None)
                },
            }
        }
    }
}
