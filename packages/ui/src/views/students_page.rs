use api::models::Student;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::hooks::use_students;
use crate::student::{AddStudentDialog, StudentCard, StudentDetailsDialog};

#[component]
pub fn StudentsPage() -> Element {
    let students = use_students();
    let mut show_add = use_signal(|| false);

    let error = students.state.read().error().map(|err| err.to_string());
    let refresh_error = (students.refresh_error)();
    let list = students.students();
    let selected = students.selected.read().clone();
    let card_students = students.clone();

    rsx! {
        div { class: "sm-page",
            header { class: "sm-page-header",
                h1 { class: "sm-title", "My Students" }
                Button { onclick: move |_| show_add.set(true), "+ Add Student" }
            }

            if let Some(message) = refresh_error {
                Alert { kind: AlertKind::Info, message: message }
            }

            if students.loading() {
                Spinner { label: "Loading students..." }
            } else if let Some(message) = error {
                Alert { kind: AlertKind::Error, message: message }
            } else if list.is_empty() {
                p { class: "sm-empty", "No students found. Add your first student!" }
            } else {
                div { class: "sm-grid",
                    for student in list {
                        StudentCard {
                            key: "{student.id.clone().unwrap_or_default()}",
                            student: student.clone(),
                            onclick: {
                                let card_students = card_students.clone();
                                move |picked: Student| card_students.select(Some(picked))
                            },
                        }
                    }
                }
            }
        }

        if show_add() {
            AddStudentDialog { students: students.clone(), on_close: move |_| show_add.set(false) }
        }
        if let Some(student) = selected {
            StudentDetailsDialog {
                student: student,
                students: students.clone(),
                on_close: {
                    let students = students.clone();
                    move |_| students.select(None)
                },
            }
        }
    }
}
