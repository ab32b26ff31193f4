use api::models::{Id, Student, StudentPage, StudentRequest};
use api::resources::{DEFAULT_LIMIT, DEFAULT_PAGE};
use api::{ApiResult, LoadState};
use dioxus::prelude::*;

use crate::auth::{use_services, AppServices};

#[derive(Clone, PartialEq)]
pub struct UseStudents {
    pub state: Signal<LoadState<StudentPage>>,
    pub selected: Signal<Option<Student>>,
    /// Last failed refetch; the previously loaded list stays in `state`.
    pub refresh_error: Signal<Option<String>>,
    services: AppServices,
}

pub fn use_students() -> UseStudents {
    let services = use_services();
    let mut state = use_signal(|| LoadState::<StudentPage>::Loading);
    let selected = use_signal(|| None);
    let refresh_error = use_signal(|| None);

    let fetch_services = services.clone();
    use_hook(move || {
        spawn(async move {
            let result = fetch_services
                .api
                .list_students(DEFAULT_PAGE, DEFAULT_LIMIT)
                .await;
            state.set(LoadState::from_result(result));
        });
    });

    UseStudents {
        state,
        selected,
        refresh_error,
        services,
    }
}

impl UseStudents {
    pub fn students(&self) -> Vec<Student> {
        self.state
            .read()
            .value()
            .map(|page| page.students.clone())
            .unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn select(&self, student: Option<Student>) {
        let mut selected = self.selected;
        selected.set(student);
    }

    pub async fn reload(&self) {
        let result = self
            .services
            .api
            .list_students(DEFAULT_PAGE, DEFAULT_LIMIT)
            .await;
        let mut state = self.state;
        let failure = state.write().refresh(result);
        let mut refresh_error = self.refresh_error;
        refresh_error.set(failure.map(|err| err.to_string()));
    }

    pub async fn add(&self, request: &StudentRequest) -> ApiResult<()> {
        let page = self.services.api.add_student_and_reload(request).await?;
        self.publish(page);
        Ok(())
    }

    /// Update, refresh the list and the open details dialog.
    pub async fn update(&self, id: &Id, request: &StudentRequest) -> ApiResult<()> {
        let page = self
            .services
            .api
            .update_student_and_reload(id, request)
            .await?;
        let refreshed = page
            .as_ref()
            .and_then(|page| page.students.iter().find(|s| s.id.as_ref() == Some(id)))
            .cloned();
        self.publish(page);
        if refreshed.is_some() {
            self.select(refreshed);
        }
        Ok(())
    }

    pub async fn delete(&self, id: &Id) -> ApiResult<()> {
        let page = self.services.api.delete_student_and_reload(id).await?;
        self.publish(page);
        self.select(None);
        Ok(())
    }

    /// Show a reloaded list. Without one the current list stays up.
    fn publish(&self, page: Option<StudentPage>) {
        let mut refresh_error = self.refresh_error;
        match page {
            Some(page) => {
                let mut state = self.state;
                state.set(LoadState::Loaded(page));
                refresh_error.set(None);
            }
            None => refresh_error.set(Some("Could not refresh the student list".to_string())),
        }
    }
}
