use api::models::{AccessCode, ClassPage, Id, SchoolClass};
use api::resources::{DEFAULT_LIMIT, DEFAULT_PAGE};
use api::{ApiResult, LoadState};
use dioxus::prelude::*;

use crate::auth::{use_services, AppServices};

/// Tab index listing only the classes the user is treasurer of.
pub const TREASURER_TAB: usize = 1;

#[derive(Clone, PartialEq)]
pub struct UseClasses {
    pub state: Signal<LoadState<ClassPage>>,
    pub selected: Signal<Option<SchoolClass>>,
    /// Last failed refetch; the previously loaded list stays in `state`.
    pub refresh_error: Signal<Option<String>>,
    tab: Signal<usize>,
    services: AppServices,
}

/// Classes for the current tab; refetched whenever `tab` changes.
pub fn use_classes(tab: Signal<usize>) -> UseClasses {
    let services = use_services();
    let mut state = use_signal(|| LoadState::<ClassPage>::Loading);
    let selected = use_signal(|| None);
    let mut refresh_error = use_signal(|| None);

    let fetch_services = services.clone();
    let _ = use_resource(move || {
        let is_treasurer = tab() == TREASURER_TAB;
        let services = fetch_services.clone();
        async move {
            // A tab switch shows another list, so the old one is not kept.
            state.set(LoadState::Loading);
            refresh_error.set(None);
            let result = services
                .api
                .list_classes(DEFAULT_PAGE, DEFAULT_LIMIT, is_treasurer)
                .await;
            state.set(LoadState::from_result(result));
        }
    });

    UseClasses {
        state,
        selected,
        refresh_error,
        tab,
        services,
    }
}

impl UseClasses {
    fn is_treasurer_tab(&self) -> bool {
        *self.tab.peek() == TREASURER_TAB
    }

    pub fn classes(&self) -> Vec<SchoolClass> {
        self.state
            .read()
            .value()
            .map(|page| page.classes.clone())
            .unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn select(&self, class: Option<SchoolClass>) {
        let mut selected = self.selected;
        selected.set(class);
    }

    pub async fn reload(&self) {
        let result = self
            .services
            .api
            .list_classes(DEFAULT_PAGE, DEFAULT_LIMIT, self.is_treasurer_tab())
            .await;
        let mut state = self.state;
        let failure = state.write().refresh(result);
        let mut refresh_error = self.refresh_error;
        refresh_error.set(failure.map(|err| err.to_string()));
    }

    pub async fn add(&self, name: &str) -> ApiResult<()> {
        let page = self
            .services
            .api
            .create_class_and_reload(name, self.is_treasurer_tab())
            .await?;
        self.publish(page);
        Ok(())
    }

    pub async fn update(&self, id: &Id, name: &str) -> ApiResult<()> {
        let page = self
            .services
            .api
            .update_class_and_reload(id, name, self.is_treasurer_tab())
            .await?;
        let refreshed = page.as_ref().and_then(|page| page.find(id)).cloned();
        self.publish(page);
        if refreshed.is_some() {
            self.select(refreshed);
        }
        Ok(())
    }

    pub async fn delete(&self, id: &Id) -> ApiResult<()> {
        let page = self
            .services
            .api
            .delete_class_and_reload(id, self.is_treasurer_tab())
            .await?;
        self.publish(page);
        self.select(None);
        Ok(())
    }

    pub async fn access_code(&self, id: &Id) -> ApiResult<AccessCode> {
        self.services.api.get_access_code(id).await
    }

    pub async fn join(&self, class_id: &Id, student_id: &Id, code: &str) -> ApiResult<String> {
        self.services.api.join_class(class_id, student_id, code).await
    }

    /// Show a reloaded list. Without one the current list stays up.
    fn publish(&self, page: Option<ClassPage>) {
        let mut refresh_error = self.refresh_error;
        match page {
            Some(page) => {
                let mut state = self.state;
                state.set(LoadState::Loaded(page));
                refresh_error.set(None);
            }
            None => refresh_error.set(Some("Could not refresh the class list".to_string())),
        }
    }
}
