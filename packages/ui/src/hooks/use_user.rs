use api::models::{User, UserUpdateRequest};
use api::{ApiResult, LoadState};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_services, AppServices, AuthState};

/// The signed-in user, fetched on mount. When the fetch fails the cached session
/// user is shown instead.
#[derive(Clone, PartialEq)]
pub struct UseUser {
    pub state: Signal<LoadState<User>>,
    auth: Signal<AuthState>,
    services: AppServices,
}

pub fn use_user() -> UseUser {
    let services = use_services();
    let auth = use_auth();
    let mut state = use_signal(|| LoadState::<User>::Loading);

    let fetch_services = services.clone();
    use_hook(move || {
        spawn(async move {
            let next = match fetch_services.api.get_user().await {
                Ok(user) => LoadState::Loaded(user),
                Err(err) => match fetch_services.sessions.cached_user().await {
                    Some(cached) => {
                        tracing::warn!("Using cached user, fetch failed: {err}");
                        LoadState::Loaded(cached)
                    }
                    None => LoadState::Failed(err),
                },
            };
            state.set(next);
        });
    });

    UseUser {
        state,
        auth,
        services,
    }
}

impl UseUser {
    pub fn user(&self) -> Option<User> {
        self.state.read().value().cloned()
    }

    pub fn loading(&self) -> bool {
        self.state.read().is_loading()
    }

    /// Publish a changed user to the page, the auth context and the session cache.
    pub async fn replace(&self, user: User) {
        self.services.sessions.update_user(&user).await;
        let mut auth = self.auth;
        let stay_signed_in = auth.peek().stay_signed_in;
        auth.set(AuthState::signed_in(user.clone(), stay_signed_in));
        let mut state = self.state;
        state.set(LoadState::Loaded(user));
    }

    pub async fn update_profile(&self, update: &UserUpdateRequest) -> ApiResult<()> {
        let user = self.services.api.update_user(update).await?;
        self.replace(user).await;
        Ok(())
    }

    pub async fn upload_avatar(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<()> {
        let avatar = self
            .services
            .api
            .upload_avatar(file_name, content_type, bytes)
            .await?;
        if let Some(mut user) = self.user() {
            user.avatar = avatar;
            self.replace(user).await;
        }
        Ok(())
    }

    pub async fn change_password(&self, current: &str, new: &str, confirmation: &str) -> ApiResult<String> {
        self.services
            .api
            .change_password(current, new, confirmation)
            .await
    }
}
