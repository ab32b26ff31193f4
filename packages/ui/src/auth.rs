//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the shared [`AppServices`] and resolves the start-up auth
//! state: `loading` until the stored session (or, without one, the server cookie) has
//! been checked, then either a user or anonymous.

use api::models::User;
use api::{Api, ApiResult, SessionManager};
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Spinner};
use crate::session_store::{make_session_store, PlatformStore};

/// API client plus the local session record, shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub api: Api,
    pub sessions: SessionManager<PlatformStore>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api
    }
}

impl AppServices {
    pub fn from_env() -> ApiResult<Self> {
        Ok(Self {
            api: Api::from_env()?,
            sessions: SessionManager::new(make_session_store()),
        })
    }
}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub stay_signed_in: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            stay_signed_in: false,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    pub fn signed_in(user: User, stay_signed_in: bool) -> Self {
        Self {
            user: Some(user),
            loading: false,
            stay_signed_in,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_hook(AppServices::from_env);

    match services {
        Ok(services) => rsx! {
            AuthContext { services: services, {children} }
        },
        Err(err) => {
            tracing::error!("Failed to start API client: {err}");
            rsx! {
                div { class: "sm-center-screen",
                    Alert { kind: AlertKind::Error, message: err.to_string() }
                }
            }
        }
    }
}

#[component]
fn AuthContext(services: AppServices, children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| services.clone());
    use_context_provider(|| auth_state);

    let _ = use_resource(move || {
        let services = services.clone();
        async move {
            let AppServices { api, sessions } = services;
            if let Err(err) = api.initialize_csrf().await {
                tracing::warn!("{err}");
            }
            let state = match sessions.restore(Utc::now()).await {
                Some(stored) => {
                    // Render with the stored user while the server confirms it.
                    auth_state.set(AuthState::signed_in(
                        stored.user.clone(),
                        stored.session.stay_signed_in,
                    ));
                    match sessions.verify(&api, stored).await {
                        Some(signed_in) => {
                            AuthState::signed_in(signed_in.user, signed_in.session.stay_signed_in)
                        }
                        None => AuthState::anonymous(),
                    }
                }
                None => match api.get_user().await {
                    Ok(user) => {
                        tracing::info!("Resumed server session for {}", user.email);
                        let signed_in = sessions.save(&user, false, Utc::now()).await;
                        AuthState::signed_in(signed_in.user, false)
                    }
                    Err(_) => AuthState::anonymous(),
                },
            };
            auth_state.set(state);
        }
    });

    rsx! {
        {children}
    }
}

/// Renders `children` once the auth state is resolved, a spinner before.
#[component]
pub fn AuthGate(children: Element) -> Element {
    let auth = use_auth();
    if auth().loading {
        return rsx! {
            div { class: "sm-center-screen", Spinner {} }
        };
    }
    rsx! {
        {children}
    }
}

/// Clear the session locally and on the server.
pub async fn sign_out(services: &AppServices, mut auth_state: Signal<AuthState>) {
    if let Err(err) = services.sessions.sign_out(&services.api).await {
        tracing::warn!("Logout request failed: {err}");
    }
    auth_state.set(AuthState::anonymous());
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let auth_state = use_auth();
    let services = use_services();

    let onclick = move |_| {
        let services = services.clone();
        async move {
            sign_out(&services, auth_state).await;
            if let Some(handler) = on_logout {
                handler.call(());
            }
        }
    };

    rsx! {
        button { class: "{class}", onclick: onclick, "{label}" }
    }
}
