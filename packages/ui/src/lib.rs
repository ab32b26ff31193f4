//! Shared UI for SchoolMoney: primitives, forms, dialogs, page bodies, state hooks and
//! the auth context. Platform crates only add routing on top.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod views;
pub mod hooks;
pub mod class;
pub mod student;

mod auth;
pub use auth::{
    sign_out, use_auth, use_services, AppServices, AuthGate, AuthProvider, AuthState,
    LogoutButton,
};

mod delay;
pub use delay::{alert, sleep, ALERT_TIMEOUT};

mod initials;
pub use initials::get_initials_from_name;

mod session_store;
pub use session_store::{make_session_store, PlatformStore};

mod side_menu;
pub use side_menu::{MenuItem, SideMenu};

mod login_form;
pub use login_form::LoginForm;

mod register_form;
pub use register_form::RegisterForm;

mod confirm_registration;
pub use confirm_registration::ConfirmRegistration;
