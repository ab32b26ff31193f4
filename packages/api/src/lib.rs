//! # API crate — typed client for the SchoolMoney backend
//!
//! Everything the frontend needs to talk to the REST API: transport, DTOs, validation,
//! use-case services and the client-side session record. The crate has no UI
//! dependency; components in `ui` only ever see [`SchoolMoney`], the DTOs in
//! [`models`] and [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL, timeout and CSRF names, loaded from the environment |
//! | [`transport`] | `Transport` trait and the request description it consumes |
//! | [`client`] | `reqwest` implementation with cookie credentials and CSRF mirroring |
//! | [`error`] | Uniform `ApiError` and backend error-body normalisation |
//! | [`models`] | Request and response DTOs |
//! | [`resources`] | One function per backend endpoint |
//! | [`services`] | `SchoolMoney`: validation, decoding and write-then-reload workflows |
//! | [`session`] | Signed-in record kept in session storage |
//! | [`validation`] | Local input checks |
//! | [`messages`] | Status-specific messages for the auth screens |
//! | [`state`] | `LoadState` shared by the UI hooks |

pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod resources;
pub mod services;
pub mod session;
pub mod state;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod mock;

pub use client::HttpClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use services::{Api, SchoolMoney};
pub use session::{Session, SessionManager, SignedIn};
pub use state::LoadState;
pub use transport::{ApiRequest, Method, Transport};
