//! Endpoint functions.
//!
//! Each function builds exactly one [`ApiRequest`](crate::transport::ApiRequest) and
//! hands it to the transport; decoding and validation live in the services.

pub mod auth;
pub mod class;
pub mod finance;
pub mod student;
pub mod user;

/// First page, as every list screen requests.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used by every list screen.
pub const DEFAULT_LIMIT: u32 = 10;
