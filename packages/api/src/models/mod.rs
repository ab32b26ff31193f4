//! Response and request DTOs.
//!
//! DTOs are built straight from backend JSON with `serde`. Every field is defaulted so
//! that a missing or `null` value yields an empty string, zero, `false` or `None`
//! instead of a decode error; constructing a DTO is therefore a pure function of its
//! input JSON.

mod class;
mod envelope;
mod finance;
mod id;
mod requests;
mod student;
mod user;

pub use requests::{
    AccountActivationRequest, ChangePasswordRequest, ClassEditRequest, LoginRequest,
    RegisterRequest, ResendCodeRequest, StudentRequest, UserUpdateRequest,
};
pub use class::{AccessCode, ClassPage, SchoolClass};
pub use envelope::{Envelope, Page};
pub use finance::{Collection, Contribution, FinanceAccount};
pub use id::Id;
pub use student::{Student, StudentPage};
pub use user::{AvatarUpload, User};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
