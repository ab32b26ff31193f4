mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod confirm_registration;
pub use confirm_registration::ConfirmRegistration;

mod protected_layout;
pub use protected_layout::ProtectedLayout;

mod pages;
pub use pages::{Dashboard, Finance, NotFound, Profile, Students};
