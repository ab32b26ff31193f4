//! State hooks behind the pages. Each owns its signals and talks to the API through
//! [`AppServices`](crate::AppServices); mutations write, then refetch the whole list.

mod use_activation;
mod use_classes;
mod use_login;
mod use_register;
mod use_students;
mod use_user;

pub use use_activation::{use_activation, UseActivation};
pub use use_classes::{use_classes, UseClasses, TREASURER_TAB};
pub use use_login::{use_login, UseLogin};
pub use use_register::{use_register, UseRegister};
pub use use_students::{use_students, UseStudents};
pub use use_user::{use_user, UseUser};
