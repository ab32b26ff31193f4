//! Page bodies and the modal shell they share. The web crate wraps these in routes.

mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod dashboard;
pub use dashboard::DashboardPage;

mod students_page;
pub use students_page::StudentsPage;

mod profile_page;
pub use profile_page::ProfilePage;

mod finance_view;
pub use finance_view::FinanceView;
