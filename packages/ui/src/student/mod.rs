mod add_student_dialog;
mod student_card;
mod student_details_dialog;

pub use add_student_dialog::AddStudentDialog;
pub use student_card::StudentCard;
pub use student_details_dialog::StudentDetailsDialog;
