mod add_class_dialog;
mod class_card;
mod class_details_dialog;
mod join_class_dialog;

pub use add_class_dialog::AddClassDialog;
pub use class_card::ClassCard;
pub use class_details_dialog::ClassDetailsDialog;
pub use join_class_dialog::JoinClassDialog;
