pub mod appointments_page;
pub mod barber_picker;
pub mod booking_page;
pub mod confirm_dialog;
pub mod date_picker;
pub mod forms;
pub mod navbar;
pub mod time_slot_picker;
pub mod toast_list;
