pub mod use_appointments;
pub mod use_booking;
pub mod use_session;
pub mod use_toasts;
