pub mod appointment_draft;
pub mod calendar_model;
pub mod drag_state;
