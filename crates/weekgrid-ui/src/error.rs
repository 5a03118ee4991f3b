//! Errors from the view-model's gesture flows.
//!
//! None of these are shown to the user directly; the view stays in its
//! current state and callers decide whether to surface anything.

use thiserror::Error;
use weekgrid_calendar::CalendarError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("No appointment draft is open")]
    NotOpen,

    #[error("Title is required")]
    MissingTitle,

    #[error("Start time is required")]
    MissingStartTime,

    #[error("End time is required")]
    MissingEndTime,

    #[error("Hour out of range: {0}")]
    InvalidHour(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    #[error("Nothing is being dragged")]
    NotDragging,

    #[error("Appointment not in view: {0}")]
    UnknownAppointment(String),

    #[error("Hour out of range: {0}")]
    InvalidHour(u32),

    #[error(transparent)]
    Store(#[from] CalendarError),
}
