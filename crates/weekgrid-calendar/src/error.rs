//! Calendar-specific error types.

use thiserror::Error;
use weekgrid_core::{AppError, AppointmentError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),
}

impl CalendarError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::AppointmentNotFound(_) => "Appointment not found".to_string(),
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::AppointmentNotFound(id) => {
                AppError::Appointment(AppointmentError::NotFound(id))
            }
        }
    }
}
