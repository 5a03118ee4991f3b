use crate::error::{DraftError, DragError};
use weekgrid_core::{AppError, AppointmentError};

impl From<DraftError> for AppError {
    fn from(e: DraftError) -> Self {
        match e {
            DraftError::NotOpen => AppError::Service("No appointment draft is open".into()),
            DraftError::MissingTitle
            | DraftError::MissingStartTime
            | DraftError::MissingEndTime => {
                AppError::Appointment(AppointmentError::Incomplete(e.to_string()))
            }
            DraftError::InvalidHour(hour) => {
                AppError::Appointment(AppointmentError::InvalidTime(format!("hour {hour}")))
            }
        }
    }
}

impl From<DragError> for AppError {
    fn from(e: DragError) -> Self {
        match e {
            DragError::NotDragging => AppError::Service("Nothing is being dragged".into()),
            DragError::UnknownAppointment(id) => {
                AppError::Appointment(AppointmentError::NotFound(id))
            }
            DragError::InvalidHour(hour) => {
                AppError::Appointment(AppointmentError::InvalidTime(format!("hour {hour}")))
            }
            DragError::Store(inner) => inner.into(),
        }
    }
}
