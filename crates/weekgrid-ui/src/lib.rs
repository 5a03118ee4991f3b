//! Calendar view-model for Weekgrid.
//!
//! Turns the appointment store into grid render data and translates
//! gestures (cell click, drag and drop) into store mutations.

pub mod dates;
pub mod error;
pub mod error_mapping;
pub mod format;
pub mod models;

pub use dates::{CalendarSettings, NavUnit, ViewMode};
pub use error::{DraftError, DragError};
pub use models::appointment_draft::{AppointmentDraft, ModalState};
pub use models::calendar_model::{CalendarView, GridCell, GridColumn};
pub use models::drag_state::DragState;
