//! In-memory appointment storage for Weekgrid.
//!
//! Provides the appointment model, the observable store and the
//! replay-latest broadcast it publishes through.

pub mod error;
pub mod store;
pub mod types;
pub mod watch;

pub use error::CalendarError;
pub use store::AppointmentStore;
pub use types::{Appointment, DEFAULT_COLOR};
pub use watch::{Subscription, Watch};
