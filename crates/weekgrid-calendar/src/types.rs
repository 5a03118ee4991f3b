//! Appointment types and data structures.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub use weekgrid_core::DEFAULT_COLOR;

/// Appointment as held by the store.
///
/// Times are wall-clock local times. `end_time > start_time` is expected
/// but not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Generate a fresh client-side appointment id.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Appointment {
    /// Create an appointment with a generated id, empty description and default color.
    pub fn new(title: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            start_time,
            end_time,
            description: String::new(),
            color: default_color(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Same appointment moved to `new_start`, keeping its duration.
    pub fn rescheduled(&self, new_start: NaiveDateTime) -> Self {
        Self {
            start_time: new_start,
            end_time: new_start + self.duration(),
            ..self.clone()
        }
    }

    /// True if the appointment starts on `date`, ignoring time of day.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_time.date() == date
    }

    /// Hour-granularity grid placement.
    ///
    /// Only the start date and the hour fields are compared, so appointments
    /// crossing midnight or ending at e.g. 10:30 are approximated.
    pub fn occupies(&self, date: NaiveDate, hour: u32) -> bool {
        self.starts_on(date) && self.start_time.hour() <= hour && self.end_time.hour() > hour
    }
}
