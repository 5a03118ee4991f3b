//! Appointment creation draft and the modal that holds it.

use chrono::{Duration, NaiveDateTime};
use weekgrid_calendar::types::generate_id;
use weekgrid_calendar::{Appointment, DEFAULT_COLOR};

use crate::error::DraftError;
use crate::format::parse_datetime_local;

/// In-progress appointment edited in the creation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub title: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub description: String,
    pub color: String,
}

impl AppointmentDraft {
    /// Draft pre-filled for a clicked cell.
    pub fn for_slot(start: NaiveDateTime, duration: Duration, color: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            start_time: Some(start),
            end_time: Some(start + duration),
            description: String::new(),
            color: color.into(),
        }
    }

    /// Set the start from a form field value; unparseable input clears it.
    pub fn set_start_time_input(&mut self, value: &str) {
        self.start_time = parse_datetime_local(value);
    }

    /// Set the end from a form field value; unparseable input clears it.
    pub fn set_end_time_input(&mut self, value: &str) {
        self.end_time = parse_datetime_local(value);
    }

    /// Check required fields: title, start and end.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(NaiveDateTime, NaiveDateTime), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let start = self.start_time.ok_or(DraftError::MissingStartTime)?;
        let end = self.end_time.ok_or(DraftError::MissingEndTime)?;
        Ok((start, end))
    }

    /// Build the appointment this draft describes, with a fresh id.
    ///
    /// # Errors
    ///
    /// Fails with the first missing required field.
    pub fn to_appointment(&self) -> Result<Appointment, DraftError> {
        let (start_time, end_time) = self.validate()?;
        let color = if self.color.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            self.color.clone()
        };

        Ok(Appointment {
            id: generate_id(),
            title: self.title.clone(),
            start_time,
            end_time,
            description: self.description.clone(),
            color,
        })
    }
}

/// Creation modal visibility together with its draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(AppointmentDraft),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn draft(&self) -> Option<&AppointmentDraft> {
        match self {
            ModalState::Open(draft) => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut AppointmentDraft> {
        match self {
            ModalState::Open(draft) => Some(draft),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::NaiveDate;

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn draft() -> AppointmentDraft {
        AppointmentDraft::for_slot(nine_am(), Duration::hours(1), DEFAULT_COLOR)
    }

    #[test]
    fn test_for_slot_prefill() {
        let d = draft();
        assert_eq!(d.title, "");
        assert_eq!(d.start_time, Some(nine_am()));
        assert_eq!(d.end_time, Some(nine_am() + Duration::hours(1)));
        assert_eq!(d.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_requires_title() {
        let mut d = draft();
        assert_eq!(d.validate(), Err(DraftError::MissingTitle));
        d.title = "   ".into();
        assert_eq!(d.to_appointment(), Err(DraftError::MissingTitle));
    }

    #[test]
    fn test_requires_both_times() {
        let mut d = draft();
        d.title = "Dentist".into();

        d.set_end_time_input("not a date");
        assert_eq!(d.validate(), Err(DraftError::MissingEndTime));

        d.start_time = None;
        assert_eq!(d.validate(), Err(DraftError::MissingStartTime));
    }

    #[test]
    fn test_form_inputs() {
        let mut d = draft();
        d.set_start_time_input("2024-01-02T10:30");
        d.set_end_time_input("2024-01-02T11:45");
        assert_eq!(d.start_time.unwrap().to_string(), "2024-01-02 10:30:00");
        assert_eq!(d.end_time.unwrap().to_string(), "2024-01-02 11:45:00");
    }

    #[test]
    fn test_to_appointment() {
        let mut d = draft();
        d.title = "Dentist".into();
        d.description = "Bring forms".into();
        d.color = String::new();

        let apt = d.to_appointment().unwrap();
        assert!(!apt.id.is_empty());
        assert_eq!(apt.title, "Dentist");
        assert_eq!(apt.description, "Bring forms");
        assert_eq!(apt.color, DEFAULT_COLOR);
        assert_eq!(apt.duration(), Duration::hours(1));
    }

    #[test]
    fn test_modal_state() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(modal.draft_mut().is_none());

        modal = ModalState::Open(draft());
        modal.draft_mut().unwrap().title = "x".into();
        assert_eq!(modal.draft().unwrap().title, "x");
    }
}
