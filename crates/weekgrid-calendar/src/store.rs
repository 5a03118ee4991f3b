//! In-memory appointment store with replay-latest change notifications.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use parking_lot::RwLock;

use crate::error::CalendarError;
use crate::types::Appointment;
use crate::watch::{Subscription, Watch};

/// Single source of truth for appointments.
///
/// Every mutation publishes a fresh copy of the whole list. Share it between
/// consumers with `Arc<AppointmentStore>`.
pub struct AppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
    changes: Watch<Vec<Appointment>>,
}

impl AppointmentStore {
    /// Create an empty store. Subscribers will first see an empty list.
    pub fn new() -> Self {
        Self {
            appointments: RwLock::new(Vec::new()),
            changes: Watch::new(Vec::new()),
        }
    }

    /// Subscribe to snapshots. The current list is delivered immediately.
    pub fn subscribe(&self) -> Subscription<Vec<Appointment>> {
        self.changes.subscribe()
    }

    /// Append an appointment. Ids are not checked for duplicates.
    pub fn add(&self, appointment: Appointment) {
        let mut list = self.appointments.write();
        tracing::debug!(id = %appointment.id, title = %appointment.title, "Adding appointment");
        list.push(appointment);
        self.changes.publish(list.clone());
    }

    /// Replace the appointment with the same id.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::AppointmentNotFound` when no appointment has
    /// that id; the store is left unchanged and nothing is published.
    pub fn update(&self, appointment: Appointment) -> Result<(), CalendarError> {
        let mut list = self.appointments.write();
        let Some(slot) = list.iter_mut().find(|apt| apt.id == appointment.id) else {
            tracing::debug!(id = %appointment.id, "Update skipped, appointment not found");
            return Err(CalendarError::AppointmentNotFound(appointment.id));
        };

        tracing::debug!(id = %appointment.id, "Updating appointment");
        *slot = appointment;
        self.changes.publish(list.clone());
        Ok(())
    }

    /// Remove every appointment with `id` and return how many were removed.
    /// A snapshot is published even when nothing matched.
    pub fn delete(&self, id: &str) -> usize {
        let mut list = self.appointments.write();
        let before = list.len();
        list.retain(|apt| apt.id != id);
        let removed = before - list.len();
        tracing::debug!(id, removed, "Deleted appointment");
        self.changes.publish(list.clone());
        removed
    }

    /// Appointments starting on `date`, time of day ignored, in store order.
    pub fn for_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .read()
            .iter()
            .filter(|apt| apt.starts_on(date))
            .cloned()
            .collect()
    }

    /// Appointments starting in `[start_of_week 00:00, +7 days)`, in store order.
    pub fn for_week(&self, start_of_week: NaiveDate) -> Vec<Appointment> {
        let week_start = start_of_week.and_time(chrono::NaiveTime::MIN);
        let week_end = week_start
            .checked_add_signed(Duration::days(7))
            .unwrap_or(NaiveDateTime::MAX);

        self.appointments
            .read()
            .iter()
            .filter(|apt| apt.start_time >= week_start && apt.start_time < week_end)
            .cloned()
            .collect()
    }

    /// First appointment with `id`.
    pub fn get(&self, id: &str) -> Option<Appointment> {
        self.appointments.read().iter().find(|apt| apt.id == id).cloned()
    }

    /// Copy of the full list in store order.
    pub fn snapshot(&self) -> Vec<Appointment> {
        self.appointments.read().clone()
    }

    pub fn len(&self) -> usize {
        self.appointments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.read().is_empty()
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}
