//! Calendar view-model.
//!
//! Derives the visible days from the current date, buckets appointments into
//! (day, hour) cells and turns cell clicks and drag-and-drop into store
//! mutations. The view keeps its own copy of the appointment list, refreshed
//! from the store's subscription.

use std::ops::Range;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use weekgrid_calendar::{Appointment, AppointmentStore, Subscription};

use crate::dates::{self, CalendarSettings, NavUnit, ViewMode};
use crate::error::{DraftError, DragError};
use crate::models::appointment_draft::{AppointmentDraft, ModalState};
use crate::models::drag_state::DragState;

/// One (day, hour) position with the appointments placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub date: NaiveDate,
    pub hour: u32,
    pub appointments: Vec<Appointment>,
}

/// A visible day and its cells, one per displayed hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub date: NaiveDate,
    pub cells: Vec<GridCell>,
}

pub struct CalendarView {
    store: Arc<AppointmentStore>,
    subscription: Subscription<Vec<Appointment>>,
    settings: CalendarSettings,
    current_date: NaiveDate,
    view_mode: ViewMode,
    appointments: Vec<Appointment>,
    week_days: Vec<NaiveDate>,
    modal: ModalState,
    drag: DragState,
}

impl CalendarView {
    /// Create a view positioned on `current_date` and subscribe to the store.
    pub fn new(store: Arc<AppointmentStore>, settings: CalendarSettings, current_date: NaiveDate) -> Self {
        let subscription = store.subscribe();
        let mut view = Self {
            store,
            subscription,
            view_mode: settings.default_view,
            settings,
            current_date,
            appointments: Vec::new(),
            week_days: Vec::new(),
            modal: ModalState::Closed,
            drag: DragState::Idle,
        };
        view.update_week_days();
        view.poll_store();
        view
    }

    /// Create a view positioned on today's local date.
    pub fn for_today(store: Arc<AppointmentStore>, settings: CalendarSettings) -> Self {
        Self::new(store, settings, Local::now().date_naive())
    }

    // ----- store sync -----

    /// Pull the newest snapshot from the store, if any arrived.
    /// Returns true when the local copy was replaced.
    pub fn poll_store(&mut self) -> bool {
        match self.subscription.latest() {
            Some(snapshot) => {
                tracing::debug!(count = snapshot.len(), "Calendar view received snapshot");
                self.appointments = snapshot;
                true
            }
            None => false,
        }
    }

    /// Appointments as of the last snapshot.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    // ----- date range -----

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// First day of the week containing `date`, per the configured week start.
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        dates::start_of_week(date, self.settings.week_start)
    }

    /// The seven days of the current week.
    pub fn week_days(&self) -> &[NaiveDate] {
        &self.week_days
    }

    /// Days shown as grid columns: the whole week, or only the current date.
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.view_mode {
            ViewMode::Week => self.week_days.clone(),
            ViewMode::Day => vec![self.current_date],
        }
    }

    /// Hours shown as grid rows.
    pub fn hours(&self) -> Range<u32> {
        self.settings.hours.clone()
    }

    pub fn switch_view(&mut self, mode: ViewMode) {
        tracing::debug!(?mode, "Switching calendar view");
        self.view_mode = mode;
    }

    /// Move `direction` weeks or days. Past chrono's date range the date stays put.
    pub fn navigate(&mut self, direction: i32, unit: NavUnit) {
        match dates::shift(self.current_date, direction, unit) {
            Some(date) => self.go_to(date),
            None => tracing::warn!(direction, ?unit, "Navigation out of supported date range"),
        }
    }

    pub fn navigate_week(&mut self, direction: i32) {
        self.navigate(direction, NavUnit::Week);
    }

    pub fn navigate_day(&mut self, direction: i32) {
        self.navigate(direction, NavUnit::Day);
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.update_week_days();
    }

    pub fn go_to_today(&mut self) {
        self.go_to(Local::now().date_naive());
    }

    fn update_week_days(&mut self) {
        self.week_days = dates::week_days(self.start_of_week(self.current_date));
    }

    // ----- grid -----

    /// Appointments placed in the `(date, hour)` cell, in store order.
    ///
    /// Placement is by hour only: an appointment occupies the cell when it
    /// starts on `date`, its start hour is at or before `hour` and its end
    /// hour is after `hour`. Spans past midnight and partial hours are
    /// approximated.
    pub fn cell_occupants(&self, date: NaiveDate, hour: u32) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.occupies(date, hour))
            .collect()
    }

    /// Render data for every visible day and displayed hour.
    pub fn grid(&self) -> Vec<GridColumn> {
        self.visible_days()
            .into_iter()
            .map(|date| GridColumn {
                date,
                cells: self
                    .hours()
                    .map(|hour| GridCell {
                        date,
                        hour,
                        appointments: self.cell_occupants(date, hour).into_iter().cloned().collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    // ----- creation modal -----

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn draft(&self) -> Option<&AppointmentDraft> {
        self.modal.draft()
    }

    /// Mutable access to the open draft for form edits.
    pub fn draft_mut(&mut self) -> Option<&mut AppointmentDraft> {
        self.modal.draft_mut()
    }

    /// Open the creation modal for a clicked cell, replacing any open draft.
    ///
    /// # Errors
    ///
    /// `DraftError::InvalidHour` when `hour` is not a valid hour of day.
    pub fn open_appointment_modal(&mut self, date: NaiveDate, hour: u32) -> Result<(), DraftError> {
        let start = dates::cell_start(date, hour).ok_or(DraftError::InvalidHour(hour))?;
        tracing::debug!(%start, "Opening appointment modal");
        self.modal = ModalState::Open(AppointmentDraft::for_slot(
            start,
            self.settings.default_duration,
            self.settings.default_color.clone(),
        ));
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.description = description.into();
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.color = color.into();
        }
    }

    pub fn set_start_time(&mut self, start: Option<NaiveDateTime>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.start_time = start;
        }
    }

    pub fn set_end_time(&mut self, end: Option<NaiveDateTime>) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.end_time = end;
        }
    }

    /// Start time from the `YYYY-MM-DDTHH:MM` form field.
    pub fn set_start_time_input(&mut self, value: &str) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.set_start_time_input(value);
        }
    }

    /// End time from the `YYYY-MM-DDTHH:MM` form field.
    pub fn set_end_time_input(&mut self, value: &str) {
        if let Some(draft) = self.modal.draft_mut() {
            draft.set_end_time_input(value);
        }
    }

    /// Commit the open draft to the store and close the modal.
    ///
    /// # Errors
    ///
    /// When the draft is incomplete the modal stays open and the store is
    /// untouched. Nothing is shown to the user; the error is for callers.
    pub fn save_appointment(&mut self) -> Result<Appointment, DraftError> {
        let draft = self.modal.draft().ok_or(DraftError::NotOpen)?;
        let appointment = match draft.to_appointment() {
            Ok(apt) => apt,
            Err(e) => {
                tracing::debug!(error = %e, "Draft not saved");
                return Err(e);
            }
        };

        self.store.add(appointment.clone());
        self.close_appointment_modal();
        self.poll_store();
        tracing::info!(id = %appointment.id, "Appointment created");
        Ok(appointment)
    }

    /// Close the modal and discard the draft.
    pub fn close_appointment_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    // ----- drag and drop -----

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Start dragging the appointment with `id` from the current snapshot.
    ///
    /// # Errors
    ///
    /// `DragError::UnknownAppointment` if the view does not hold that id.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), DragError> {
        let apt = self
            .appointments
            .iter()
            .find(|apt| apt.id == id)
            .cloned()
            .ok_or_else(|| DragError::UnknownAppointment(id.to_string()))?;

        tracing::debug!(id, "Drag started");
        self.drag = DragState::Dragging(apt);
        Ok(())
    }

    /// Every cell accepts a drop while dragging.
    pub fn accepts_drop(&self) -> bool {
        true
    }

    /// Drop the dragged appointment on `(date, hour)`, keeping its duration.
    ///
    /// The drag ends whatever the outcome.
    ///
    /// # Errors
    ///
    /// `NotDragging` without an active drag, `InvalidHour` for hours past 23,
    /// `Store` when the appointment was removed from the store meanwhile.
    pub fn drop_on(&mut self, date: NaiveDate, hour: u32) -> Result<Appointment, DragError> {
        let dragged = self.drag.take().ok_or(DragError::NotDragging)?;
        let start = dates::cell_start(date, hour).ok_or(DragError::InvalidHour(hour))?;

        let moved = dragged.rescheduled(start);
        self.store.update(moved.clone())?;
        self.poll_store();
        tracing::info!(id = %moved.id, %start, "Appointment rescheduled");
        Ok(moved)
    }

    /// Abandon a drag without dropping.
    pub fn cancel_drag(&mut self) {
        if let Some(apt) = self.drag.take() {
            tracing::debug!(id = %apt.id, "Drag cancelled");
        }
    }
}
