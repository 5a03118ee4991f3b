//! Drag-and-drop reschedule state.
//!
//! The dragged appointment is captured on drag start and released on drop
//! or when the drag is abandoned.

use weekgrid_calendar::Appointment;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Appointment),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Appointment being dragged, if any.
    pub fn dragged(&self) -> Option<&Appointment> {
        match self {
            DragState::Dragging(apt) => Some(apt),
            DragState::Idle => None,
        }
    }

    /// Leave the state `Idle` and hand back whatever was being dragged.
    pub fn take(&mut self) -> Option<Appointment> {
        match std::mem::take(self) {
            DragState::Dragging(apt) => Some(apt),
            DragState::Idle => None,
        }
    }
}
