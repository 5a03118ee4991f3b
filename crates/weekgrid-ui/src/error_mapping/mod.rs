//! Maps view-model errors to weekgrid_core::AppError for consistent user-facing messages.

mod calendar;
