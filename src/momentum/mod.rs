//! Momentum domain models and business logic
//!
//! This module contains the core Momentum data structures and their
//! implementations. It is split into submodules for better organization:
//! - `task`: task records and priorities
//! - `habit`: habit records and their daily completion rows
//! - `data`: main data container with all Momentum operations
//! - `queries`: filtered accessors over the container
//! - `serde_impl`: serialization/deserialization implementations

mod data;
mod habit;
mod queries;
mod serde_impl;
mod task;

// Re-export all public types
pub use data::{MomentumData, RecordKind};
pub use habit::{DEFAULT_COLOR, DEFAULT_ICON, Habit, HabitCompletion};
pub use task::{Priority, Task};

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
