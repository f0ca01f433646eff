use super::local_date_today;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default glyph for new habits
pub const DEFAULT_ICON: &str = "✨";

/// Default accent color for new habits (6-hex-digit RGB)
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A tracked habit
///
/// The `streak` counter is a derived cache of the habit's completion
/// rows. It moves in lockstep with completion row creation/deletion:
/// incremented on insert, decremented (floored at zero) on delete. See
/// `MomentumData::toggle_habit_completion` for the single mutation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Habit {
    /// Unique identifier (e.g., "habit-2")
    pub id: String,
    /// Name describing the habit (required, non-empty)
    pub name: String,
    /// Display glyph
    pub icon: String,
    /// Accent color as "#RRGGBB"
    pub color: String,
    /// Cached count of completion rows, floored at zero
    pub streak: u32,
    /// Date when the habit was created
    pub created_at: NaiveDate,
    /// Date when the habit was last mutated
    pub updated_at: NaiveDate,
}

impl Default for Habit {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            streak: 0,
            created_at: local_date_today(),
            updated_at: local_date_today(),
        }
    }
}

/// A record that a habit was marked done on a given calendar date
///
/// Presence of a row for `(habit_id, completed_date)` is the sole source
/// of truth for "was this habit completed on date D". At most one row
/// exists per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitCompletion {
    /// Unique identifier (e.g., "completion-17")
    pub id: String,
    /// The habit this row belongs to (cascade-deleted with it)
    pub habit_id: String,
    /// The calendar date the habit was marked done
    pub completed_date: NaiveDate,
    /// Date when the row was created
    pub created_at: NaiveDate,
}

impl Default for HabitCompletion {
    fn default() -> Self {
        Self {
            id: String::new(),
            habit_id: String::new(),
            completed_date: local_date_today(),
            created_at: local_date_today(),
        }
    }
}
