//! Momentum MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for
//! Momentum, a personal productivity tracker. It manages tasks with
//! priorities and relative due dates, habits with daily streaks, and
//! aggregated statistics over both.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `MomentumServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `momentum` module - Core data models and business logic
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! Due-date label translation ("Today", "This Week", ...) lives in the
//! `due_date` module; statistics rollups in the `stats` module. Both are
//! pure functions over an explicit `today` anchor.
//!
//! # Example
//!
//! ```no_run
//! use momentum_mcp::MomentumServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = MomentumServerHandler::new("momentum.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod due_date;
mod formatting;
mod handlers;
pub mod momentum;
pub mod stats;
mod storage;
mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use momentum::{Habit, HabitCompletion, MomentumData, Priority, Task};
pub use storage::Storage;

/// MCP Server handler for Momentum
///
/// Provides an MCP interface to task and habit tracking, including
/// relative due-date handling, daily habit completion with streak
/// maintenance, and aggregated statistics. All changes are persisted to
/// a TOML file.
pub struct MomentumServerHandler {
    pub(crate) data: Mutex<MomentumData>,
    pub(crate) storage: Storage,
}

impl MomentumServerHandler {
    /// Create a new Momentum server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the Momentum data file (TOML format)
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use momentum_mcp::MomentumServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = MomentumServerHandler::new("momentum.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self { data, storage })
    }

    /// Persist the current data to the backing file
    pub(crate) fn save_data(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save(&data)?;
        Ok(())
    }
}

/// Momentum personal productivity server tracking tasks and daily habits.
///
/// Tasks carry a title, optional description, priority (low/medium/high),
/// completion state, and an optional due date. Due dates are set and
/// displayed as relative labels ("Today", "Tomorrow", "This Week",
/// "Next Week", "In N days") or canonical YYYY-MM-DD dates; weeks run
/// Sunday through Saturday.
///
/// Habits are daily: toggling one records (or removes) a completion for
/// today and moves its streak counter in lockstep. The stats tool rolls
/// everything up into completion rates, weekly activity, a priority
/// breakdown, and a productivity score.
///
/// Task IDs use format: task-1, task-2, ... Habit IDs: habit-1, habit-2, ...
#[mcp_server]
impl McpServer for MomentumServerHandler {
    /// **Capture**: Create a task. Accepts relative due labels ("Today",
    /// "Tomorrow", "This Week", "Next Week", "In N days") or YYYY-MM-DD.
    /// **Next**: list_tasks to review, toggle_task when done.
    #[tool]
    async fn add_task(
        &self,
        /// Title: brief description (required, non-empty)
        title: String,
        /// Details in free text (optional)
        description: Option<String>,
        /// Priority: low/medium/high, defaults to medium (optional)
        priority: Option<String>,
        /// Due date label or YYYY-MM-DD (optional)
        due: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_task(title, description, priority, due).await
    }

    /// **Review**: List tasks. Filter by completion state, order by due
    /// date, priority, or creation time. Due dates render as the labels
    /// users see ("Today", "Overdue", ...).
    #[tool]
    async fn list_tasks(
        &self,
        /// Filter: all/pending/completed. Empty=all. (optional)
        filter: Option<String>,
        /// Sort: date/priority/created. Empty=created. (optional)
        sort: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_tasks(filter, sort).await
    }

    /// **Clarify**: Update task details. Use "" to clear the description.
    /// For due: "No date" clears, "Overdue" keeps the stored date.
    #[tool]
    async fn update_task(
        &self,
        /// ID of the task to update
        id: String,
        /// New title (optional)
        title: Option<String>,
        /// New description, ""=clear (optional)
        description: Option<String>,
        /// New priority: low/medium/high (optional)
        priority: Option<String>,
        /// New due label or YYYY-MM-DD; "No date"=clear (optional)
        due: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(id, title, description, priority, due)
            .await
    }

    /// **Do**: Toggle a task between pending and completed.
    #[tool]
    async fn toggle_task(
        &self,
        /// ID of the task to toggle
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Discard**: Delete a task permanently.
    #[tool]
    async fn delete_task(
        &self,
        /// ID of the task to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Capture**: Create a habit to track daily.
    #[tool]
    async fn add_habit(
        &self,
        /// Name: what to do daily (required, non-empty)
        name: String,
        /// Display glyph, defaults to "✨" (optional)
        icon: Option<String>,
        /// Accent color "#RRGGBB", defaults to "#3b82f6" (optional)
        color: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_habit(name, icon, color).await
    }

    /// **Review**: List habits with streaks and whether each was
    /// completed today.
    #[tool]
    async fn list_habits(
        &self,
        /// Filter by today's state: all/pending/completed. Empty=all. (optional)
        filter: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_habits(filter).await
    }

    /// **Clarify**: Update habit details. Use "" to reset icon or color
    /// to their defaults.
    #[tool]
    async fn update_habit(
        &self,
        /// ID of the habit to update
        id: String,
        /// New name (optional)
        name: Option<String>,
        /// New glyph, ""=default (optional)
        icon: Option<String>,
        /// New color "#RRGGBB", ""=default (optional)
        color: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_habit(id, name, icon, color).await
    }

    /// **Do**: Toggle a habit's completion for today. Records or removes
    /// today's completion and moves the streak with it.
    #[tool]
    async fn toggle_habit(
        &self,
        /// ID of the habit to toggle
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_habit(id).await
    }

    /// **Discard**: Delete a habit and all of its completion records.
    #[tool]
    async fn delete_habit(
        &self,
        /// ID of the habit to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_habit(id).await
    }

    /// **Reflect**: Aggregated statistics - totals, completion rates,
    /// weekly activity, priority breakdown, and the productivity score.
    #[tool]
    async fn stats(&self) -> McpResult<String> {
        self.handle_stats().await
    }
}
