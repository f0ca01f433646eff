use super::local_date_today;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task priority
///
/// Uses snake_case naming to match the TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait
    low,
    /// Normal urgency (the default)
    medium,
    /// Needs attention first
    high,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::medium
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl Priority {
    /// Sort rank for priority ordering (high sorts first)
    pub fn rank(self) -> u8 {
        match self {
            Priority::high => 0,
            Priority::medium => 1,
            Priority::low => 2,
        }
    }

    /// Display name as stored in the data file
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::low => "low",
            Priority::medium => "medium",
            Priority::high => "high",
        }
    }
}

/// A tracked task
///
/// Tasks carry an optional due date stored as an absolute calendar date
/// (`YYYY-MM-DD` in the data file). Translation between that form and the
/// relative labels shown to users ("Today", "This Week", ...) happens in
/// the `due_date` module only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Unique identifier (e.g., "task-3")
    pub id: String,
    /// Title describing the task (required, non-empty)
    pub title: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority (low, medium, high)
    pub priority: Priority,
    /// Optional due date (format: YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Whether the task has been completed
    pub completed: bool,
    /// Date when the task was created
    pub created_at: NaiveDate,
    /// Date when the task was last mutated (refreshed on every update)
    pub updated_at: NaiveDate,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            completed: false,
            created_at: local_date_today(),
            updated_at: local_date_today(),
        }
    }
}

impl Task {
    /// Check if this task is still pending
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Check if this task is past its due date as of `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < today,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_str() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::low);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::medium);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::high);
        assert!("urgent".parse::<Priority>().is_err());
        assert!("HIGH".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::medium);
    }

    #[test]
    fn test_priority_rank_orders_high_first() {
        assert!(Priority::high.rank() < Priority::medium.rank());
        assert!(Priority::medium.rank() < Priority::low.rank());
    }

    #[test]
    fn test_task_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let mut task = Task {
            id: "task-1".to_string(),
            title: "Test".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            ..Default::default()
        };
        assert!(task.is_overdue(today));

        // Completed tasks are never overdue
        task.completed = true;
        assert!(!task.is_overdue(today));

        // Tasks without a due date are never overdue
        task.completed = false;
        task.due_date = None;
        assert!(!task.is_overdue(today));

        // Due today is not overdue
        task.due_date = Some(today);
        assert!(!task.is_overdue(today));
    }
}
