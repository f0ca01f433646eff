//! Formatting helper functions for the Momentum MCP server
//!
//! This module contains list filtering/sorting and the display formatting
//! for tasks, habits, and statistics output.

use crate::due_date;
use crate::momentum::{Habit, Task};
use crate::stats::StatsData;
use chrono::NaiveDate;
use std::str::FromStr;

/// Task list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, pending, completed",
                s
            )),
        }
    }
}

/// Task list sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Earliest due date first, undated tasks last
    Date,
    /// High priority first
    Priority,
    /// Creation order (the stored order)
    Created,
}

impl FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(TaskSort::Date),
            "priority" => Ok(TaskSort::Priority),
            "created" => Ok(TaskSort::Created),
            _ => Err(format!(
                "Invalid sort '{}'. Valid options are: date, priority, created",
                s
            )),
        }
    }
}

/// Habit list filter (completion state as of today)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitFilter {
    All,
    Pending,
    Completed,
}

impl FromStr for HabitFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(HabitFilter::All),
            "pending" => Ok(HabitFilter::Pending),
            "completed" => Ok(HabitFilter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, pending, completed",
                s
            )),
        }
    }
}

/// Apply completion-state filtering to tasks
pub fn apply_task_filter(tasks: &mut Vec<Task>, filter: TaskFilter) {
    match filter {
        TaskFilter::All => {}
        TaskFilter::Pending => tasks.retain(|t| !t.completed),
        TaskFilter::Completed => tasks.retain(|t| t.completed),
    }
}

/// Sort tasks for display
///
/// Sorting is stable, so ties keep creation order.
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort) {
    match sort {
        TaskSort::Created => {}
        TaskSort::Priority => tasks.sort_by_key(|t| t.priority.rank()),
        TaskSort::Date => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }),
    }
}

/// Apply completion-state filtering to (habit, completed_today) pairs
pub fn apply_habit_filter(habits: &mut Vec<(Habit, bool)>, filter: HabitFilter) {
    match filter {
        HabitFilter::All => {}
        HabitFilter::Pending => habits.retain(|(_, done)| !done),
        HabitFilter::Completed => habits.retain(|(_, done)| *done),
    }
}

/// Format tasks into a display string
///
/// Due dates are rendered through the due-date resolver as the labels a
/// user would see ("Today", "Overdue", "Mar 24", ...).
pub fn format_tasks(tasks: Vec<Task>, today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        let state = if task.completed { "completed" } else { "pending" };
        result.push_str(&format!(
            "- [{}] {} (priority: {}, {})\n",
            task.id,
            task.title,
            task.priority.as_str(),
            state
        ));
        result.push_str(&format!(
            "  Due: {}\n",
            due_date::format_date_to_label(task.due_date, today)
        ));
        if let Some(ref desc) = task.description {
            result.push_str(&format!("  Description: {}\n", desc));
        }
        result.push_str(&format!("  Created: {}\n", task.created_at));
        result.push_str(&format!("  Updated: {}\n", task.updated_at));
    }

    result
}

/// Format (habit, completed_today) pairs into a display string
pub fn format_habits(habits: Vec<(Habit, bool)>) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut result = format!("Found {} habit(s):\n\n", habits.len());
    for (habit, completed_today) in habits {
        let today_state = if completed_today { "done" } else { "not yet" };
        result.push_str(&format!(
            "- [{}] {} {} (streak: {}, today: {})\n",
            habit.id, habit.icon, habit.name, habit.streak, today_state
        ));
        result.push_str(&format!("  Color: {}\n", habit.color));
        result.push_str(&format!("  Created: {}\n", habit.created_at));
    }

    result
}

/// Format the statistics snapshot into a display string
pub fn format_stats(stats: &StatsData) -> String {
    let mut result = String::from("Momentum statistics:\n\n");

    result.push_str(&format!(
        "Tasks: {} total, {} completed, {} pending ({}% completion rate)\n",
        stats.total_tasks, stats.completed_tasks, stats.pending_tasks, stats.task_completion_rate
    ));
    result.push_str(&format!(
        "Habits: {} total, {} completed today\n",
        stats.total_habits, stats.habits_completed_today
    ));
    result.push_str(&format!(
        "Streaks: {} combined, longest {}\n",
        stats.total_streak, stats.longest_streak
    ));

    result.push_str("\nWeekly activity:\n");
    for entry in &stats.weekly {
        result.push_str(&format!(
            "- {} {}: {} task(s), {} habit(s)\n",
            entry.day, entry.date, entry.tasks_completed, entry.habits_completed
        ));
    }

    result.push_str(&format!(
        "\nPriority breakdown: {} high, {} medium, {} low\n",
        stats.priority_breakdown.high, stats.priority_breakdown.medium, stats.priority_breakdown.low
    ));

    let score = stats.productivity_score();
    result.push_str(&format!(
        "\nProductivity score: {} ({})\n",
        score,
        score_label(score)
    ));

    result
}

/// Encouragement band for a productivity score
pub fn score_label(score: u32) -> &'static str {
    if score >= 90 {
        "Outstanding! 🌟"
    } else if score >= 70 {
        "Great progress! 💪"
    } else if score >= 50 {
        "Keep going! 🚀"
    } else if score >= 30 {
        "Building momentum 📈"
    } else {
        "Just getting started 🌱"
    }
}
