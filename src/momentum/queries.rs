//! Query methods for MomentumData
//!
//! Read-only accessors used by the handlers and the statistics
//! aggregator. These are separated from the main data.rs to keep the
//! container focused on mutation.

use super::data::MomentumData;
use super::habit::{Habit, HabitCompletion};
use super::task::{Priority, Task};
use chrono::NaiveDate;

impl MomentumData {
    /// Get all tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get all habits in creation order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Get pending (not completed) tasks
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_pending()).collect()
    }

    /// Get completed tasks
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    /// Count tasks with the given priority
    pub fn count_with_priority(&self, priority: Priority) -> usize {
        self.tasks.iter().filter(|t| t.priority == priority).count()
    }

    /// Get all completion rows for a given calendar date
    pub fn completions_on(&self, date: NaiveDate) -> Vec<&HabitCompletion> {
        self.completions
            .iter()
            .filter(|c| c.completed_date == date)
            .collect()
    }

    /// Check whether a habit has a completion row for a given date
    pub fn completed_on(&self, habit_id: &str, date: NaiveDate) -> bool {
        self.completion_on(habit_id, date).is_some()
    }

    /// Count completed tasks whose last mutation fell on a given date
    ///
    /// A completed task's `updated_at` is the day it was last toggled,
    /// which is what the weekly activity chart buckets by.
    pub fn tasks_completed_on(&self, date: NaiveDate) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.completed && t.updated_at == date)
            .count()
    }

    /// Count habit completions recorded for a given date
    pub fn habits_completed_on(&self, date: NaiveDate) -> usize {
        self.completions
            .iter()
            .filter(|c| c.completed_date == date)
            .count()
    }

    /// Sum of all habit streaks
    pub fn total_streak(&self) -> u32 {
        self.habits.iter().map(|h| h.streak).sum()
    }

    /// Longest streak across all habits (zero when there are none)
    pub fn longest_streak(&self) -> u32 {
        self.habits.iter().map(|h| h.streak).max().unwrap_or(0)
    }
}
