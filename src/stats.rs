//! Aggregated statistics over tasks, habits, and completion rows
//!
//! Pure computation: `compute_stats` consumes the raw records plus an
//! explicit `today` anchor and produces the rollups the stats view
//! renders. Weekly buckets run from the Sunday starting the current
//! week.

use crate::momentum::{MomentumData, Priority};
use chrono::{Datelike, Duration, NaiveDate};

/// One day of the weekly activity chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyEntry {
    /// Short weekday name ("Sun".."Sat")
    pub day: String,
    /// The calendar date of the bucket
    pub date: NaiveDate,
    /// Completed tasks whose last mutation fell on this day
    pub tasks_completed: usize,
    /// Habit completion rows recorded for this day
    pub habits_completed: usize,
}

/// Task counts by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Snapshot of all derived statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsData {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Integer percent, 0 when there are no tasks
    pub task_completion_rate: u32,

    pub total_habits: usize,
    pub habits_completed_today: usize,
    pub total_streak: u32,
    pub longest_streak: u32,

    /// Seven buckets, Sunday first
    pub weekly: Vec<WeeklyEntry>,

    pub priority_breakdown: PriorityBreakdown,
}

impl StatsData {
    /// Weighted productivity score in 0..=100
    ///
    /// 40% task completion rate, 30% share of habits completed today,
    /// 30% streak maintenance (longest streak, 3 points per day, capped
    /// at 100).
    pub fn productivity_score(&self) -> u32 {
        let task_score = f64::from(self.task_completion_rate) * 0.4;
        let habit_score = if self.total_habits > 0 {
            (self.habits_completed_today as f64 / self.total_habits as f64) * 100.0 * 0.3
        } else {
            0.0
        };
        let streak_score = f64::min(f64::from(self.longest_streak) * 3.0, 100.0) * 0.3;

        (task_score + habit_score + streak_score).round() as u32
    }
}

/// Compute all statistics for the given anchor date
pub fn compute_stats(data: &MomentumData, today: NaiveDate) -> StatsData {
    let total_tasks = data.task_count();
    let completed_tasks = data.completed_tasks().len();
    let pending_tasks = total_tasks - completed_tasks;
    let task_completion_rate = if total_tasks > 0 {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u32
    } else {
        0
    };

    let start_of_week = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let weekly = (0..7)
        .map(|i| {
            let date = start_of_week + Duration::days(i);
            WeeklyEntry {
                day: date.format("%a").to_string(),
                date,
                tasks_completed: data.tasks_completed_on(date),
                habits_completed: data.habits_completed_on(date),
            }
        })
        .collect();

    StatsData {
        total_tasks,
        completed_tasks,
        pending_tasks,
        task_completion_rate,
        total_habits: data.habit_count(),
        habits_completed_today: data.completions_on(today).len(),
        total_streak: data.total_streak(),
        longest_streak: data.longest_streak(),
        weekly,
        priority_breakdown: PriorityBreakdown {
            high: data.count_with_priority(Priority::high),
            medium: data.count_with_priority(Priority::medium),
            low: data.count_with_priority(Priority::low),
        },
    }
}
