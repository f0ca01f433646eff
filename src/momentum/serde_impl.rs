//! Serialization and deserialization implementations for MomentumData
//!
//! The record_map index is not part of the file format; deserialization
//! rebuilds it from the stored tasks and habits. Serialization omits
//! empty collections and zero counters to keep the TOML file minimal.

use super::data::{MomentumData, RecordKind};
use super::habit::{Habit, HabitCompletion};
use super::task::Task;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Plain mirror of the on-disk shape, with defaults for every field so
/// partial files (and the empty file) load cleanly
#[derive(Deserialize)]
#[serde(default)]
struct MomentumDataFile {
    format_version: u32,
    tasks: Vec<Task>,
    habits: Vec<Habit>,
    completions: Vec<HabitCompletion>,
    task_counter: u32,
    habit_counter: u32,
    completion_counter: u32,
}

impl Default for MomentumDataFile {
    fn default() -> Self {
        Self {
            format_version: 1,
            tasks: Vec::new(),
            habits: Vec::new(),
            completions: Vec::new(),
            task_counter: 0,
            habit_counter: 0,
            completion_counter: 0,
        }
    }
}

impl<'de> Deserialize<'de> for MomentumData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = MomentumDataFile::deserialize(deserializer)?;

        // Rebuild the duplicate-ID index from the stored records
        let mut record_map = HashMap::new();
        for task in &file.tasks {
            record_map.insert(task.id.clone(), RecordKind::Task);
        }
        for habit in &file.habits {
            record_map.insert(habit.id.clone(), RecordKind::Habit);
        }

        Ok(MomentumData {
            format_version: file.format_version,
            tasks: file.tasks,
            habits: file.habits,
            completions: file.completions,
            record_map,
            task_counter: file.task_counter,
            habit_counter: file.habit_counter,
            completion_counter: file.completion_counter,
        })
    }
}

impl Serialize for MomentumData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MomentumData", 7)?;
        state.serialize_field("format_version", &self.format_version)?;

        if !self.tasks.is_empty() {
            state.serialize_field("tasks", &self.tasks)?;
        }
        if !self.habits.is_empty() {
            state.serialize_field("habits", &self.habits)?;
        }
        if !self.completions.is_empty() {
            state.serialize_field("completions", &self.completions)?;
        }

        if self.task_counter != 0 {
            state.serialize_field("task_counter", &self.task_counter)?;
        }
        if self.habit_counter != 0 {
            state.serialize_field("habit_counter", &self.habit_counter)?;
        }
        if self.completion_counter != 0 {
            state.serialize_field("completion_counter", &self.completion_counter)?;
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::momentum::Priority;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_roundtrip_preserves_records_and_counters() {
        let mut data = MomentumData::new();
        let id = data.generate_task_id();
        data.add_task(Task {
            id,
            title: "Write report".to_string(),
            description: Some("Q1 numbers".to_string()),
            priority: Priority::high,
            due_date: Some(date(2024, 3, 16)),
            completed: false,
            created_at: date(2024, 3, 14),
            updated_at: date(2024, 3, 14),
        });
        let id = data.generate_habit_id();
        data.add_habit(Habit {
            id,
            name: "Drink water".to_string(),
            icon: "💧".to_string(),
            color: "#06b6d4".to_string(),
            streak: 0,
            created_at: date(2024, 3, 14),
            updated_at: date(2024, 3, 14),
        });
        data.toggle_habit_completion("habit-1", date(2024, 3, 14));

        let toml_str = toml::to_string_pretty(&data).unwrap();
        let loaded: MomentumData = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.task_count(), 1);
        assert_eq!(loaded.habit_count(), 1);
        assert_eq!(loaded.completion_count(), 1);
        assert_eq!(loaded.task_counter, 1);
        assert_eq!(loaded.habit_counter, 1);
        assert_eq!(loaded.completion_counter, 1);

        let task = loaded.find_task_by_id("task-1").unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, Priority::high);
        assert_eq!(task.due_date, Some(date(2024, 3, 16)));

        let habit = loaded.find_habit_by_id("habit-1").unwrap();
        assert_eq!(habit.icon, "💧");
        assert_eq!(habit.streak, 1);
        assert!(loaded.completed_on("habit-1", date(2024, 3, 14)));
    }

    #[test]
    fn test_record_map_rebuilt_on_deserialize() {
        let mut data = MomentumData::new();
        data.add_task(Task {
            id: "task-1".to_string(),
            title: "Task".to_string(),
            ..Default::default()
        });
        data.add_habit(Habit {
            id: "habit-1".to_string(),
            name: "Habit".to_string(),
            ..Default::default()
        });

        let toml_str = toml::to_string(&data).unwrap();

        // The index is not part of the file format
        assert!(!toml_str.contains("record_map"));

        let loaded: MomentumData = toml::from_str(&toml_str).unwrap();
        assert!(loaded.contains_id("task-1"));
        assert!(loaded.contains_id("habit-1"));
        assert!(!loaded.contains_id("task-2"));
    }

    #[test]
    fn test_empty_data_serializes_minimal() {
        let data = MomentumData::new();
        let toml_str = toml::to_string(&data).unwrap();

        assert!(toml_str.contains("format_version"));
        assert!(!toml_str.contains("tasks"));
        assert!(!toml_str.contains("task_counter"));
    }

    #[test]
    fn test_load_from_handwritten_toml() {
        let toml_str = r#"
format_version = 1
task_counter = 2

[[tasks]]
id = "task-1"
title = "First task"
priority = "low"
completed = true
created_at = "2024-03-01"
updated_at = "2024-03-10"

[[tasks]]
id = "task-2"
title = "Second task"
due_date = "2024-03-20"
created_at = "2024-03-02"
updated_at = "2024-03-02"
"#;

        let data: MomentumData = toml::from_str(toml_str).unwrap();
        assert_eq!(data.task_count(), 2);
        assert_eq!(data.task_counter, 2);

        let first = data.find_task_by_id("task-1").unwrap();
        assert_eq!(first.priority, Priority::low);
        assert!(first.completed);
        assert!(first.due_date.is_none());

        let second = data.find_task_by_id("task-2").unwrap();
        assert_eq!(second.priority, Priority::medium);
        assert_eq!(second.due_date, Some(date(2024, 3, 20)));
    }
}
