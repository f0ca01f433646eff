use super::habit::{Habit, HabitCompletion};
use super::task::Task;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Kind of record an ID refers to, tracked by the duplicate-ID index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Task,
    Habit,
}

pub struct MomentumData {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// All tasks stored in a Vec
    ///
    /// Vec is used as the primary storage: it maintains insertion order
    /// (creation order) for consistent TOML serialization and predictable
    /// list output, and keeps the ownership model simple at personal
    /// tracker scales (tens to hundreds of records).
    pub(crate) tasks: Vec<Task>,

    /// All habits stored in a Vec (same rationale as `tasks`)
    pub(crate) habits: Vec<Habit>,

    /// Daily completion rows, at most one per (habit, date) pair
    pub(crate) completions: Vec<HabitCompletion>,

    /// HashMap index for O(1) duplicate-ID detection across tasks and
    /// habits. Not serialized to TOML - rebuilt during deserialization.
    pub(crate) record_map: HashMap<String, RecordKind>,

    /// Counter for generating unique task IDs
    pub task_counter: u32,

    /// Counter for generating unique habit IDs
    pub habit_counter: u32,

    /// Counter for generating unique completion-row IDs
    pub completion_counter: u32,
}

impl Default for MomentumData {
    fn default() -> Self {
        Self {
            format_version: 1,
            tasks: Vec::new(),
            habits: Vec::new(),
            completions: Vec::new(),
            record_map: HashMap::new(),
            task_counter: 0,
            habit_counter: 0,
            completion_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl MomentumData {
    /// Create a new empty MomentumData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    ///
    /// Skips over IDs already present in the collection, which can happen
    /// when a hand-edited data file carries records ahead of the counter.
    pub fn generate_task_id(&mut self) -> String {
        loop {
            self.task_counter += 1;
            let id = format!("task-{}", self.task_counter);
            if !self.record_map.contains_key(&id) {
                return id;
            }
        }
    }

    /// Generate a new unique habit ID
    pub fn generate_habit_id(&mut self) -> String {
        loop {
            self.habit_counter += 1;
            let id = format!("habit-{}", self.habit_counter);
            if !self.record_map.contains_key(&id) {
                return id;
            }
        }
    }

    /// Generate a new unique completion-row ID
    fn generate_completion_id(&mut self) -> String {
        self.completion_counter += 1;
        format!("completion-{}", self.completion_counter)
    }

    /// Count all tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Count all habits
    pub fn habit_count(&self) -> usize {
        self.habits.len()
    }

    /// Count all completion rows
    pub fn completion_count(&self) -> usize {
        self.completions.len()
    }

    /// Find a task by its ID
    pub fn find_task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub fn find_task_by_id_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Find a habit by its ID
    pub fn find_habit_by_id(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Find a habit by its ID and return a mutable reference
    pub fn find_habit_by_id_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Add a task to the collection
    pub fn add_task(&mut self, task: Task) {
        self.record_map.insert(task.id.clone(), RecordKind::Task);
        self.tasks.push(task);
    }

    /// Add a habit to the collection
    pub fn add_habit(&mut self, habit: Habit) {
        self.record_map.insert(habit.id.clone(), RecordKind::Habit);
        self.habits.push(habit);
    }

    /// Remove a task from the collection and return it
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let task = self.tasks.remove(pos);
            self.record_map.remove(id);
            Some(task)
        } else {
            None
        }
    }

    /// Remove a habit and all of its completion rows
    ///
    /// # Returns
    /// The removed habit and the number of cascade-deleted completion
    /// rows, if the habit was found
    pub fn remove_habit(&mut self, id: &str) -> Option<(Habit, usize)> {
        let pos = self.habits.iter().position(|h| h.id == id)?;
        let habit = self.habits.remove(pos);
        self.record_map.remove(id);

        let before = self.completions.len();
        self.completions.retain(|c| c.habit_id != id);
        Some((habit, before - self.completions.len()))
    }

    /// Replace a task in place, keeping its position in the collection
    ///
    /// The replacement must carry the same ID; IDs are immutable and the
    /// duplicate-ID index is keyed by them.
    ///
    /// # Returns
    /// The previous task data if the ID was found
    pub fn replace_task(&mut self, id: &str, task: Task) -> Option<Task> {
        let slot = self.find_task_by_id_mut(id)?;
        Some(std::mem::replace(slot, task))
    }

    /// Flip a task's completion state
    ///
    /// Refreshes `updated_at` to `today`.
    ///
    /// # Returns
    /// The new completed state if the task was found
    pub fn toggle_task(&mut self, id: &str, today: NaiveDate) -> Option<bool> {
        let task = self.find_task_by_id_mut(id)?;
        task.completed = !task.completed;
        task.updated_at = today;
        Some(task.completed)
    }

    /// Find the completion row for a habit on a given date
    pub fn completion_on(&self, habit_id: &str, date: NaiveDate) -> Option<&HabitCompletion> {
        self.completions
            .iter()
            .find(|c| c.habit_id == habit_id && c.completed_date == date)
    }

    /// Toggle a habit's completion for a given date
    ///
    /// This is the single mutation path for completion rows and the
    /// streak cache: the existence check, the row insert/delete, and the
    /// streak delta all happen inside one `&mut self` call, so callers
    /// holding the data lock cannot observe (or create) a state where the
    /// row set and the counter disagree.
    ///
    /// With a row present for `(habit, date)`: the row is deleted and the
    /// streak decremented, floored at zero. Without one: a row is
    /// inserted and the streak incremented.
    ///
    /// # Returns
    /// `(completed_now, streak)` after the toggle, if the habit was found
    pub fn toggle_habit_completion(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
    ) -> Option<(bool, u32)> {
        // Existence check up front so a missing habit mutates nothing
        self.find_habit_by_id(habit_id)?;

        let existing = self
            .completions
            .iter()
            .position(|c| c.habit_id == habit_id && c.completed_date == date);

        // Completion rows are always toggled "for today", so the toggle
        // date doubles as the mutation date.
        let completed_now = match existing {
            Some(pos) => {
                self.completions.remove(pos);
                let habit = self.find_habit_by_id_mut(habit_id)?;
                habit.streak = habit.streak.saturating_sub(1);
                habit.updated_at = date;
                false
            }
            None => {
                let completion_id = self.generate_completion_id();
                self.completions.push(HabitCompletion {
                    id: completion_id,
                    habit_id: habit_id.to_string(),
                    completed_date: date,
                    created_at: date,
                });
                let habit = self.find_habit_by_id_mut(habit_id)?;
                habit.streak += 1;
                habit.updated_at = date;
                true
            }
        };

        let streak = self.find_habit_by_id(habit_id)?.streak;
        Some((completed_now, streak))
    }

    /// Check whether an ID is already taken by a task or habit
    pub fn contains_id(&self, id: &str) -> bool {
        self.record_map.contains_key(id)
    }
}
