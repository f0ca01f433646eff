//! Task handlers for the Momentum MCP server

use crate::MomentumServerHandler;
use crate::due_date;
use crate::formatting::{self, TaskFilter, TaskSort};
use crate::momentum::{self, Priority, Task};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl MomentumServerHandler {
    /// **Capture**: Create a task with an optional relative due date.
    /// Accepts the labels users pick ("Today", "This Week", "In 3 days")
    /// as well as canonical YYYY-MM-DD dates.
    pub async fn handle_add_task(
        &self,
        title: String,
        description: Option<String>,
        priority: Option<String>,
        due: Option<String>,
    ) -> McpResult<String> {
        validation::require_text("title", &title)?;

        let priority = match priority {
            Some(ref priority_str) => validation::parse_priority(priority_str)?,
            None => Priority::default(),
        };

        let today = momentum::local_date_today();

        // Unresolvable labels degrade to "no date" on creation; there is
        // no existing value to preserve
        let due_date = due
            .as_deref()
            .and_then(|label| due_date::resolve_label_to_date(label, today));

        let mut data = self.data.lock().unwrap();
        let id = data.generate_task_id();
        data.add_task(Task {
            id: id.clone(),
            title,
            description: description.filter(|d| !d.is_empty()),
            priority,
            due_date,
            completed: false,
            created_at: today,
            updated_at: today,
        });
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Task created with ID: {} (due: {})",
            id,
            due_date::format_date_to_label(due_date, today)
        ))
    }

    /// **Review**: List tasks with optional completion filtering and
    /// display ordering.
    pub async fn handle_list_tasks(
        &self,
        filter: Option<String>,
        sort: Option<String>,
    ) -> McpResult<String> {
        let filter = match filter {
            Some(ref filter_str) => validation::parse_task_filter(filter_str)?,
            None => TaskFilter::All,
        };
        let sort = match sort {
            Some(ref sort_str) => validation::parse_task_sort(sort_str)?,
            None => TaskSort::Created,
        };

        let data = self.data.lock().unwrap();
        let mut tasks = data.tasks().to_vec();
        drop(data);

        formatting::apply_task_filter(&mut tasks, filter);
        formatting::sort_tasks(&mut tasks, sort);

        Ok(formatting::format_tasks(tasks, momentum::local_date_today()))
    }

    /// **Clarify**: Update task details after capture.
    /// **Tip**: Use ""(empty string) to clear the description. For `due`,
    /// "No date" clears the date while "Overdue" and unrecognized labels
    /// leave the stored date unchanged.
    pub async fn handle_update_task(
        &self,
        id: String,
        title: Option<String>,
        description: Option<String>,
        priority: Option<String>,
        due: Option<String>,
    ) -> McpResult<String> {
        if let Some(ref new_title) = title {
            validation::require_text("title", new_title)?;
        }
        let priority = match priority {
            Some(ref priority_str) => Some(validation::parse_priority(priority_str)?),
            None => None,
        };

        let today = momentum::local_date_today();
        let mut data = self.data.lock().unwrap();

        // Find existing task
        let mut task = match data.find_task_by_id(&id) {
            Some(t) => t.clone(),
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Task not found: Task '{}' does not exist. Use list_tasks() to see available tasks.",
                    id
                );
            }
        };

        // Update fields if provided
        if let Some(new_title) = title {
            task.title = new_title;
        }

        if let Some(desc) = description {
            task.description = if desc.is_empty() { None } else { Some(desc) };
        }

        if let Some(new_priority) = priority {
            task.priority = new_priority;
        }

        // "No date" clears; "Overdue" and unresolvable labels preserve
        // the stored date rather than snapping it to something new
        match due.as_deref() {
            None | Some("Overdue") => {}
            Some("No date") => task.due_date = None,
            Some(label) => {
                if let Some(resolved) = due_date::resolve_label_to_date(label, today) {
                    task.due_date = Some(resolved);
                }
            }
        }

        task.updated_at = today;

        if data.replace_task(&id, task).is_none() {
            drop(data);
            bail_public!(_, "Failed to update task '{}'", id);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task {} updated successfully", id))
    }

    /// **Do**: Flip a task between pending and completed.
    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let today = momentum::local_date_today();

        let mut data = self.data.lock().unwrap();
        let completed = match data.toggle_task(&id, today) {
            Some(state) => state,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Task not found: Task '{}' does not exist. Use list_tasks() to see available tasks.",
                    id
                );
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Task {} marked as {}",
            id,
            if completed { "completed" } else { "pending" }
        ))
    }

    /// **Discard**: Delete a task permanently.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if data.remove_task(&id).is_none() {
            drop(data);
            bail_public!(
                _,
                "Task not found: Task '{}' does not exist. Use list_tasks() to see available tasks.",
                id
            );
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task {} deleted", id))
    }
}
