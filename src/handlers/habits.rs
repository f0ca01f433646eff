//! Habit handlers for the Momentum MCP server

use crate::MomentumServerHandler;
use crate::formatting::{self, HabitFilter};
use crate::momentum::{self, DEFAULT_COLOR, DEFAULT_ICON, Habit};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl MomentumServerHandler {
    /// **Capture**: Create a habit to track daily.
    pub async fn handle_add_habit(
        &self,
        name: String,
        icon: Option<String>,
        color: Option<String>,
    ) -> McpResult<String> {
        validation::require_text("name", &name)?;

        let icon = match icon {
            Some(glyph) if !glyph.is_empty() => glyph,
            _ => DEFAULT_ICON.to_string(),
        };
        let color = match color {
            Some(color) if !color.is_empty() => {
                validation::validate_color(&color)?;
                color
            }
            _ => DEFAULT_COLOR.to_string(),
        };

        let today = momentum::local_date_today();
        let mut data = self.data.lock().unwrap();
        let id = data.generate_habit_id();
        data.add_habit(Habit {
            id: id.clone(),
            name,
            icon: icon.clone(),
            color,
            streak: 0,
            created_at: today,
            updated_at: today,
        });
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Habit created with ID: {} (icon: {})", id, icon))
    }

    /// **Review**: List habits with streaks and today's completion state.
    pub async fn handle_list_habits(&self, filter: Option<String>) -> McpResult<String> {
        let filter = match filter {
            Some(ref filter_str) => validation::parse_habit_filter(filter_str)?,
            None => HabitFilter::All,
        };

        let today = momentum::local_date_today();

        let data = self.data.lock().unwrap();
        let mut habits: Vec<(Habit, bool)> = data
            .habits()
            .iter()
            .map(|h| (h.clone(), data.completed_on(&h.id, today)))
            .collect();
        drop(data);

        formatting::apply_habit_filter(&mut habits, filter);

        Ok(formatting::format_habits(habits))
    }

    /// **Clarify**: Update habit details.
    /// **Tip**: Use ""(empty string) to reset icon or color to their
    /// defaults.
    pub async fn handle_update_habit(
        &self,
        id: String,
        name: Option<String>,
        icon: Option<String>,
        color: Option<String>,
    ) -> McpResult<String> {
        if let Some(ref new_name) = name {
            validation::require_text("name", new_name)?;
        }
        if let Some(ref new_color) = color
            && !new_color.is_empty()
        {
            validation::validate_color(new_color)?;
        }

        let today = momentum::local_date_today();
        let mut data = self.data.lock().unwrap();

        let habit = match data.find_habit_by_id_mut(&id) {
            Some(h) => h,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Habit not found: Habit '{}' does not exist. Use list_habits() to see available habits.",
                    id
                );
            }
        };

        if let Some(new_name) = name {
            habit.name = new_name;
        }
        if let Some(new_icon) = icon {
            habit.icon = if new_icon.is_empty() {
                DEFAULT_ICON.to_string()
            } else {
                new_icon
            };
        }
        if let Some(new_color) = color {
            habit.color = if new_color.is_empty() {
                DEFAULT_COLOR.to_string()
            } else {
                new_color
            };
        }
        habit.updated_at = today;
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Habit {} updated successfully", id))
    }

    /// **Do**: Toggle a habit's completion for today.
    ///
    /// With today's completion row present it is deleted and the streak
    /// decremented (floored at zero); otherwise a row is inserted and the
    /// streak incremented. Row set and counter move together.
    pub async fn handle_toggle_habit(&self, id: String) -> McpResult<String> {
        let today = momentum::local_date_today();

        let mut data = self.data.lock().unwrap();
        let (completed, streak) = match data.toggle_habit_completion(&id, today) {
            Some(result) => result,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Habit not found: Habit '{}' does not exist. Use list_habits() to see available habits.",
                    id
                );
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(if completed {
            format!("Habit {} marked done for {} (streak: {})", id, today, streak)
        } else {
            format!("Habit {} unmarked for {} (streak: {})", id, today, streak)
        })
    }

    /// **Discard**: Delete a habit and all of its completion records.
    pub async fn handle_delete_habit(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        let (_, removed_completions) = match data.remove_habit(&id) {
            Some(result) => result,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Habit not found: Habit '{}' does not exist. Use list_habits() to see available habits.",
                    id
                );
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Habit {} deleted ({} completion record(s) removed)",
            id, removed_completions
        ))
    }
}
