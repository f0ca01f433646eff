//! Validation helper functions for the Momentum MCP server
//!
//! This module contains validation logic for tool parameters: priorities,
//! list filters and sort orders, habit colors, and required text fields.

use crate::formatting::{HabitFilter, TaskFilter, TaskSort};
use crate::momentum::Priority;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a priority parameter
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.parse::<Priority>().map_err(|_| {
        invalid_params(format!(
            "Invalid priority '{}'. Valid priorities: low, medium, high",
            priority_str
        ))
    })
}

/// Parse and validate a task list filter parameter
pub fn parse_task_filter(filter_str: &str) -> McpResult<TaskFilter> {
    filter_str.parse::<TaskFilter>().map_err(|_| {
        invalid_params(format!(
            "Invalid filter '{}'. Valid filters: all, pending, completed",
            filter_str
        ))
    })
}

/// Parse and validate a task sort parameter
pub fn parse_task_sort(sort_str: &str) -> McpResult<TaskSort> {
    sort_str.parse::<TaskSort>().map_err(|_| {
        invalid_params(format!(
            "Invalid sort '{}'. Valid sorts: date, priority, created",
            sort_str
        ))
    })
}

/// Parse and validate a habit list filter parameter
pub fn parse_habit_filter(filter_str: &str) -> McpResult<HabitFilter> {
    filter_str.parse::<HabitFilter>().map_err(|_| {
        invalid_params(format!(
            "Invalid filter '{}'. Valid filters: all, pending, completed",
            filter_str
        ))
    })
}

/// Validate a habit color as "#" followed by six hex digits
pub fn validate_color(color: &str) -> McpResult<()> {
    let ok = color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        Err(invalid_params(format!(
            "Invalid color '{}'. Use a 6-hex-digit RGB string (e.g., '#3b82f6')",
            color
        )))
    }
}

/// Require a non-empty text field
pub fn require_text(field: &str, value: &str) -> McpResult<()> {
    if value.trim().is_empty() {
        Err(invalid_params(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}
