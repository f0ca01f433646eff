//! Statistics handler for the Momentum MCP server

use crate::MomentumServerHandler;
use crate::formatting;
use crate::momentum;
use crate::stats;
use mcp_attr::Result as McpResult;

impl MomentumServerHandler {
    /// **Reflect**: Aggregate statistics across tasks, habits, and
    /// completion history, anchored at today.
    pub async fn handle_stats(&self) -> McpResult<String> {
        let today = momentum::local_date_today();

        let data = self.data.lock().unwrap();
        let snapshot = stats::compute_stats(&data, today);
        drop(data);

        Ok(formatting::format_stats(&snapshot))
    }
}
