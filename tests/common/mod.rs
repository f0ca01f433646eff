//! Common test utilities for integration tests

use momentum_mcp::MomentumServerHandler;
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (MomentumServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = MomentumServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    (handler, temp_file)
}

/// Extract a record ID from a creation response message
/// Response format: "Task created with ID: <id> (due: ...)"
#[allow(dead_code)]
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: try to get last whitespace-separated token without parentheses
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}
