//! MCP tool handlers for the Momentum server
//!
//! This module contains the implementation of all MCP tool handlers,
//! grouped by record family the way the tools themselves are.

pub mod habits;
pub mod stats;
pub mod tasks;
