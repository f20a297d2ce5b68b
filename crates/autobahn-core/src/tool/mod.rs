//! Tool system for the MCP serving layer
//!
//! This module provides the tool abstraction: a trait for callable
//! operations, an explicit registry mapping tool names to handlers,
//! and helpers for declaring input schemas.

pub mod definition;
pub mod manager;
pub mod traits;

pub use definition::{SchemaBuilder, ToolDefinition};
pub use manager::ToolManager;
pub use traits::{Tool, ToolResult};
