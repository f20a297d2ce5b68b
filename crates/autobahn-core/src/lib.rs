//! autobahn-core: Autobahn MCP Server Core Library
//!
//! Provides the tool system (trait, registry, schema helpers), shared
//! error types, and environment-driven configuration used by the rest
//! of the workspace.

pub mod config;
pub mod error;
pub mod tool;

pub use config::Config;
pub use error::{Error, Result};
pub use tool::{SchemaBuilder, Tool, ToolDefinition, ToolManager, ToolResult};
