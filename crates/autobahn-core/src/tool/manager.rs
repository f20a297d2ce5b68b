//! Tool manager for registering and executing tools

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::tool::{Tool, ToolDefinition, ToolResult};
use crate::Result;

/// Manager for registered tools
///
/// An explicit table from tool name to handler, constructed once at
/// process start and handed to the serving component.
pub struct ToolManager {
    /// Registered tools indexed by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolManager {
    /// Create a new empty tool manager
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all registered tool definitions for the MCP tool listing
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition::new(t.name(), t.description(), t.input_schema()))
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Arguments
    /// * `name` - The name of the tool to execute
    /// * `input` - The input parameters for the tool
    ///
    /// # Errors
    /// Returns an error if the tool is not found or execution fails
    pub async fn execute(&self, name: &str, input: JsonValue) -> Result<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| crate::Error::ToolExecution(format!("Unknown tool: {}", name)))?;
        tool.execute(input).await
    }

    /// Check if a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back"
        }

        fn input_schema(&self) -> JsonValue {
            json!({"type": "object", "properties": {}, "required": []})
        }

        async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
            Ok(ToolResult::success(input.to_string()))
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut manager = ToolManager::new();
        assert!(manager.is_empty());

        manager.register(Arc::new(EchoTool));
        assert_eq!(manager.len(), 1);
        assert!(manager.contains("echo"));
        assert!(manager.get("echo").is_some());
        assert!(manager.get("missing").is_none());
    }

    #[test]
    fn test_definitions() {
        let mut manager = ToolManager::new();
        manager.register(Arc::new(EchoTool));

        let defs = manager.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "echo");
        assert_eq!(defs[0].description, "Echo the input back");
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let manager = ToolManager::new();
        let result = manager.execute("missing", json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute() {
        let mut manager = ToolManager::new();
        manager.register(Arc::new(EchoTool));

        let result = manager.execute("echo", json!({"a": 1})).await.unwrap();
        assert!(!result.is_error);
        assert_eq!(result.output, r#"{"a":1}"#);
    }
}
