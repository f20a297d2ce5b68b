//! Tool definition and schema helpers

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Declared shape of a tool: name, discovery description, and input schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: JsonValue,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helper functions for creating tool schemas
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Create a simple object schema with properties
    ///
    /// # Arguments
    /// * `properties` - A list of tuples (name, type, required)
    pub fn object_schema(properties: Vec<(&str, &str, bool)>) -> JsonValue {
        let props: serde_json::Map<String, JsonValue> = properties
            .iter()
            .map(|(name, type_str, _)| {
                (name.to_string(), json!({"type": type_str, "description": ""}))
            })
            .collect();

        let required: Vec<&str> = properties
            .iter()
            .filter(|(_, _, required)| *required)
            .map(|(name, _, _)| *name)
            .collect();

        json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }

    /// Create an object schema with descriptions for properties
    ///
    /// # Arguments
    /// * `properties` - A list of tuples (name, type, description, required)
    pub fn object_schema_with_descriptions(
        properties: Vec<(&str, &str, &str, bool)>,
    ) -> JsonValue {
        let props: serde_json::Map<String, JsonValue> = properties
            .iter()
            .map(|(name, type_str, desc, _)| {
                (
                    name.to_string(),
                    json!({"type": type_str, "description": desc}),
                )
            })
            .collect();

        let required: Vec<&str> = properties
            .iter()
            .filter(|(_, _, _, required)| *required)
            .map(|(name, _, _, _)| *name)
            .collect();

        json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }
}
