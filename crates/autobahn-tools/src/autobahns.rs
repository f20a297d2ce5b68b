//! Road-list tool

use std::sync::Arc;

use async_trait::async_trait;
use autobahn_api::AutobahnClient;
use autobahn_core::{Error, Result, SchemaBuilder, Tool, ToolResult};
use serde_json::Value as JsonValue;

/// Lists the identifiers of all known autobahns
pub struct ListAutobahnsTool {
    client: Arc<AutobahnClient>,
}

impl ListAutobahnsTool {
    pub fn new(client: Arc<AutobahnClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ListAutobahnsTool {
    fn name(&self) -> &str {
        "list_autobahns"
    }

    fn description(&self) -> &str {
        "List all available German autobahns (highways)."
    }

    fn input_schema(&self) -> JsonValue {
        SchemaBuilder::object_schema(vec![])
    }

    async fn execute(&self, _input: JsonValue) -> Result<ToolResult> {
        let roads = self
            .client
            .list_roads()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(ToolResult::success(serde_json::to_string_pretty(&roads)?))
    }
}
