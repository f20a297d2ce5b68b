//! MCP serving layer
//!
//! Bridges the tool registry to the MCP protocol: `tools/list` exposes
//! the registered definitions, `tools/call` dispatches through the
//! `ToolManager`. Tool failures are reported to the calling runtime as
//! error results; only an unknown tool name is a protocol error.

use std::sync::Arc;

use autobahn_core::{ToolDefinition, ToolManager};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

/// MCP server over the tool registry
#[derive(Clone)]
pub struct AutobahnServer {
    tools: Arc<ToolManager>,
}

impl AutobahnServer {
    /// Wrap a fully populated tool registry
    pub fn new(tools: ToolManager) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }
}

/// Convert a registry definition into the MCP tool shape
fn to_mcp_tool(definition: &ToolDefinition) -> Tool {
    let schema = definition
        .input_schema
        .as_object()
        .cloned()
        .unwrap_or_default();

    Tool::new(
        definition.name.clone(),
        definition.description.clone(),
        Arc::new(schema),
    )
}

impl ServerHandler for AutobahnServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "autobahn-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Live German autobahn traffic data: warnings, road closures and EV charging \
                 stations, fetched from the public verkehr.autobahn.de API."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self.tools.definitions().iter().map(to_mcp_tool).collect();

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name.to_string();
        if !self.tools.contains(&name) {
            return Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", name),
                None,
            ));
        }

        let input = request
            .arguments
            .map(JsonValue::Object)
            .unwrap_or_else(|| JsonValue::Object(Default::default()));

        debug!(tool = %name, "Dispatching tool call");

        match self.tools.execute(&name, input).await {
            Ok(result) if result.is_error => {
                Ok(CallToolResult::error(vec![Content::text(result.output)]))
            }
            Ok(result) => Ok(CallToolResult::success(vec![Content::text(result.output)])),
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}
