//! autobahn-tools: MCP tools over the autobahn traffic API
//!
//! One file per tool. Every tool holds a shared [`AutobahnClient`] and
//! projects the validated API models into the simplified shapes returned
//! to the calling agent.

use std::sync::Arc;

use autobahn_api::{AutobahnClient, Coordinate};
use autobahn_core::{SchemaBuilder, ToolManager};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub mod autobahns;
pub mod charging;
pub mod closures;
pub mod overview;
pub mod warnings;

pub use autobahns::ListAutobahnsTool;
pub use charging::ChargingStationsTool;
pub use closures::RoadClosuresTool;
pub use overview::AutobahnOverviewTool;
pub use warnings::TrafficWarningsTool;

/// Register all autobahn tools with the tool manager
pub fn register_default_tools(manager: &mut ToolManager, client: Arc<AutobahnClient>) {
    manager.register(Arc::new(ListAutobahnsTool::new(Arc::clone(&client))));
    manager.register(Arc::new(TrafficWarningsTool::new(Arc::clone(&client))));
    manager.register(Arc::new(RoadClosuresTool::new(Arc::clone(&client))));
    manager.register(Arc::new(ChargingStationsTool::new(Arc::clone(&client))));
    manager.register(Arc::new(AutobahnOverviewTool::new(client)));
}

/// Input shape shared by the road-scoped tools
#[derive(Debug, Deserialize)]
pub(crate) struct AutobahnInput {
    pub autobahn: String,
}

/// Input schema shared by the road-scoped tools
pub(crate) fn autobahn_arg_schema() -> JsonValue {
    SchemaBuilder::object_schema_with_descriptions(vec![(
        "autobahn",
        "string",
        "The autobahn identifier (e.g., 'A1', 'A7', 'A99')",
        true,
    )])
}

/// Projected location of a record
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
}

impl From<&Coordinate> for Location {
    fn from(coordinate: &Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            long: coordinate.long,
        }
    }
}

/// Attach a unit suffix to an optional raw value
///
/// Empty strings count as absent, so a blank upstream field never
/// produces a dangling unit.
pub(crate) fn format_with_unit(value: Option<String>, unit: &str) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| format!("{} {}", v, unit))
}
