//! Road closures tool

use std::sync::Arc;

use async_trait::async_trait;
use autobahn_api::{AutobahnClient, Closure};
use autobahn_core::{Error, Result, Tool, ToolResult};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{autobahn_arg_schema, format_with_unit, AutobahnInput, Location};

/// Report returned by `get_road_closures`
#[derive(Debug, Serialize)]
pub struct ClosuresReport {
    pub autobahn: String,
    pub closures_count: usize,
    pub closures: Vec<ClosureSummary>,
}

/// One projected closure
#[derive(Debug, Serialize)]
pub struct ClosureSummary {
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub location: Location,
    pub delay: Option<String>,
    pub timestamp: Option<String>,
}

impl From<Closure> for ClosureSummary {
    fn from(closure: Closure) -> Self {
        Self {
            location: Location::from(&closure.coordinate),
            title: closure.title,
            subtitle: closure.subtitle,
            description: closure.description,
            delay: format_with_unit(closure.delay_time_value, "minutes"),
            timestamp: closure.start_timestamp,
        }
    }
}

/// Fetch and project the closures for one road
pub(crate) async fn closures_report(
    client: &AutobahnClient,
    autobahn: &str,
) -> Result<ClosuresReport> {
    let closures = client
        .closures(autobahn)
        .await
        .map_err(|e| Error::Api(e.to_string()))?;

    let closures: Vec<ClosureSummary> = closures.into_iter().map(ClosureSummary::from).collect();

    Ok(ClosuresReport {
        autobahn: autobahn.to_string(),
        closures_count: closures.len(),
        closures,
    })
}

/// Reports current road closures for one autobahn
pub struct RoadClosuresTool {
    client: Arc<AutobahnClient>,
}

impl RoadClosuresTool {
    pub fn new(client: Arc<AutobahnClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for RoadClosuresTool {
    fn name(&self) -> &str {
        "get_road_closures"
    }

    fn description(&self) -> &str {
        "Get current road closures for a specific autobahn."
    }

    fn input_schema(&self) -> JsonValue {
        autobahn_arg_schema()
    }

    async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
        let input: AutobahnInput = serde_json::from_value(input)
            .map_err(|e| Error::ToolExecution(format!("Invalid input parameters: {}", e)))?;

        let report = closures_report(&self.client, &input.autobahn).await?;
        Ok(ToolResult::success(serde_json::to_string_pretty(&report)?))
    }
}
