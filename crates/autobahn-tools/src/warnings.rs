//! Traffic warnings tool

use std::sync::Arc;

use async_trait::async_trait;
use autobahn_api::{AutobahnClient, Warning};
use autobahn_core::{Error, Result, Tool, ToolResult};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{autobahn_arg_schema, format_with_unit, AutobahnInput, Location};

/// Report returned by `get_traffic_warnings`
#[derive(Debug, Serialize)]
pub struct WarningsReport {
    pub autobahn: String,
    pub warnings_count: usize,
    pub warnings: Vec<WarningSummary>,
}

/// One projected warning
#[derive(Debug, Serialize)]
pub struct WarningSummary {
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub location: Location,
    pub traffic_type: Option<String>,
    pub average_speed: Option<String>,
    pub delay: Option<String>,
    pub timestamp: Option<String>,
}

impl From<Warning> for WarningSummary {
    fn from(warning: Warning) -> Self {
        Self {
            location: Location::from(&warning.coordinate),
            title: warning.title,
            subtitle: warning.subtitle,
            description: warning.description,
            traffic_type: warning.abnormal_traffic_type,
            average_speed: format_with_unit(warning.average_speed, "km/h"),
            delay: format_with_unit(warning.delay_time_value, "minutes"),
            timestamp: warning.start_timestamp,
        }
    }
}

/// Fetch and project the warnings for one road
pub(crate) async fn warnings_report(
    client: &AutobahnClient,
    autobahn: &str,
) -> Result<WarningsReport> {
    let warnings = client
        .warnings(autobahn)
        .await
        .map_err(|e| Error::Api(e.to_string()))?;

    let warnings: Vec<WarningSummary> = warnings.into_iter().map(WarningSummary::from).collect();

    Ok(WarningsReport {
        autobahn: autobahn.to_string(),
        warnings_count: warnings.len(),
        warnings,
    })
}

/// Reports current traffic warnings for one autobahn
pub struct TrafficWarningsTool {
    client: Arc<AutobahnClient>,
}

impl TrafficWarningsTool {
    pub fn new(client: Arc<AutobahnClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TrafficWarningsTool {
    fn name(&self) -> &str {
        "get_traffic_warnings"
    }

    fn description(&self) -> &str {
        "Get current traffic warnings for a specific autobahn."
    }

    fn input_schema(&self) -> JsonValue {
        autobahn_arg_schema()
    }

    async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
        let input: AutobahnInput = serde_json::from_value(input)
            .map_err(|e| Error::ToolExecution(format!("Invalid input parameters: {}", e)))?;

        let report = warnings_report(&self.client, &input.autobahn).await?;
        Ok(ToolResult::success(serde_json::to_string_pretty(&report)?))
    }
}
