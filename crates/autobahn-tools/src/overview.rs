//! Combined overview tool
//!
//! The only tool with internal fan-out: it composes the warnings,
//! closures, and charging-station fetches for one road. The three
//! fetches are independent, so they run concurrently; any failure
//! aborts the whole aggregate.

use std::sync::Arc;

use async_trait::async_trait;
use autobahn_api::AutobahnClient;
use autobahn_core::{Error, Result, Tool, ToolResult};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::charging::{charging_stations_report, ChargingStationSummary};
use crate::closures::{closures_report, ClosureSummary};
use crate::warnings::{warnings_report, WarningSummary};
use crate::{autobahn_arg_schema, AutobahnInput};

/// Report returned by `get_autobahn_overview`
#[derive(Debug, Serialize)]
pub struct OverviewReport {
    pub autobahn: String,
    pub summary: OverviewSummary,
    pub warnings: Vec<WarningSummary>,
    pub closures: Vec<ClosureSummary>,
    pub charging_stations: Vec<ChargingStationSummary>,
}

/// Per-category record counts of an overview
#[derive(Debug, Serialize)]
pub struct OverviewSummary {
    pub warnings: usize,
    pub closures: usize,
    pub charging_stations: usize,
}

/// Fetch all three reports for one road and merge them
pub(crate) async fn overview_report(
    client: &AutobahnClient,
    autobahn: &str,
) -> Result<OverviewReport> {
    debug!(autobahn = autobahn, "Fetching autobahn overview");

    let (warnings, closures, stations) = tokio::try_join!(
        warnings_report(client, autobahn),
        closures_report(client, autobahn),
        charging_stations_report(client, autobahn),
    )?;

    Ok(OverviewReport {
        autobahn: autobahn.to_string(),
        summary: OverviewSummary {
            warnings: warnings.warnings_count,
            closures: closures.closures_count,
            charging_stations: stations.stations_count,
        },
        warnings: warnings.warnings,
        closures: closures.closures,
        charging_stations: stations.charging_stations,
    })
}

/// Merges warnings, closures, and charging stations for one autobahn
pub struct AutobahnOverviewTool {
    client: Arc<AutobahnClient>,
}

impl AutobahnOverviewTool {
    pub fn new(client: Arc<AutobahnClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AutobahnOverviewTool {
    fn name(&self) -> &str {
        "get_autobahn_overview"
    }

    fn description(&self) -> &str {
        "Get a complete overview of an autobahn including warnings, closures, and charging stations."
    }

    fn input_schema(&self) -> JsonValue {
        autobahn_arg_schema()
    }

    async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
        let input: AutobahnInput = serde_json::from_value(input)
            .map_err(|e| Error::ToolExecution(format!("Invalid input parameters: {}", e)))?;

        let report = overview_report(&self.client, &input.autobahn).await?;
        Ok(ToolResult::success(serde_json::to_string_pretty(&report)?))
    }
}
