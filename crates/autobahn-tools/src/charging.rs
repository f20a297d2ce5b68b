//! EV charging stations tool

use std::sync::Arc;

use async_trait::async_trait;
use autobahn_api::{AutobahnClient, ChargingStation};
use autobahn_core::{Error, Result, Tool, ToolResult};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{autobahn_arg_schema, AutobahnInput, Location};

/// Report returned by `get_charging_stations`
#[derive(Debug, Serialize)]
pub struct ChargingStationsReport {
    pub autobahn: String,
    pub stations_count: usize,
    pub charging_stations: Vec<ChargingStationSummary>,
}

/// One projected charging station
///
/// Stations carry no timestamp or delay fields.
#[derive(Debug, Serialize)]
pub struct ChargingStationSummary {
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub location: Location,
}

impl From<ChargingStation> for ChargingStationSummary {
    fn from(station: ChargingStation) -> Self {
        Self {
            location: Location::from(&station.coordinate),
            title: station.title,
            subtitle: station.subtitle,
            description: station.description,
        }
    }
}

/// Fetch and project the charging stations for one road
pub(crate) async fn charging_stations_report(
    client: &AutobahnClient,
    autobahn: &str,
) -> Result<ChargingStationsReport> {
    let stations = client
        .charging_stations(autobahn)
        .await
        .map_err(|e| Error::Api(e.to_string()))?;

    let charging_stations: Vec<ChargingStationSummary> = stations
        .into_iter()
        .map(ChargingStationSummary::from)
        .collect();

    Ok(ChargingStationsReport {
        autobahn: autobahn.to_string(),
        stations_count: charging_stations.len(),
        charging_stations,
    })
}

/// Reports EV charging stations along one autobahn
pub struct ChargingStationsTool {
    client: Arc<AutobahnClient>,
}

impl ChargingStationsTool {
    pub fn new(client: Arc<AutobahnClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ChargingStationsTool {
    fn name(&self) -> &str {
        "get_charging_stations"
    }

    fn description(&self) -> &str {
        "Get electric vehicle charging stations along a specific autobahn."
    }

    fn input_schema(&self) -> JsonValue {
        autobahn_arg_schema()
    }

    async fn execute(&self, input: JsonValue) -> Result<ToolResult> {
        let input: AutobahnInput = serde_json::from_value(input)
            .map_err(|e| Error::ToolExecution(format!("Invalid input parameters: {}", e)))?;

        let report = charging_stations_report(&self.client, &input.autobahn).await?;
        Ok(ToolResult::success(serde_json::to_string_pretty(&report)?))
    }
}
