//! Data models for the autobahn traffic API
//!
//! Field sets mirror the upstream response bodies. Unknown fields are
//! ignored; missing required fields are a validation failure.

use serde::{Deserialize, Serialize};

/// Geographic point of a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

/// Optional shape attached to a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<f64>>,
}

/// A traffic disruption advisory on one autobahn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub identifier: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub start_timestamp: Option<String>,
    #[serde(default)]
    pub delay_time_value: Option<String>,
    #[serde(default)]
    pub abnormal_traffic_type: Option<String>,
    #[serde(default)]
    pub average_speed: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Body of the warnings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningsResponse {
    pub warning: Vec<Warning>,
}

/// A road-closure advisory, structurally a Warning without the
/// traffic-speed fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    pub identifier: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub start_timestamp: Option<String>,
    #[serde(default)]
    pub delay_time_value: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Body of the closures endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosuresResponse {
    pub closure: Vec<Closure>,
}

/// An EV charging point along an autobahn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingStation {
    pub identifier: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: Vec<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Body of the charging-station endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingStationsResponse {
    pub electric_charging_station: Vec<ChargingStation>,
}

/// Body of the road-list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutobahnList {
    pub roads: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_warning_full_payload() {
        let body = json!({
            "identifier": "V0FSTklORw==",
            "icon": "101",
            "title": "A1 | Bremen Richtung Hamburg",
            "subtitle": "Stau",
            "description": ["Zwischen Stillhorn und Hamburg-Harburg", "stockender Verkehr"],
            "coordinate": {"lat": 53.4567, "long": 9.9876},
            "startTimestamp": "2024-05-01T08:00:00.000+0200",
            "delayTimeValue": "15",
            "abnormalTrafficType": "STATIONARY_TRAFFIC",
            "averageSpeed": "20",
            "geometry": {"type": "LineString", "coordinates": [[9.9876, 53.4567], [9.99, 53.46]]}
        });

        let warning: Warning = serde_json::from_value(body).unwrap();
        assert_eq!(warning.subtitle, "Stau");
        assert_eq!(warning.description.len(), 2);
        assert_eq!(warning.coordinate.lat, 53.4567);
        assert_eq!(warning.delay_time_value.as_deref(), Some("15"));
        assert_eq!(warning.average_speed.as_deref(), Some("20"));
        let geometry = warning.geometry.unwrap();
        assert_eq!(geometry.kind, "LineString");
        assert_eq!(geometry.coordinates[0], vec![9.9876, 53.4567]);
    }

    #[test]
    fn test_warning_optional_fields_default_to_none() {
        let body = json!({
            "identifier": "abc",
            "icon": "101",
            "title": "A7",
            "subtitle": "Baustelle",
            "description": [],
            "coordinate": {"lat": 50.0, "long": 8.0}
        });

        let warning: Warning = serde_json::from_value(body).unwrap();
        assert!(warning.start_timestamp.is_none());
        assert!(warning.delay_time_value.is_none());
        assert!(warning.abnormal_traffic_type.is_none());
        assert!(warning.average_speed.is_none());
        assert!(warning.geometry.is_none());
    }

    #[test]
    fn test_warning_missing_required_field_is_rejected() {
        // no coordinate
        let body = json!({
            "identifier": "abc",
            "icon": "101",
            "title": "A7",
            "subtitle": "Baustelle",
            "description": []
        });

        assert!(serde_json::from_value::<Warning>(body).is_err());
    }

    #[test]
    fn test_warning_unknown_fields_are_ignored() {
        let body = json!({
            "identifier": "abc",
            "icon": "101",
            "title": "A7",
            "subtitle": "Baustelle",
            "description": [],
            "coordinate": {"lat": 50.0, "long": 8.0},
            "isBlocked": "false",
            "display_type": "WARNING"
        });

        assert!(serde_json::from_value::<Warning>(body).is_ok());
    }

    #[test]
    fn test_autobahn_list() {
        let body = json!({"roads": ["A1", "A2", "A7"]});
        let list: AutobahnList = serde_json::from_value(body).unwrap();
        assert_eq!(list.roads, vec!["A1", "A2", "A7"]);

        // roads must be an array of strings
        let bad = json!({"roads": "A1"});
        assert!(serde_json::from_value::<AutobahnList>(bad).is_err());
    }

    #[test]
    fn test_wrappers_require_their_key() {
        assert!(serde_json::from_value::<WarningsResponse>(json!({"warning": []})).is_ok());
        assert!(serde_json::from_value::<WarningsResponse>(json!({})).is_err());
        assert!(serde_json::from_value::<ClosuresResponse>(json!({"closure": []})).is_ok());
        assert!(
            serde_json::from_value::<ChargingStationsResponse>(
                json!({"electric_charging_station": []})
            )
            .is_ok()
        );
        assert!(serde_json::from_value::<ChargingStationsResponse>(json!({"stations": []})).is_err());
    }
}
