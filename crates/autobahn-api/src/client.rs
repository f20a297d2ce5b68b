//! HTTP client for the autobahn traffic API
//!
//! One GET per call, no retries. Non-2xx responses and schema
//! mismatches surface as distinct `ApiError` variants.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::models::{
    AutobahnList, ChargingStation, ChargingStationsResponse, Closure, ClosuresResponse, Warning,
    WarningsResponse,
};

/// Client for the autobahn traffic API
#[derive(Clone)]
pub struct AutobahnClient {
    client: Client,
    base_url: String,
}

impl AutobahnClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - Base endpoint, e.g. `https://verkehr.autobahn.de/o/autobahn`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("autobahn-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List all available road identifiers
    pub async fn list_roads(&self) -> Result<Vec<String>> {
        let url = format!("{}/", self.base_url);
        let list: AutobahnList = self.get_json(&url).await?;

        info!("Fetched {} roads", list.roads.len());
        Ok(list.roads)
    }

    /// Get current traffic warnings for one road
    pub async fn warnings(&self, autobahn: &str) -> Result<Vec<Warning>> {
        let url = format!("{}/{}/services/warning", self.base_url, autobahn);
        let body: WarningsResponse = self.get_json(&url).await?;

        info!(autobahn = autobahn, "Fetched {} warnings", body.warning.len());
        Ok(body.warning)
    }

    /// Get current road closures for one road
    pub async fn closures(&self, autobahn: &str) -> Result<Vec<Closure>> {
        let url = format!("{}/{}/services/closure", self.base_url, autobahn);
        let body: ClosuresResponse = self.get_json(&url).await?;

        info!(autobahn = autobahn, "Fetched {} closures", body.closure.len());
        Ok(body.closure)
    }

    /// Get EV charging stations along one road
    pub async fn charging_stations(&self, autobahn: &str) -> Result<Vec<ChargingStation>> {
        let url = format!(
            "{}/{}/services/electric_charging_station",
            self.base_url, autobahn
        );
        let body: ChargingStationsResponse = self.get_json(&url).await?;

        info!(
            autobahn = autobahn,
            "Fetched {} charging stations",
            body.electric_charging_station.len()
        );
        Ok(body.electric_charging_station)
    }

    /// Issue a GET and decode the body against the expected schema
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "Fetching autobahn data");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Validation {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = AutobahnClient::new("https://verkehr.autobahn.de/o/autobahn/");
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().base_url,
            "https://verkehr.autobahn.de/o/autobahn"
        );
    }

    #[tokio::test]
    async fn test_list_roads() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"roads": ["A1", "A2", "A7"]})),
            )
            .mount(&server)
            .await;

        let client = AutobahnClient::new(&server.uri()).unwrap();
        let roads = client.list_roads().await.unwrap();
        assert_eq!(roads, vec!["A1", "A2", "A7"]);
    }

    #[tokio::test]
    async fn test_warnings_hits_the_service_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/A1/services/warning"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "warning": [{
                    "identifier": "abc",
                    "icon": "101",
                    "title": "A1 | Bremen Richtung Hamburg",
                    "subtitle": "Stau",
                    "description": ["stockender Verkehr"],
                    "coordinate": {"lat": 53.4, "long": 9.9}
                }]
            })))
            .mount(&server)
            .await;

        let client = AutobahnClient::new(&server.uri()).unwrap();
        let warnings = client.warnings("A1").await.unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].title, "A1 | Bremen Richtung Hamburg");
    }

    #[tokio::test]
    async fn test_non_2xx_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/B999/services/warning"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = AutobahnClient::new(&server.uri()).unwrap();
        let err = client.warnings("B999").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_missing_required_key_is_a_validation_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/A1/services/closure"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": []})))
            .mount(&server)
            .await;

        let client = AutobahnClient::new(&server.uri()).unwrap();
        let err = client.closures("A1").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_validation_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/A1/services/electric_charging_station"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = AutobahnClient::new(&server.uri()).unwrap();
        let err = client.charging_stations("A1").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }
}
