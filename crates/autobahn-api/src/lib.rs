//! autobahn-api: client for the German autobahn traffic API
//!
//! This crate wraps the public REST endpoint at
//! `https://verkehr.autobahn.de/o/autobahn` and validates its responses
//! into typed models.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use autobahn_api::AutobahnClient;
//!
//! let client = AutobahnClient::new("https://verkehr.autobahn.de/o/autobahn")?;
//!
//! // List all road identifiers
//! let roads = client.list_roads().await?;
//!
//! // Fetch warnings for one road
//! let warnings = client.warnings("A1").await?;
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::AutobahnClient;
pub use error::{ApiError, Result};
pub use models::{
    AutobahnList, ChargingStation, ChargingStationsResponse, Closure, ClosuresResponse,
    Coordinate, Geometry, Warning, WarningsResponse,
};
