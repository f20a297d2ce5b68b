//! Configuration management
//!
//! Configuration is read from environment variables with built-in
//! defaults. There is no configuration file.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default base endpoint of the public autobahn traffic API
fn default_base_url() -> String {
    "https://verkehr.autobahn.de/o/autobahn".to_string()
}

/// Main configuration for the autobahn MCP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the autobahn traffic API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `AUTOBAHN_BASE_URL` - overrides the API base endpoint
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("AUTOBAHN_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(default_base_url);

        Ok(Self { base_url })
    }
}
