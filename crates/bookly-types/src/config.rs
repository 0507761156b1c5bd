//! Client configuration.
//!
//! `ClientConfig` models `~/.bookly/config.toml`. Every field has a
//! default so a missing or empty file still yields a working client.

use serde::{Deserialize, Serialize};

/// Where the booking backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for all backend requests, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
