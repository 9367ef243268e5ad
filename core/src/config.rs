//! Endpoint configuration for `TraktClient`.

use serde::{Deserialize, Serialize};

/// Base URL of the public API.
pub const DEFAULT_ENDPOINT: &str = "http://api.trakt.tv";

/// Response format requested from the API. Trakt only serves JSON.
pub const DEFAULT_FORMAT: &str = "json";

/// Value sent in the `trakt-api-version` header.
pub const API_VERSION: &str = "2";

/// Where requests go and which format extension they carry.
///
/// The API key is deliberately absent: it is held by the client and changed
/// with `TraktClient::set_api_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl ClientConfig {
    /// Point the client at a different base URL, e.g. a local mock server.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            format: default_format(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
