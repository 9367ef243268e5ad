//! The Trakt API client.
//!
//! # Design
//! `TraktClient` owns an API key, a `ClientConfig` and a transport. A call is
//! split into `build_get`, which validates the key and produces an
//! `HttpRequest`, and `parse_response`, which maps an `HttpResponse` onto a
//! `DecodedResponse` or an `ApiError`. `get` runs one transport round-trip
//! between the two; nothing is retried or cached.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{ClientConfig, API_VERSION};
use crate::error::{ApiError, Error};
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::response::DecodedResponse;
use crate::transport::UreqTransport;

/// Request parameters for `TraktClient::get`.
pub type Params = Map<String, Value>;

/// Blocking client for the Trakt API.
///
/// The API key starts empty and must be set before `get` will send anything.
/// The key is plain mutable state: share the client across threads only
/// behind your own synchronization.
#[derive(Debug, Clone)]
pub struct TraktClient<T = UreqTransport> {
    api_key: String,
    config: ClientConfig,
    transport: T,
}

impl TraktClient<UreqTransport> {
    /// Client for the public endpoint using the default ureq transport.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for TraktClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> TraktClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self::with_config(ClientConfig::default(), transport)
    }

    pub fn with_config(config: ClientConfig, transport: T) -> Self {
        Self {
            api_key: String::new(),
            config,
            transport,
        }
    }

    /// Store `key` verbatim, replacing any previous key.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// The current key; empty if none was set.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `<endpoint>/<method with '.' as '/'>.<format>`.
    pub fn request_target(&self, method: &str) -> String {
        format!(
            "{}/{}.{}",
            self.config.endpoint,
            method.replace('.', "/"),
            self.config.format
        )
    }

    /// Build the GET request for `method`.
    ///
    /// Fails with `MissingApiKey` when no key is set.
    pub fn build_get(&self, method: &str) -> Result<HttpRequest, ApiError> {
        if self.api_key.is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(HttpRequest {
            url: self.request_target(method),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("trakt-api-version".to_string(), API_VERSION.to_string()),
                ("trakt-api-key".to_string(), self.api_key.clone()),
            ],
        })
    }

    /// Interpret a response: 200 decodes the body, everything else is an
    /// error. The body is parsed before the status is inspected, so a
    /// non-JSON body is always `UnparsableResponse`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<DecodedResponse, ApiError> {
        let decoded: Value = match serde_json::from_slice(&response.body) {
            Ok(value) => value,
            Err(e) => {
                warn!(status = response.status, error = %e, "response body is not JSON");
                return Err(ApiError::UnparsableResponse {
                    body: response.text().into_owned(),
                });
            }
        };

        if response.status == 200 {
            return Ok(DecodedResponse::from(decoded));
        }

        warn!(status = response.status, "API returned an error status");
        Err(status_error(
            response.status,
            &decoded,
            response.text().into_owned(),
        ))
    }

    /// Call `method` and decode the result.
    ///
    /// `params` is accepted for forward compatibility but is not sent; the
    /// API methods in use take no query string.
    pub fn get(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<DecodedResponse, Error<T::Error>> {
        let _params = params.unwrap_or_default();
        let request = self.build_get(method)?;

        debug!(url = %request.url, "sending GET");
        let response = self.transport.get(&request).map_err(Error::Transport)?;
        debug!(status = response.status, "received response");

        Ok(self.parse_response(response)?)
    }
}

/// Map a non-200 status and its decoded body to an `ApiError`.
fn status_error(status: u16, decoded: &Value, raw: String) -> ApiError {
    let message = decoded
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);
    match status {
        401 => ApiError::Authorization(message.unwrap_or(raw)),
        404 => ApiError::UnknownMethod(message.unwrap_or(raw)),
        503 => ApiError::Availability(message.unwrap_or(raw)),
        _ => ApiError::UnrecognizedStatus { status, body: raw },
    }
}
