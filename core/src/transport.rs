//! Default network transport backed by `ureq`.

use tracing::trace;

use crate::http::{HttpRequest, HttpResponse, HttpTransport};

/// Blocking transport used by `TraktClient::new`.
///
/// The wrapped agent is built with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data for the client to interpret. Bodies are read
/// as bytes with no size cap unless one is set with `with_body_limit`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::from_agent(agent)
    }

    /// Use a caller-configured agent (timeouts, proxy, TLS).
    ///
    /// The agent should have `http_status_as_error(false)`; otherwise error
    /// statuses surface as transport faults instead of `ApiError`s.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            body_limit: u64::MAX,
        }
    }

    /// Fail with `ureq::Error::BodyExceedsLimit` once a body passes `bytes`.
    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.body_limit = bytes;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    type Error = ureq::Error;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_vec()?;
        trace!(status, bytes = body.len(), "ureq response received");

        Ok(HttpResponse { status, body })
    }
}
