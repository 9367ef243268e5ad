//! A stand-in for the Trakt API that speaks the same wire contract.
//!
//! Every route is `GET /<segments>.json`. Requests must carry
//! `trakt-api-version: 2` and the configured `trakt-api-key`; error responses
//! are JSON objects with an `error` field, like the real service.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

pub const DEFAULT_API_KEY: &str = "mock-key";

/// What the server answers for a given path.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// Served with 200 and the value as the JSON body.
    Json(Value),
    /// Served verbatim, for exercising odd statuses and broken bodies.
    Raw { status: StatusCode, body: Vec<u8> },
}

/// Server behaviour: accepted key, fixtures keyed by path without the
/// `.json` suffix (`"shows/trending"`), and a maintenance switch.
#[derive(Clone, Debug)]
pub struct MockApi {
    api_key: String,
    fixtures: HashMap<String, Fixture>,
    maintenance: bool,
}

impl MockApi {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            fixtures: HashMap::new(),
            maintenance: false,
        }
    }

    /// A server preloaded with a few catalog endpoints.
    pub fn seeded(api_key: &str) -> Self {
        Self::new(api_key)
            .with_fixture(
                "shows/trending",
                Fixture::Json(json!([
                    {"watchers": 541, "show": {"title": "Breaking Bad", "year": 2008}},
                    {"watchers": 432, "show": {"title": "The Walking Dead", "year": 2010}},
                ])),
            )
            .with_fixture(
                "movies/popular",
                Fixture::Json(json!([
                    {"title": "The Dark Knight", "year": 2008},
                    {"title": "Fight Club", "year": 1999},
                    {"title": "Pulp Fiction", "year": 1994},
                ])),
            )
            .with_fixture(
                "shows/breaking-bad",
                Fixture::Json(json!({
                    "title": "Breaking Bad",
                    "year": 2008,
                    "ids": {"trakt": 1, "slug": "breaking-bad"},
                })),
            )
    }

    pub fn with_fixture(mut self, path: &str, fixture: Fixture) -> Self {
        self.fixtures.insert(path.trim_matches('/').to_string(), fixture);
        self
    }

    /// Answer every authorised request with 503.
    pub fn under_maintenance(mut self) -> Self {
        self.maintenance = true;
        self
    }
}

pub fn app() -> Router {
    router(MockApi::seeded(DEFAULT_API_KEY))
}

pub fn router(api: MockApi) -> Router {
    Router::new()
        .route("/{*path}", get(dispatch))
        .with_state(Arc::new(api))
}

pub async fn serve(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, router(api)).await
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"status": "failure", "error": message}))).into_response()
}

async fn dispatch(
    State(api): State<Arc<MockApi>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    if header(&headers, "trakt-api-version") != Some("2") {
        tracing::warn!(%path, "rejecting request with unsupported api version");
        return error(StatusCode::BAD_REQUEST, "unsupported api version");
    }
    if header(&headers, "trakt-api-key") != Some(api.api_key.as_str()) {
        tracing::warn!(%path, "rejecting request with invalid api key");
        return error(StatusCode::UNAUTHORIZED, "invalid api key");
    }
    if api.maintenance {
        return error(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance");
    }

    let Some(method) = path.strip_suffix(".json") else {
        return error(StatusCode::NOT_FOUND, "unsupported format");
    };
    match api.fixtures.get(method) {
        Some(Fixture::Json(value)) => {
            tracing::debug!(method, "serving fixture");
            (StatusCode::OK, Json(value.clone())).into_response()
        }
        Some(Fixture::Raw { status, body }) => (*status, body.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("unknown method {method}")),
    }
}
