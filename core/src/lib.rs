//! Synchronous client for the Trakt media-catalog API.
//!
//! # Overview
//! `TraktClient` turns a dotted method name (`"shows.trending"`) into a GET
//! request against the API endpoint, runs it through an `HttpTransport`, and
//! decodes the JSON body into a `DecodedResponse`. Non-200 statuses become
//! typed `ApiError` values.
//!
//! # Design
//! - Request building (`build_get`) and response parsing (`parse_response`)
//!   are pure, so they can be tested without a network.
//! - `get` glues the two halves around a single transport call. Transport
//!   faults are returned untouched in `Error::Transport`.
//! - The default transport is `UreqTransport`; any type implementing
//!   `HttpTransport` can be injected instead.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;

pub use client::{Params, TraktClient};
pub use config::ClientConfig;
pub use error::{ApiError, Error};
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use response::DecodedResponse;
pub use transport::UreqTransport;
