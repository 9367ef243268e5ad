//! HTTP request/response values and the transport seam.
//!
//! # Design
//! The client describes each call as a plain `HttpRequest` and interprets a
//! plain `HttpResponse`. Moving bytes over the wire is the job of an
//! `HttpTransport`, which the caller may supply. Only GET exists, so requests
//! carry no method or body.

use std::sync::Arc;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes: a body that is not UTF-8 is still a
/// response, and it is up to the client to reject it as unparsable.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes GET requests on behalf of `TraktClient`.
///
/// Implementations must hand back every response the server produced,
/// whatever its status. `Err` is reserved for failures where no response
/// exists at all (DNS, refused connection, timeout, broken body stream).
/// An undecodable body is not a transport failure.
pub trait HttpTransport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    type Error = T::Error;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).get(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    type Error = T::Error;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).get(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    type Error = T::Error;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).get(request)
    }
}
