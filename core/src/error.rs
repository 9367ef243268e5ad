//! Error types for the Trakt client.
//!
//! # Design
//! `ApiError` covers everything the client itself decides is a failure: a
//! missing key, an error status, or a body that is not JSON. Transport
//! faults are not part of that taxonomy; `Error` carries them through in
//! their original type.

/// Failures detected by `TraktClient` while building a request or reading a
/// response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// `get` was called before an API key was set. No request was sent.
    #[error("The request API key is unset.")]
    MissingApiKey,

    /// 401: the key was rejected.
    #[error("{0}")]
    Authorization(String),

    /// 404: the method does not exist.
    #[error("{0}")]
    UnknownMethod(String),

    /// 503: the API is down for maintenance or overloaded.
    #[error("{0}")]
    Availability(String),

    /// The body was not valid JSON, whatever the status.
    #[error("Unable to parse response: {body}")]
    UnparsableResponse { body: String },

    /// A non-200 status outside the known set, with a JSON body.
    #[error("Unrecognized status code ({status}): {body}")]
    UnrecognizedStatus { status: u16, body: String },
}

impl ApiError {
    /// HTTP status for the kinds that are derived from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authorization(_) => Some(401),
            ApiError::UnknownMethod(_) => Some(404),
            ApiError::Availability(_) => Some(503),
            ApiError::UnrecognizedStatus { status, .. } => Some(*status),
            ApiError::MissingApiKey | ApiError::UnparsableResponse { .. } => None,
        }
    }
}

/// Outcome of a failed `TraktClient::get`.
#[derive(Debug, thiserror::Error)]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The transport could not produce a response. Passed through as-is.
    #[error("transport failure: {0}")]
    Transport(#[source] E),
}

impl<E> Error<E>
where
    E: std::error::Error + 'static,
{
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            Error::Transport(_) => None,
        }
    }

    pub fn into_transport(self) -> Option<E> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Api(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_wording() {
        assert_eq!(ApiError::MissingApiKey.to_string(), "The request API key is unset.");
        assert_eq!(
            ApiError::Authorization("authorization mock".to_string()).to_string(),
            "authorization mock"
        );
        assert_eq!(
            ApiError::UnparsableResponse { body: "mock body".to_string() }.to_string(),
            "Unable to parse response: mock body"
        );
        assert_eq!(
            ApiError::UnrecognizedStatus { status: 900, body: "{}".to_string() }.to_string(),
            "Unrecognized status code (900): {}"
        );
    }

    #[test]
    fn status_is_reported_for_status_kinds() {
        assert_eq!(ApiError::Availability(String::new()).status(), Some(503));
        assert_eq!(
            ApiError::UnrecognizedStatus { status: 418, body: String::new() }.status(),
            Some(418)
        );
        assert_eq!(ApiError::MissingApiKey.status(), None);
    }

    #[test]
    fn transport_error_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: Error<std::io::Error> = Error::Transport(io);
        assert!(err.api().is_none());
        assert!(std::error::Error::source(&err).is_some());
        let io = err.into_transport().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
