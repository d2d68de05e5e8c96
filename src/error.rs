use thiserror::Error;

/// Boxed cause carried by client-side failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = MapsError> = std::result::Result<T, E>;

/// Failures surfaced by the token exchange, the gateway and request inputs.
#[derive(Debug, Error)]
pub enum MapsError {
    /// The Maps Server API answered with a non-success status.
    #[error("Apple Maps API request failed for {operation} (status {status})")]
    Api {
        operation: &'static str,
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// Transport, decoding or token format fault on our side.
    #[error("Apple Maps request failed for {operation}")]
    Client {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MapsError {
    pub fn api(operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        MapsError::Api { operation, status, body: body.into() }
    }

    pub fn client(operation: &'static str, cause: impl Into<BoxError>) -> Self {
        MapsError::Client { operation, source: cause.into() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        MapsError::InvalidInput(message.into())
    }

    /// Operation name the failure belongs to, `None` for input validation.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            MapsError::Api { operation, .. } | MapsError::Client { operation, .. } => Some(*operation),
            MapsError::InvalidInput(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            MapsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match self {
            MapsError::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn api_error_keeps_status_and_body() {
        let err = MapsError::api("token", 401, "unauthorized");
        assert_eq!(err.operation(), Some("token"));
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.response_body(), Some("unauthorized"));
        assert_eq!(err.to_string(), "Apple Maps API request failed for token (status 401)");
    }

    #[test]
    fn client_error_wraps_anyhow_cause() {
        let err = MapsError::client("search", anyhow!("connection reset"));
        assert_eq!(err.operation(), Some("search"));
        assert!(err.status().is_none());
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "connection reset");
    }
}
