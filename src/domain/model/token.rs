use serde::{Deserialize, Serialize};

/// Body of `GET /v1/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    /// Reported lifetime. Not used for expiry decisions.
    #[serde(default, deserialize_with = "super::serde_helpers::lenient")]
    pub expires_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, deserialize_with = "super::serde_helpers::non_null_vec")]
    pub details: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorResponse,
}

impl ErrorResponse {
    /// Reads an error body, bare or wrapped in `{"error": {...}}`.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .or_else(|_| serde_json::from_str::<ErrorResponse>(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_defaults_expires_in() {
        let response: TokenResponse = serde_json::from_str(r#"{"accessToken": "abc"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.expires_in_seconds, None);
    }

    #[test]
    fn token_response_tolerates_odd_expires_in() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"accessToken": "abc", "expiresInSeconds": 1799.5}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.expires_in_seconds, None);

        let response: TokenResponse =
            serde_json::from_str(r#"{"accessToken": "abc", "expiresInSeconds": 1800}"#).unwrap();
        assert_eq!(response.expires_in_seconds, Some(1800));
    }

    #[test]
    fn error_response_bare_and_wrapped() {
        let wrapped = ErrorResponse::from_body(r#"{"error": {"message": "Not Authorized", "details": ["x", null]}}"#);
        assert_eq!(wrapped.unwrap().details, vec!["x"]);

        let bare = ErrorResponse::from_body(r#"{"message": "Invalid query"}"#).unwrap();
        assert_eq!(bare.message, "Invalid query");
        assert!(bare.details.is_empty());

        assert!(ErrorResponse::from_body("<html>").is_none());
    }
}
