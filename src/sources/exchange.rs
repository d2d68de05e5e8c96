use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use http::header::{AUTHORIZATION, ORIGIN};
use http::StatusCode;
use reqwest::Client;
use tracing::{debug, warn};

use crate::cache::access_token::AccessToken;
use crate::domain::model::TokenResponse;
use crate::error::{MapsError, Result};
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::parser::jwt::extract_expiry;
use crate::utils::constants::{TOKEN_OPERATION, TOKEN_PATH};

/// Turns the long-lived authorization token into a fresh access token.
pub trait ExchangeToken: Send + Sync {
    fn exchange(&self) -> impl Future<Output = Result<AccessToken>> + Send;
}

impl<E: ExchangeToken> ExchangeToken for Arc<E> {
    async fn exchange(&self) -> Result<AccessToken> {
        (**self).exchange().await
    }
}

/// Performs `GET /v1/token` against the Maps Server API. One request per call,
/// no caching and no retries.
#[derive(Debug, Clone)]
pub struct TokenExchanger {
    client: Client,
    token_url: String,
    auth_token: String,
    origin: Option<String>,
    timeout: Duration,
}

impl TokenExchanger {
    pub fn new(
        client: Client,
        api_url: &str,
        auth_token: String,
        origin: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            token_url: format!("{}{}", api_url.trim_end_matches('/'), TOKEN_PATH),
            auth_token,
            origin,
            timeout,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    async fn request_token(&self) -> Result<AccessToken> {
        let mut request = self
            .client
            .get(&self.token_url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, format!("Bearer {}", self.auth_token));

        if let Some(origin) = &self.origin {
            request = request.header(ORIGIN, origin);
        }

        let response = request
            .send()
            .await
            .map_err(|err| MapsError::client(TOKEN_OPERATION, err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| MapsError::client(TOKEN_OPERATION, err))?;

        if status != StatusCode::OK {
            return Err(MapsError::api(
                TOKEN_OPERATION,
                status.as_u16(),
                String::from_utf8_lossy(&body),
            ));
        }

        let token_response: TokenResponse = serde_json::from_slice(&body)
            .map_err(|err| MapsError::client(TOKEN_OPERATION, err))?;
        // expiresInSeconds is informational, the JWT exp claim governs expiry
        let expires_at = extract_expiry(&token_response.access_token)
            .map_err(|err| MapsError::client(TOKEN_OPERATION, err))?;

        debug!(
            expires_at = %expires_at,
            expires_in_seconds = ?token_response.expires_in_seconds,
            "access token issued"
        );
        Ok(AccessToken::new(token_response.access_token, expires_at))
    }
}

impl ExchangeToken for TokenExchanger {
    async fn exchange(&self) -> Result<AccessToken> {
        let metrics = get_metrics();
        let start = get_instant();
        metrics.token_exchange_requests.inc();

        let result = self.request_token().await;
        let elapsed = start.elapsed().as_secs_f64();
        match &result {
            Ok(token) => {
                metrics.token_exchange_duration.with_label_values(&["ok"]).observe(elapsed);
                metrics.token_expiry_unix.set(token.expires_at.timestamp());
            }
            Err(err) => {
                let reason = match err {
                    MapsError::Api { .. } => "status",
                    _ => "client",
                };
                metrics.token_exchange_duration.with_label_values(&["error"]).observe(elapsed);
                metrics.token_exchange_failures.with_label_values(&[reason]).inc();
                warn!(error = %err, status = ?err.status(), "token exchange failed");
            }
        }
        result
    }
}
