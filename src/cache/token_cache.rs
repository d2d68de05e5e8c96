use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::access_token::AccessToken;
use crate::error::Result;
use crate::helpers::time::{Clock, SystemClock};
use crate::sources::exchange::{ExchangeToken, TokenExchanger};
use crate::utils::constants::ACCESS_TOKEN_GRACE_PERIOD;

/// Single-slot access token cache.
///
/// Readers take the fast path through the shared read lock. When the slot is
/// empty or the token is inside the grace window, callers serialize on
/// `refresh_lock`; the first one performs the exchange and publishes the new
/// token, the others find it on re-check and return without a network call.
/// A failed exchange leaves the slot untouched.
///
/// Share one instance through `Arc<TokenCache>`.
pub struct TokenCache<E = TokenExchanger, C = SystemClock> {
    exchanger: E,
    clock: C,
    grace_period: Duration,
    slot: RwLock<Option<Arc<AccessToken>>>,
    refresh_lock: Mutex<()>,
}

impl TokenCache {
    /// Cache backed by the HTTP token exchange and the system clock.
    pub fn from_credential(
        client: Client,
        api_url: &str,
        auth_token: String,
        origin: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self::new(
            TokenExchanger::new(client, api_url, auth_token, origin, timeout),
            SystemClock,
        )
    }

    pub fn origin(&self) -> Option<&str> {
        self.exchanger.origin()
    }
}

impl<E, C> TokenCache<E, C>
where
    E: ExchangeToken,
    C: Clock,
{
    pub fn new(exchanger: E, clock: C) -> Self {
        Self {
            exchanger,
            clock,
            grace_period: ACCESS_TOKEN_GRACE_PERIOD,
            slot: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Return a usable access token, refreshing it first when needed.
    pub async fn get_access_token(&self) -> Result<String> {
        if let Some(token) = self.usable().await {
            return Ok(token.token.clone());
        }

        let _guard = self.refresh_lock.lock().await;

        // another caller may have refreshed while we waited for the lock
        if let Some(token) = self.usable().await {
            debug!(expires_at = %token.expires_at, "access token refreshed by concurrent caller");
            return Ok(token.token.clone());
        }

        let token = Arc::new(self.exchanger.exchange().await?);
        *self.slot.write().await = Some(token.clone());
        info!(expires_at = %token.expires_at, "access token refreshed");

        Ok(token.token.clone())
    }

    /// Current slot contents, expiring or not.
    pub async fn cached(&self) -> Option<Arc<AccessToken>> {
        self.slot.read().await.clone()
    }

    async fn usable(&self) -> Option<Arc<AccessToken>> {
        let now = self.clock.now();
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|token| !token.is_expiring(now, self.grace_period))
            .cloned()
    }
}
