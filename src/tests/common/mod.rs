// src/tests/common/mod.rs
pub use serde_json::json;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::cache::access_token::AccessToken;
use crate::error::{MapsError, Result};
use crate::sources::exchange::ExchangeToken;

/// Fixed start instant for clock-driven tests.
pub fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap()
}

/// Unsigned JWT whose payload carries `exp`. The signature is never checked.
pub fn jwt_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "ES256", "kid": "TEST", "typ": "JWT"}).to_string());
    let payload = URL_SAFE_NO_PAD.encode(json!({"iss": "maps-client-tests", "exp": exp}).to_string());
    format!("{}.{}.signature", header, payload)
}

/// Body of a successful `GET /v1/token`.
pub fn token_response_body(access_token: &str, expires_in_seconds: i64) -> String {
    json!({"accessToken": access_token, "expiresInSeconds": expires_in_seconds}).to_string()
}

pub fn access_token(name: &str, expires_at: DateTime<Utc>) -> AccessToken {
    AccessToken::new(name.to_owned(), expires_at)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub enum Outcome {
    Issue(AccessToken),
    Reject(u16),
}

/// Exchanger that replays scripted outcomes and counts calls.
pub struct ScriptedExchanger {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl ScriptedExchanger {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Every exchange sleeps for `delay` before answering, widening race windows.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn push(&self, outcome: Outcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

impl ExchangeToken for ScriptedExchanger {
    async fn exchange(&self) -> Result<AccessToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.outcomes.lock().unwrap().pop_front();
        match next {
            Some(Outcome::Issue(token)) => Ok(token),
            Some(Outcome::Reject(status)) => Err(MapsError::api("token", status, "rejected")),
            None => Err(MapsError::client("token", "no scripted outcome left")),
        }
    }
}
