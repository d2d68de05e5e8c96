use std::time::Duration;

use chrono::{DateTime, Utc};

/// One issued bearer token. Replaced as a whole on refresh, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    /// Instant from which the token is treated as expiring.
    pub fn refresh_at(&self, grace_period: Duration) -> DateTime<Utc> {
        let grace = chrono::Duration::from_std(grace_period).unwrap_or(chrono::Duration::MAX);
        self.expires_at
            .checked_sub_signed(grace)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// True once `now` reached `expires_at - grace_period`.
    pub fn is_expiring(&self, now: DateTime<Utc>, grace_period: Duration) -> bool {
        now >= self.refresh_at(grace_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRACE: Duration = Duration::from_secs(30);

    fn token_expiring_at(ts: i64) -> AccessToken {
        AccessToken::new("abc".into(), DateTime::from_timestamp(ts, 0).unwrap())
    }

    #[test]
    fn valid_until_grace_window() {
        let token = token_expiring_at(1_000);
        assert!(!token.is_expiring(DateTime::from_timestamp(900, 0).unwrap(), GRACE));
        assert!(!token.is_expiring(DateTime::from_timestamp(969, 0).unwrap(), GRACE));
    }

    #[test]
    fn expiring_inside_grace_window_and_after_expiry() {
        let token = token_expiring_at(1_000);
        assert!(token.is_expiring(DateTime::from_timestamp(970, 0).unwrap(), GRACE));
        assert!(token.is_expiring(DateTime::from_timestamp(999, 0).unwrap(), GRACE));
        assert!(token.is_expiring(DateTime::from_timestamp(2_000, 0).unwrap(), GRACE));
    }
}
