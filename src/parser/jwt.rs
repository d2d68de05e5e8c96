use anyhow::{anyhow, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

// base64url, with or without trailing '='
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Deserialize)]
pub struct JwtClaims {
    pub exp: i64,
}

/// Decode the claims segment of a compact `header.payload.signature` token.
/// The signature is not verified.
pub fn decode_jwt_claims(token_string: &str) -> Result<JwtClaims> {
    let parts: Vec<&str> = token_string.split('.').collect();
    if parts.len() != 3 {
        return Err(anyhow!("access token is not a valid JWT: expected 3 parts, got {}", parts.len()));
    }

    let decoded = BASE64_URL
        .decode(parts[1])
        .map_err(|e| anyhow!("base64url decode error: {}", e))?;

    serde_json::from_slice::<JwtClaims>(&decoded)
        .map_err(|e| anyhow!("invalid JWT payload: {}", e))
}

/// Expiry instant taken from the `exp` claim (seconds since epoch).
pub fn extract_expiry(token_string: &str) -> Result<DateTime<Utc>> {
    let claims = decode_jwt_claims(token_string)?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0)
        .ok_or_else(|| anyhow!("JWT exp {} is out of range", claims.exp))?;
    debug!(expires_at = %expires_at, "jwt parsed successfully");
    Ok(expires_at)
}
