//! Reading the claims of a stored JWT for display. The signature is not
//! verified; the backend remains the authority on whether a token is valid.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{TaskboardError, TaskboardResult};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    pub fn subject(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.user_id.as_deref())
            .or(self.sub.as_deref())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|iat| Utc.timestamp_opt(iat, 0).single())
    }

    /// Tokens without an `exp` claim never expire locally.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| exp <= now).unwrap_or(false)
    }
}

/// What can be told about a token without asking the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenState {
    Opaque,
    Valid(TokenClaims),
    Expired(TokenClaims),
}

pub fn inspect_token(token: &str, now: DateTime<Utc>) -> TokenState {
    match decode_claims(token) {
        Ok(claims) if claims.is_expired(now) => TokenState::Expired(claims),
        Ok(claims) => TokenState::Valid(claims),
        Err(_) => TokenState::Opaque,
    }
}

pub fn decode_claims(token: &str) -> TaskboardResult<TokenClaims> {
    let mut segments = token.trim().split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(TaskboardError::InvalidInput("Token is not a JWT".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TaskboardError::InvalidInput(format!("Token payload is not base64url: {}", e)))?;

    Ok(serde_json::from_slice(&bytes)?)
}
