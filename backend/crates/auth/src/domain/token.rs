//! Token Service
//!
//! Stateless sliding-session tokens. Every token is a signed HS256 JWT
//! carrying `{sub, iat, exp}` and nothing else; the server keeps no
//! session state, so issuing and verifying are pure functions of the
//! signing secret, the subject, and the clock.
//!
//! ## Rotation protocol
//! A client logs in and receives its first token (`issue`). Every
//! authenticated request is verified and answered with a fresh token
//! (`rotate`, minted after `verify` succeeds), which the client stores in
//! place of the old one. Along one such chain the decoded `iat` values
//! are non-decreasing, because each rotation stamps the current clock and
//! the clock has already passed the previous stamp.
//!
//! Rotation does not revoke: a token stays valid until its own `exp`,
//! so two requests racing with the same token both succeed and both get
//! a (possibly identically stamped) successor. Both successors are
//! honored until they expire.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// JWT payload
///
/// `sub` is the user UUID in string form; `iat`/`exp` are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Result of a successful verification
///
/// Carries the decoded timestamps so callers (and tests) can observe the
/// issuance chain, not just the subject.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    /// Subject identity the token was minted for
    pub subject: UserId,
    /// `iat` claim (unix seconds)
    pub issued_at: i64,
    /// `exp` claim (unix seconds)
    pub expires_at: i64,
}

/// Issues, verifies, and rotates session tokens
///
/// Constructed from an explicit secret and lifetime (see
/// [`crate::application::config::AuthConfig`]); there is no process-wide
/// key, so tests run with isolated secrets.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime_secs: i64,
    validation: Validation,
}

impl TokenService {
    /// Create a token service for the given secret and token lifetime
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied clock in
        // `verify_at`, not against jsonwebtoken's internal wall clock.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime_secs: lifetime.as_secs() as i64,
            validation,
        }
    }

    /// Mint a token for `subject` stamped with the current clock
    pub fn issue(&self, subject: &UserId) -> AuthResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Mint a token for `subject` stamped with an explicit clock
    pub fn issue_at(&self, subject: &UserId, now: DateTime<Utc>) -> AuthResult<String> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + self.lifetime_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token against the current clock
    pub fn verify(&self, token: &str) -> AuthResult<VerifiedToken> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit clock
    ///
    /// Failure modes, in check order:
    /// - unparseable token or bad signature: [`AuthError::MalformedToken`]
    /// - `now` past the encoded `exp`: [`AuthError::ExpiredToken`]
    /// - `sub` that is not a UUID: [`AuthError::MalformedToken`]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<VerifiedToken> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AuthError::MalformedToken)?;

        if now.timestamp() > data.claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        let subject =
            UserId::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedToken)?;

        Ok(VerifiedToken {
            subject,
            issued_at: data.claims.iat,
            expires_at: data.claims.exp,
        })
    }

    /// Mint the successor token after a successful verification
    ///
    /// Identical to [`TokenService::issue`]; the separate name marks the
    /// protocol step. Called once per authenticated request, never more.
    pub fn rotate(&self, subject: &UserId) -> AuthResult<String> {
        self.issue(subject)
    }
}
