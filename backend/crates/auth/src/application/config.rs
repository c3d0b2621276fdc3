//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret and
//! token lifetime live here as an explicit struct, constructed once in
//! the binary and passed down; nothing reads process-wide state.

use std::time::Duration;

use crate::domain::token::TokenService;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HS256 token signing
    pub token_secret: Vec<u8>,
    /// Fixed lifetime of every issued token (10 minutes)
    pub token_lifetime: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_lifetime: Duration::from_secs(10 * 60), // 10 minutes
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token lifetime in seconds
    pub fn token_lifetime_secs(&self) -> i64 {
        self.token_lifetime.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the token service this configuration describes
    pub fn token_service(&self) -> TokenService {
        TokenService::new(&self.token_secret, self.token_lifetime)
    }
}
