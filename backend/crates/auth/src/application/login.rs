//! Login Use Case
//!
//! Verifies an email/password pair and mints the session's first token.
//!
//! Every failure along the way — unknown email, policy-rejected input,
//! non-matching hash — collapses into [`AuthError::InvalidCredentials`],
//! so clients cannot probe which emails have accounts. The log records
//! the real cause.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Authenticated identity
    pub user_id: UserId,
    /// First session token, minted by `issue` (there is no prior token
    /// to rotate from)
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    tokens: TokenService,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let tokens = config.token_service();
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = user
            .password_hash
            .verify(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            tracing::warn!(user_id = %user.user_id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        // Record last login in the background; a failure here must not
        // fail the login itself
        let repo = self.user_repo.clone();
        let user_id = user.user_id;
        tokio::spawn(async move {
            if let Err(e) = repo.record_login(&user_id, Utc::now()).await {
                tracing::warn!(error = %e, "Failed to record login time");
            }
        });

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}
