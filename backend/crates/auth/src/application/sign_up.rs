//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Maximum length of a name field
const NAME_MAX_LENGTH: usize = 100;

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let first_name = validated_name("First name", &input.first_name)?;
        let last_name = validated_name("Last name", &input.last_name)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(
            email,
            password_hash,
            first_name,
            last_name,
            input.date_of_birth,
        );

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}

/// Trim and bound-check a name field
fn validated_name(field: &str, value: &str) -> AuthResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AuthError::Validation(format!("{field} cannot be empty")));
    }

    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err(AuthError::Validation(format!(
            "{field} must be at most {NAME_MAX_LENGTH} characters"
        )));
    }

    Ok(trimmed.to_string())
}
