//! User Entity
//!
//! A user account: profile fields plus the stored credential hash. The
//! hash is an opaque [`UserPassword`]; plaintext never reaches this
//! entity.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_object::{email::Email, user_password::UserPassword};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier; referenced by posts, never embedded
    pub user_id: UserId,
    /// Login email (unique)
    pub email: Email,
    /// Argon2id credential hash
    pub password_hash: UserPassword,
    /// First name (display)
    pub first_name: String,
    /// Last name (display)
    pub last_name: String,
    /// Date of birth (optional profile field)
    pub date_of_birth: Option<NaiveDate>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        email: Email,
        password_hash: UserPassword,
        first_name: String,
        last_name: String,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            first_name,
            last_name,
            date_of_birth,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Full name for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
