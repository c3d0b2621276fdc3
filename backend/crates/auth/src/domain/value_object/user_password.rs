//! User Password Value Object
//!
//! Domain wrapper around `platform::password`: [`RawPassword`] is
//! validated user input (zeroized on drop), [`UserPassword`] is the
//! stored Argon2id hash. Policy failures surface as `AppError` with
//! user-facing messages.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped; no `Clone`.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with policy validation
    ///
    /// NIST SP 800-63B rules: 8..=128 Unicode code points, no control
    /// characters, NFKC normalized.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "Password must be at least {} characters (got {})",
                min, actual
            ))
            .with_action("Please choose a longer password"),

            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Stored credential hash (PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword {
    hashed: HashedPassword,
}

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self { hashed })
    }

    /// Restore from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(s)
            .map_err(|e| AppError::internal("Stored password hash is invalid").with_source(e))?;

        Ok(Self { hashed })
    }

    /// PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.hashed.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<bool> {
        self.hashed
            .verify(raw.inner(), pepper)
            .map_err(|e: PasswordHashError| {
                AppError::internal("Password verification failed").with_source(e)
            })
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[PHC]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_policy() {
        assert!(RawPassword::new("12345678".to_string()).is_ok());
        assert!(RawPassword::new("1234".to_string()).is_err());
        assert!(RawPassword::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let raw = RawPassword::new("a decent password".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        assert!(stored.verify(&raw, None).unwrap());

        let wrong = RawPassword::new("a different password".to_string()).unwrap();
        assert!(!stored.verify(&wrong, None).unwrap());
    }

    #[test]
    fn test_phc_string_restore() {
        let raw = RawPassword::new("a decent password".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_phc_string(stored.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None).unwrap());

        assert!(UserPassword::from_phc_string("garbage").is_err());
    }
}
