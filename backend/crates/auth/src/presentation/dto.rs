//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request (POST /tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request (POST /users)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    pub user_dob: Option<NaiveDate>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub message: String,
}
