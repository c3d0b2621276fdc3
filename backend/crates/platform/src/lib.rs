//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Bearer token transport (Authorization header parsing)

pub mod bearer;
pub mod password;
