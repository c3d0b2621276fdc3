//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
