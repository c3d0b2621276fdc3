pub mod email;
pub mod user_password;

pub use email::Email;
pub use user_password::{RawPassword, UserPassword};
