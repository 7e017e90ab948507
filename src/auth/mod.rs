//! User registry and authentication.

pub mod registry;
pub mod types;

pub use registry::{login, signup, AuthError};
pub use types::User;
