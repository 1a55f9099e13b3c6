//! `unipos-auth` — authentication/authorization boundary.
//!
//! Token issuance and verification, password hashing, roles and the
//! capability set. Intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod config;
pub mod password;
pub mod permissions;
pub mod roles;
pub mod token;

pub use claims::Claims;
pub use config::{AuthConfig, ConfigError};
pub use password::PasswordError;
pub use permissions::PermissionSet;
pub use roles::{Plan, Role};
pub use token::{TokenError, TokenService};
