//! `unipos-core` — shared domain primitives (errors, money).
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use money::Money;
