//! `unipos-client` — client-side session manager.
//!
//! Caches the current identity and token the way the browser client does
//! (two keys in persistent storage), talks to the API for account updates,
//! and degrades to an optimistic local echo when the service is unreachable.

pub mod remote;
pub mod session;
pub mod storage;

pub use remote::{AuthPayload, RemoteApi, RemoteError};
pub use session::{ClientError, Session, UpdateOutcome};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
