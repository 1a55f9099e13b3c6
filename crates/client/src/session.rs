use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use thiserror::Error;

use unipos_store::UserView;

use crate::remote::{RemoteApi, RemoteError};
use crate::storage::{PENDING_KEY, SessionStore, TOKEN_KEY, USER_KEY};

#[derive(Debug, Error)]
pub enum ClientError {
    /// No cached session to operate on.
    #[error("no active session")]
    NoSession,

    /// Cached session state is not parseable. Log out and back in.
    #[error("cached session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// How an account update was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The server accepted the change; cached state is authoritative.
    Remote(UserView),
    /// The server was unreachable; the change is cached locally and will be
    /// replayed by [`Session::reconcile`]. Stale fields (role, permissions)
    /// may diverge from the server until then.
    LocalEcho(UserView),
}

impl UpdateOutcome {
    pub fn user(&self) -> &UserView {
        match self {
            Self::Remote(u) | Self::LocalEcho(u) => u,
        }
    }
}

/// Client session: a cached identity plus the machinery to keep it in sync
/// with the server.
///
/// Mirrors the browser client's behavior, local storage keys included. The
/// notable contract is [`Session::update_user`]: when the server cannot be
/// reached, the update is applied locally anyway so the UI stays responsive,
/// and a pending flag marks the session for later replay.
pub struct Session {
    remote: RemoteApi,
    store: Box<dyn SessionStore>,
}

impl Session {
    pub fn new(remote: RemoteApi, store: Box<dyn SessionStore>) -> Self {
        Self { remote, store }
    }

    /// The cached user, if a prior session survives in storage.
    pub fn restore(&self) -> Option<UserView> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("discarding corrupt cached user: {e}");
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// True when a local-echo update is still waiting to reach the server.
    pub fn has_pending_echo(&self) -> bool {
        self.store.get(PENDING_KEY).is_some()
    }

    /// Cache a fresh token + user after authenticating against the API.
    pub fn login(&self, token: &str, user: &UserView) -> Result<(), ClientError> {
        self.store.put(TOKEN_KEY, token);
        self.store.put(USER_KEY, &serde_json::to_string(user)?);
        self.store.remove(PENDING_KEY);
        Ok(())
    }

    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.store.remove(PENDING_KEY);
    }

    /// Push an account update to the server, falling back to a local echo
    /// when it cannot be reached.
    ///
    /// On success the server's record (and any re-issued token) replaces the
    /// cache. On failure the new state is cached as-is; if no token exists
    /// yet, a placeholder is minted from the visible fields so the rest of
    /// the client keeps working offline. The placeholder is not a signed
    /// credential and the server will reject it.
    pub async fn update_user(&self, user: UserView) -> Result<UpdateOutcome, ClientError> {
        let token = self.token();
        match self.remote.update_user(token.as_deref(), &user).await {
            Ok(payload) => {
                if let Some(token) = payload.token {
                    self.store.put(TOKEN_KEY, &token);
                }
                let authoritative = payload.user.unwrap_or(user);
                self.store
                    .put(USER_KEY, &serde_json::to_string(&authoritative)?);
                self.store.remove(PENDING_KEY);
                Ok(UpdateOutcome::Remote(authoritative))
            }
            Err(e) => {
                tracing::warn!("server unreachable, applying update locally: {e}");
                self.store.put(USER_KEY, &serde_json::to_string(&user)?);
                if token.is_none() {
                    self.store.put(TOKEN_KEY, &placeholder_token(&user));
                }
                self.store.put(PENDING_KEY, "true");
                Ok(UpdateOutcome::LocalEcho(user))
            }
        }
    }

    /// Replay a pending local-echo update now that connectivity may be back.
    ///
    /// Returns `Ok(true)` when a pending update was pushed, `Ok(false)` when
    /// there was nothing to do. On failure the pending flag stays set so the
    /// next call tries again.
    pub async fn reconcile(&self) -> Result<bool, ClientError> {
        if !self.has_pending_echo() {
            return Ok(false);
        }
        let user = self.restore().ok_or(ClientError::NoSession)?;

        let payload = self.remote.update_user(self.token().as_deref(), &user).await?;
        if let Some(token) = payload.token {
            self.store.put(TOKEN_KEY, &token);
        }
        if let Some(user) = payload.user {
            self.store.put(USER_KEY, &serde_json::to_string(&user)?);
        }
        self.store.remove(PENDING_KEY);
        tracing::info!("replayed pending account update for user {}", user.id);
        Ok(true)
    }
}

/// Unsigned stand-in token for offline sessions: base64 of the claims the
/// client can see. Replaced by a real token on the next successful login or
/// reconcile.
fn placeholder_token(user: &UserView) -> String {
    let claims = json!({
        "id": user.id,
        "email": user.email,
        "role": user.role,
    });
    BASE64.encode(claims.to_string())
}
