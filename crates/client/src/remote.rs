use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use unipos_store::UserView;

/// Failure talking to the API. Both transport failures and non-2xx replies
/// count: either way the caller did not get an authoritative answer.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the request with status {0}")]
    Rejected(StatusCode),
}

/// Successful reply from an account update: the authoritative user record,
/// plus a fresh token when the server re-issued one.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserView>,
}

/// Thin HTTP client for the API.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// `PUT /users/{id}` with the cached bearer token, if any.
    pub async fn update_user(
        &self,
        token: Option<&str>,
        user: &UserView,
    ) -> Result<AuthPayload, RemoteError> {
        let mut req = self
            .http
            .put(format!("{}/users/{}", self.base_url, user.id))
            .json(user);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let res = req.send().await?;
        if !res.status().is_success() {
            return Err(RemoteError::Rejected(res.status()));
        }
        Ok(res.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_the_base_url() {
        let api = RemoteApi::new("http://localhost:8080//");
        assert_eq!(api.base_url, "http://localhost:8080");
    }

    #[test]
    fn payload_tolerates_missing_token_and_user() {
        let payload: AuthPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.token.is_none());
        assert!(payload.user.is_none());
    }
}
