use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Token claims model (transport-agnostic).
///
/// This is the full set of claims UniPOS embeds in an identity assertion.
/// Verification trusts these fields as-is; they are not re-checked against
/// the credential store on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's store-assigned id.
    pub sub: u64,

    /// Email at the time of issuance.
    pub email: String,

    /// Role at the time of issuance.
    pub role: Role,

    /// Issued-at (unix seconds).
    pub iat: i64,

    /// Expiration (unix seconds).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user, valid from `now` for `ttl`.
    pub fn new(id: u64, email: impl Into<String>, role: Role, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: id,
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_window_spans_ttl() {
        let now = Utc::now();
        let c = Claims::new(7, "a@b.c", Role::Cashier, now, Duration::hours(24));
        assert_eq!(c.sub, 7);
        assert_eq!(c.exp - c.iat, 24 * 3600);
    }
}
