use chrono::Duration;
use thiserror::Error;

/// Environment variable holding the token-signing secret.
pub const SECRET_ENV: &str = "UNIPOS_JWT_SECRET";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{SECRET_ENV} is not set; refusing to start with a guessable signing key")]
    MissingSecret,

    #[error("signing secret must not be blank")]
    BlankSecret,
}

/// Validated authentication configuration.
///
/// There is deliberately no default secret: a missing or blank signing key is
/// a startup failure, never a silent fallback.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    secret: String,
    token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::BlankSecret);
        }
        Ok(Self {
            secret,
            token_ttl: Duration::hours(24),
        })
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SECRET_ENV) {
            Ok(secret) => Self::new(secret),
            Err(_) => Err(ConfigError::MissingSecret),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_secret_is_rejected() {
        assert_eq!(AuthConfig::new("   ").unwrap_err(), ConfigError::BlankSecret);
        assert_eq!(AuthConfig::new("").unwrap_err(), ConfigError::BlankSecret);
    }

    #[test]
    fn valid_secret_is_accepted() {
        let cfg = AuthConfig::new("test-secret").unwrap();
        assert_eq!(cfg.secret(), b"test-secret");
        assert_eq!(cfg.token_ttl(), Duration::hours(24));
    }

    #[test]
    fn ttl_is_configurable() {
        let cfg = AuthConfig::new("s").unwrap().with_token_ttl(Duration::minutes(5));
        assert_eq!(cfg.token_ttl(), Duration::minutes(5));
    }

    // No other test in this crate touches the variable, so both branches run
    // in one test to avoid ordering races.
    #[test]
    fn from_env_requires_the_secret() {
        unsafe { std::env::remove_var(SECRET_ENV) };
        assert_eq!(AuthConfig::from_env().unwrap_err(), ConfigError::MissingSecret);

        unsafe { std::env::set_var(SECRET_ENV, "from-env-secret") };
        assert_eq!(AuthConfig::from_env().unwrap().secret(), b"from-env-secret");

        unsafe { std::env::remove_var(SECRET_ENV) };
    }
}
