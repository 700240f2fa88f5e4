//! Issuer configuration loaded once at process startup.
//!
//! The signing secret is wrapped in [`SecretString`] so that `{:?}` on the
//! config (or on anything that embeds it) never prints the key material.
//! Neither value is validated here: an absent or empty secret and a malformed
//! expiry are reported by [`TokenIssuer`](crate::issuer::TokenIssuer) when a
//! token is actually signed.

use secrecy::SecretString;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

pub use secrecy::ExposeSecret;

/// Environment variable holding the HMAC signing secret.
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Environment variable holding the token lifetime (e.g. `"7d"`, `"1h"`).
pub const JWT_EXPIRES_IN_VAR: &str = "JWT_EXPIRES_IN";

/// Token lifetime used when `JWT_EXPIRES_IN` is unset.
pub const DEFAULT_EXPIRES_IN: &str = "7d";

#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared HMAC secret. `None` when the variable was not set at all.
    pub secret: Option<SecretString>,
    /// Raw lifetime string, parsed at signing time.
    pub expires_in: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not valid UTF-8")]
    NotUnicode(String),
}

impl TokenConfig {
    /// Build a config from explicit values.
    #[must_use]
    pub fn new(secret: impl Into<String>, expires_in: impl Into<String>) -> Self {
        Self {
            secret: Some(SecretString::from(secret.into())),
            expires_in: expires_in.into(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotUnicode`] if a variable is set but is not
    /// valid UTF-8. Unset variables are not errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for name in [JWT_SECRET_VAR, JWT_EXPIRES_IN_VAR] {
            match env::var(name) {
                Ok(value) => {
                    vars.insert(name.to_string(), value);
                }
                Err(env::VarError::NotPresent) => {}
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(ConfigError::NotUnicode(name.to_string()));
                }
            }
        }
        Ok(Self::from_vars(&vars))
    }

    /// Load configuration from a HashMap (for testing)
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let secret = vars
            .get(JWT_SECRET_VAR)
            .map(|s| SecretString::from(s.clone()));

        let expires_in = vars
            .get(JWT_EXPIRES_IN_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_EXPIRES_IN.to_string());

        tracing::debug!(
            target: "session_token.config",
            secret_present = secret.is_some(),
            expires_in = %expires_in,
            "Token configuration loaded"
        );

        TokenConfig { secret, expires_in }
    }
}
