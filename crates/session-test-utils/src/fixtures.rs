//! Deterministic configuration fixtures.

use session_token::{TokenConfig, TokenIssuer};

/// Shared secret used by every fixture.
pub const TEST_SECRET: &str = "test-secret-do-not-use-in-production";

/// Fixed issuance time (2023-11-14T22:13:20Z) for deterministic tests.
pub const TEST_NOW: i64 = 1_700_000_000;

pub const ONE_HOUR_SECS: i64 = 60 * 60;
pub const SEVEN_DAYS_SECS: i64 = 7 * 24 * ONE_HOUR_SECS;

/// Config with [`TEST_SECRET`] and the default lifetime, as if
/// `JWT_EXPIRES_IN` were unset.
pub fn test_config() -> TokenConfig {
    TokenConfig::from_vars(&[("JWT_SECRET".to_string(), TEST_SECRET.to_string())].into())
}

/// Config with [`TEST_SECRET`] and an explicit `JWT_EXPIRES_IN`.
pub fn test_config_with_expiry(expires_in: &str) -> TokenConfig {
    TokenConfig::new(TEST_SECRET, expires_in)
}

/// Config as if `JWT_SECRET` were unset.
pub fn config_without_secret() -> TokenConfig {
    TokenConfig::from_vars(&Default::default())
}

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(test_config())
}
