//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for session tokens.

use crate::decode::decode_token;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// Custom assertions for issued tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_user_id(TEST_SECRET, "user123")
///     .assert_lifetime(TEST_SECRET, 3600);
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a three-part HS256 JWT
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token verifies with `secret` and carries `user_id`
    fn assert_user_id(&self, secret: &str, user_id: impl Into<serde_json::Value>) -> &Self;

    /// Assert that `exp - iat` equals `seconds`
    fn assert_lifetime(&self, secret: &str, seconds: i64) -> &Self;

    /// Assert that the token was issued within `tolerance` seconds of now
    fn assert_issued_recently(&self, secret: &str, tolerance: i64) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        let parts: Vec<_> = self.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "JWT must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );
        assert!(
            parts.iter().all(|p| !p.is_empty()),
            "JWT parts must be non-empty"
        );

        let header_bytes = URL_SAFE_NO_PAD
            .decode(parts[0])
            .expect("Failed to base64 decode JWT header");
        let header: JwtHeader =
            serde_json::from_slice(&header_bytes).expect("Failed to parse JWT header JSON");

        assert_eq!(header.alg, "HS256", "Expected HS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        self
    }

    fn assert_user_id(&self, secret: &str, user_id: impl Into<serde_json::Value>) -> &Self {
        let claims = decode_token(self, secret).expect("Token should verify with secret");
        assert_eq!(claims.user_id, user_id.into(), "userId claim mismatch");
        self
    }

    fn assert_lifetime(&self, secret: &str, seconds: i64) -> &Self {
        let claims = decode_token(self, secret).expect("Token should verify with secret");
        assert_eq!(
            claims.lifetime_secs(),
            seconds,
            "Expected token lifetime {seconds}s, got {}s",
            claims.lifetime_secs()
        );
        self
    }

    fn assert_issued_recently(&self, secret: &str, tolerance: i64) -> &Self {
        let claims = decode_token(self, secret).expect("Token should verify with secret");
        let now = chrono::Utc::now().timestamp();
        assert!(
            (now - claims.iat).abs() <= tolerance,
            "Token iat {} is more than {tolerance}s from now ({now})",
            claims.iat
        );
        self
    }
}
