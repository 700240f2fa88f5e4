//! Token decoding for assertions.
//!
//! Verification is out of scope for `session-token` itself; tests still need
//! to read back what was signed.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use session_token::SessionClaims;

/// Verify the signature of `token` with `secret` and return its claims.
///
/// `exp` is NOT checked against the wall clock so that tokens issued at
/// [`TEST_NOW`](crate::fixtures::TEST_NOW) remain decodable.
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<SessionClaims<serde_json::Value>, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let data = decode::<SessionClaims<serde_json::Value>>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
