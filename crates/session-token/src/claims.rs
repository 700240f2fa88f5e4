//! Session token claims and the HS256 signing primitive.
//!
//! Tokens are standard three-part JWTs signed with a shared HMAC secret, so
//! any service holding `JWT_SECRET` can verify them.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm used for every session token.
pub const SESSION_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a session token.
///
/// `user_id` is serialized as `userId` and is generic so callers can use
/// string or numeric identifiers. Signing borrows it (`SessionClaims<&U>`);
/// decoding produces an owned value.
///
/// The user id is redacted in `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionClaims<U> {
    #[serde(rename = "userId")]
    pub user_id: U,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

impl<U> fmt::Debug for SessionClaims<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClaims")
            .field("user_id", &"[REDACTED]")
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish()
    }
}

impl<U> SessionClaims<U> {
    #[must_use]
    pub fn new(user_id: U, iat: i64, exp: i64) -> Self {
        Self { user_id, iat, exp }
    }

    /// Token lifetime in seconds as encoded in the claims.
    #[must_use]
    pub fn lifetime_secs(&self) -> i64 {
        self.exp - self.iat
    }
}

/// Sign claims with an HMAC secret.
///
/// # Errors
///
/// Returns the `jsonwebtoken` error if the claims cannot be serialized.
pub fn sign_session_claims<U: Serialize>(
    claims: &SessionClaims<U>,
    secret: &[u8],
) -> Result<String, jsonwebtoken::errors::Error> {
    let header = Header::new(SESSION_ALGORITHM);
    encode(&header, claims, &EncodingKey::from_secret(secret))
}
