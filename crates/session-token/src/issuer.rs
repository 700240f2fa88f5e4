//! Session token issuance.
//!
//! [`TokenIssuer`] signs a `userId` claim with the configured HMAC secret and
//! attaches the result to a response channel as the `jwt` cookie. Signing
//! always happens first, so a failed issuance never touches the channel.
//!
//! The token lifetime comes from `JWT_EXPIRES_IN`; the cookie lifetime is the
//! fixed [`TOKEN_COOKIE_MAX_AGE_MS`](crate::directive::TOKEN_COOKIE_MAX_AGE_MS).
//! The two are not reconciled.

use crate::claims::{sign_session_claims, SessionClaims};
use crate::config::{ExposeSecret, TokenConfig};
use crate::directive::{CookieOptions, TOKEN_COOKIE_NAME};
use crate::errors::IssueError;
use crate::expiry::parse_expires_in;
use crate::sink::CookieSink;
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

/// Issues signed session tokens and transmits them as cookies.
///
/// Holds only read-only configuration, so one instance can be shared across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Sign a token for `user_id`, set it as the `jwt` cookie on `sink`, and
    /// return it.
    ///
    /// `user_id` is passed through unvalidated.
    ///
    /// # Errors
    ///
    /// - [`IssueError::MissingSecret`] if the secret is unset or empty
    /// - [`IssueError::InvalidExpiry`] if `JWT_EXPIRES_IN` cannot be parsed
    /// - [`IssueError::Signing`] if the claims cannot be encoded
    /// - [`IssueError::Channel`] if the sink rejects the cookie
    pub fn issue_token<U, S>(&self, user_id: &U, sink: &mut S) -> Result<String, IssueError>
    where
        U: Serialize + ?Sized,
        S: CookieSink + ?Sized,
    {
        self.issue_token_at(user_id, sink, Utc::now().timestamp())
    }

    /// Deterministic variant of [`TokenIssuer::issue_token`] with an explicit
    /// issuance time (Unix epoch seconds).
    ///
    /// # Errors
    ///
    /// Same as [`TokenIssuer::issue_token`].
    #[instrument(skip_all, name = "session_token.issue")]
    pub fn issue_token_at<U, S>(
        &self,
        user_id: &U,
        sink: &mut S,
        now: i64,
    ) -> Result<String, IssueError>
    where
        U: Serialize + ?Sized,
        S: CookieSink + ?Sized,
    {
        let token = self.sign_token_at(user_id, now)?;

        sink.set_cookie(TOKEN_COOKIE_NAME, &token, &CookieOptions::session())
            .map_err(|e| {
                tracing::debug!(target: "session_token.issuer", error = %e, "Cookie attachment failed");
                e
            })?;

        tracing::debug!(target: "session_token.issuer", iat = now, "Session token issued");
        Ok(token)
    }

    /// Sign a token for `user_id` without touching any response channel.
    ///
    /// # Errors
    ///
    /// - [`IssueError::MissingSecret`] if the secret is unset or empty
    /// - [`IssueError::InvalidExpiry`] if `JWT_EXPIRES_IN` cannot be parsed
    /// - [`IssueError::Signing`] if the claims cannot be encoded
    pub fn sign_token_at<U>(&self, user_id: &U, now: i64) -> Result<String, IssueError>
    where
        U: Serialize + ?Sized,
    {
        let secret = self
            .config
            .secret
            .as_ref()
            .map(|s| s.expose_secret())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                tracing::debug!(target: "session_token.issuer", "Signing secret missing or empty");
                IssueError::MissingSecret
            })?;

        let lifetime = parse_expires_in(&self.config.expires_in)?;

        let exp = now.checked_add(lifetime.num_seconds()).ok_or_else(|| {
            IssueError::InvalidExpiry(format!("{:?} overflows from {now}", self.config.expires_in))
        })?;

        let claims = SessionClaims::new(user_id, now, exp);
        sign_session_claims(&claims, secret.as_bytes()).map_err(|e| {
            tracing::debug!(target: "session_token.issuer", error = %e, "Token signing failed");
            IssueError::Signing(e.to_string())
        })
    }

    /// Overwrite the `jwt` cookie with an empty, already-expired one.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Channel`] if the sink rejects the cookie.
    #[instrument(skip_all, name = "session_token.clear")]
    pub fn clear_token<S>(&self, sink: &mut S) -> Result<(), IssueError>
    where
        S: CookieSink + ?Sized,
    {
        sink.set_cookie(TOKEN_COOKIE_NAME, "", &CookieOptions::removal())?;
        tracing::debug!(target: "session_token.issuer", "Session cookie cleared");
        Ok(())
    }
}
