//! Cookie directive for transporting the session token.

use cookie::time::{self, OffsetDateTime};
use cookie::{Cookie, SameSite};

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE_NAME: &str = "jwt";

/// Cookie lifetime in milliseconds (7 days).
///
/// Fixed, and not derived from `JWT_EXPIRES_IN`: an operator who changes the
/// token lifetime must accept that the cookie may outlive or underlive it.
pub const TOKEN_COOKIE_MAX_AGE_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Transport attributes attached to a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime in milliseconds. Emitted as whole seconds in `Max-Age`.
    pub max_age_ms: u64,
    pub http_only: bool,
    pub same_site: SameSite,
    pub secure: bool,
    pub path: &'static str,
}

impl CookieOptions {
    /// Options for the session token cookie: 7 days, `HttpOnly`,
    /// `SameSite=None`, `Secure`, `Path=/`.
    #[must_use]
    pub const fn session() -> Self {
        Self {
            max_age_ms: TOKEN_COOKIE_MAX_AGE_MS,
            http_only: true,
            same_site: SameSite::None,
            secure: true,
            path: "/",
        }
    }

    /// Same attributes as [`CookieOptions::session`] with a zero lifetime, so
    /// browsers replace and immediately drop the cookie.
    #[must_use]
    pub const fn removal() -> Self {
        Self {
            max_age_ms: 0,
            ..Self::session()
        }
    }

    /// Build the cookie for `name=value` with these options.
    ///
    /// Carries both `Max-Age` and an absolute `Expires` for clients that only
    /// understand the latter. A zero lifetime expires at the Unix epoch.
    #[must_use]
    pub fn to_cookie(&self, name: &str, value: &str) -> Cookie<'static> {
        self.to_cookie_at(name, value, OffsetDateTime::now_utc())
    }

    /// [`CookieOptions::to_cookie`] with `Expires` computed from `now`.
    #[must_use]
    pub fn to_cookie_at(&self, name: &str, value: &str, now: OffsetDateTime) -> Cookie<'static> {
        // Bounded by u64::MAX / 1000, well within i64 range
        #[allow(clippy::cast_possible_wrap)]
        let max_age = time::Duration::seconds((self.max_age_ms / 1000) as i64);

        let expires = if max_age.is_zero() {
            OffsetDateTime::UNIX_EPOCH
        } else {
            now.checked_add(max_age).unwrap_or(now)
        };

        Cookie::build((name.to_string(), value.to_string()))
            .http_only(self.http_only)
            .same_site(self.same_site)
            .secure(self.secure)
            .path(self.path)
            .max_age(max_age)
            .expires(expires)
            .build()
    }

    /// Render a `Set-Cookie` header value for `name=value`.
    #[must_use]
    pub fn to_header_value(&self, name: &str, value: &str) -> String {
        self.to_cookie(name, value).to_string()
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self::session()
    }
}
