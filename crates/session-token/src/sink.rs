//! Response channels that can accept a cookie directive.

use crate::directive::CookieOptions;
use crate::errors::IssueError;
use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue, Response};
use cookie::CookieJar;

/// Anything an outgoing response can attach a cookie to.
pub trait CookieSink {
    /// Attach `name=value` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Channel`] if the channel cannot represent the
    /// cookie.
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError>;
}

impl<S: CookieSink + ?Sized> CookieSink for &mut S {
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError> {
        (**self).set_cookie(name, value, options)
    }
}

/// Appends a `Set-Cookie` header; existing cookies are kept.
impl CookieSink for HeaderMap {
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError> {
        let header = HeaderValue::from_str(&options.to_header_value(name, value))
            .map_err(|e| IssueError::Channel(e.to_string()))?;
        self.append(SET_COOKIE, header);
        Ok(())
    }
}

impl<B> CookieSink for Response<B> {
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError> {
        self.headers_mut().set_cookie(name, value, options)
    }
}

/// Adds to the jar's delta; a cookie with the same name is replaced.
impl CookieSink for CookieJar {
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError> {
        self.add(options.to_cookie(name, value));
        Ok(())
    }
}
