//! Fake response channels.

use session_token::{CookieOptions, CookieSink, IssueError, TOKEN_COOKIE_NAME};

/// A cookie captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCookie {
    pub name: String,
    pub value: String,
    pub options: CookieOptions,
}

/// Records every `set_cookie` call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub cookies: Vec<RecordedCookie>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cookies recorded under `name`, oldest first.
    pub fn named(&self, name: &str) -> Vec<&RecordedCookie> {
        self.cookies.iter().filter(|c| c.name == name).collect()
    }

    /// Assert exactly one cookie was recorded: `jwt` carrying `token` with
    /// the session options.
    pub fn assert_single_token_cookie(&self, token: &str) -> &RecordedCookie {
        assert_eq!(
            self.cookies.len(),
            1,
            "Expected exactly one cookie, got {:?}",
            self.cookies
        );
        let cookie = &self.cookies[0];
        assert_eq!(cookie.name, TOKEN_COOKIE_NAME, "Cookie name mismatch");
        assert_eq!(cookie.value, token, "Cookie value must equal the token");
        assert_eq!(
            cookie.options,
            CookieOptions::session(),
            "Cookie options must be the fixed session options"
        );
        cookie
    }
}

impl CookieSink for RecordingSink {
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), IssueError> {
        self.cookies.push(RecordedCookie {
            name: name.to_string(),
            value: value.to_string(),
            options: *options,
        });
        Ok(())
    }
}

/// A channel that refuses every cookie, counting the attempts.
#[derive(Debug, Default)]
pub struct FailingSink {
    pub attempts: usize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieSink for FailingSink {
    fn set_cookie(
        &mut self,
        _name: &str,
        _value: &str,
        _options: &CookieOptions,
    ) -> Result<(), IssueError> {
        self.attempts += 1;
        Err(IssueError::Channel(
            "channel does not accept cookies".to_string(),
        ))
    }
}
