//! Session token issuance for authenticated users.
//!
//! Signs a `userId` claim into an HS256 JWT and transmits it to the client as
//! the `jwt` cookie (`HttpOnly; SameSite=None; Secure; Path=/`, 7 days).
//!
//! # Modules
//!
//! - `config` - Secret and lifetime configuration
//! - `claims` - Claims payload and signing primitive
//! - `directive` - Cookie name and transport attributes
//! - `errors` - Error types
//! - `expiry` - Token lifetime parsing
//! - `issuer` - The token issuer
//! - `sink` - Response channels that accept cookies
//!
//! # Example
//!
//! ```rust
//! use axum::http::HeaderMap;
//! use session_token::{TokenConfig, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(TokenConfig::new("change-me", "7d"));
//! let mut headers = HeaderMap::new();
//!
//! let token = issuer.issue_token("user123", &mut headers)?;
//! assert_eq!(token.split('.').count(), 3);
//! assert!(headers.contains_key("set-cookie"));
//! # Ok::<(), session_token::IssueError>(())
//! ```

#![warn(clippy::pedantic)]

pub mod claims;
pub mod config;
pub mod directive;
pub mod errors;
pub mod expiry;
pub mod issuer;
pub mod sink;

pub use claims::SessionClaims;
pub use config::TokenConfig;
pub use directive::{CookieOptions, TOKEN_COOKIE_MAX_AGE_MS, TOKEN_COOKIE_NAME};
pub use errors::IssueError;
pub use issuer::TokenIssuer;
pub use sink::CookieSink;
