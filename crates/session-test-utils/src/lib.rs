//! # Session Token Test Utilities
//!
//! Shared test utilities for the `session-token` crate.
//!
//! This crate provides:
//! - Recording and failing cookie sinks (fake response channels)
//! - Fixed test secrets and config builders
//! - Token decoding without wall-clock expiry checks
//! - Custom assertions (TokenAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use session_test_utils::*;
//!
//! let issuer = test_issuer();
//! let mut sink = RecordingSink::new();
//!
//! let token = issuer.issue_token("user123", &mut sink)?;
//!
//! token
//!     .assert_valid_jwt()
//!     .assert_user_id(TEST_SECRET, "user123");
//! sink.assert_single_token_cookie(&token);
//! ```

pub mod assertions;
pub mod decode;
pub mod fixtures;
pub mod sinks;

// Re-export commonly used items
pub use assertions::*;
pub use decode::*;
pub use fixtures::*;
pub use sinks::*;
