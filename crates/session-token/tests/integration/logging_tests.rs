//! Integration tests for structured logging during issuance.
//!
//! Issuance logs at debug level; the token, the user id, and the secret must
//! never appear in the output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use session_test_utils::*;
use session_token::TokenIssuer;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn test_issue_logs_without_sensitive_values() {
    let issuer = test_issuer();
    let mut sink = RecordingSink::new();

    let (token, logs) = capture(|| issuer.issue_token("alice@example.com", &mut sink));
    let token = token.unwrap();

    assert!(logs.contains("Session token issued"), "logs: {logs}");
    assert!(!logs.contains(&token));
    assert!(!logs.contains("alice@example.com"));
    assert!(!logs.contains(TEST_SECRET));
}

#[test]
fn test_missing_secret_is_logged() {
    let issuer = TokenIssuer::new(config_without_secret());
    let mut sink = RecordingSink::new();

    let (result, logs) = capture(|| issuer.issue_token("user123", &mut sink));

    assert!(result.is_err());
    assert!(logs.contains("Signing secret missing or empty"), "logs: {logs}");
}
