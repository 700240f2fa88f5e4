//! Integration tests for issuing sessions from axum handlers.
//!
//! The handlers here stand in for a login endpoint that has already
//! authenticated the user.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use session_test_utils::*;
use session_token::{IssueError, TokenIssuer};
use std::sync::Arc;
use tower::ServiceExt;

async fn login(
    State(issuer): State<Arc<TokenIssuer>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, IssueError> {
    let mut headers = HeaderMap::new();
    let token = issuer.issue_token(user_id.as_str(), &mut headers)?;
    Ok((headers, Json(serde_json::json!({ "token": token }))))
}

async fn logout(State(issuer): State<Arc<TokenIssuer>>) -> Result<impl IntoResponse, IssueError> {
    let mut response = StatusCode::NO_CONTENT.into_response();
    issuer.clear_token(&mut response)?;
    Ok(response)
}

fn app(issuer: TokenIssuer) -> Router {
    Router::new()
        .route("/session/:user_id", post(login))
        .route("/logout", post(logout))
        .with_state(Arc::new(issuer))
}

async fn send(app: Router, uri: &str) -> Result<axum::response::Response, anyhow::Error> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())?;
    Ok(app.oneshot(request).await?)
}

async fn json_body(response: axum::response::Response) -> Result<serde_json::Value, anyhow::Error> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_login_sets_cookie_and_returns_same_token() -> Result<(), anyhow::Error> {
    // Arrange
    let app = app(test_issuer());

    // Act
    let response = send(app, "/session/user123").await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()?
        .to_string();

    let body = json_body(response).await?;
    let token = body["token"].as_str().expect("token in body").to_string();

    assert!(set_cookie.starts_with(&format!("jwt={token};")));
    for attribute in [
        "HttpOnly",
        "SameSite=None",
        "Secure",
        "Path=/",
        "Max-Age=604800",
        "Expires=",
    ] {
        assert!(
            set_cookie.contains(attribute),
            "Set-Cookie {set_cookie:?} missing {attribute}"
        );
    }
    token.assert_valid_jwt().assert_user_id(TEST_SECRET, "user123");

    Ok(())
}

#[tokio::test]
async fn test_login_without_secret_is_generic_500() -> Result<(), anyhow::Error> {
    let app = app(TokenIssuer::new(config_without_secret()));

    let response = send(app, "/session/user123").await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body = json_body(response).await?;
    assert_eq!(body["error"]["code"], "MISSING_SECRET");
    assert!(body.get("token").is_none());

    Ok(())
}

#[tokio::test]
async fn test_error_body_never_echoes_secret() -> Result<(), anyhow::Error> {
    let app = app(TokenIssuer::new(test_config_with_expiry("bogus")));

    let response = send(app, "/session/user123").await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await?.to_string();
    assert!(!body.contains(TEST_SECRET));
    assert!(body.contains("INVALID_EXPIRY"));

    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> Result<(), anyhow::Error> {
    let app = app(test_issuer());

    let response = send(app, "/logout").await?;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()?;
    assert!(set_cookie.starts_with("jwt=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    Ok(())
}
