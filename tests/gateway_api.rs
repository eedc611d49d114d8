use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use portiko::bridge::ApiBridge;
use portiko::portiko::{router, GatewayState};
use portiko::session::CookieConfig;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as mock_header, method, path as mock_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn app(remote_url: &str) -> Router {
    let bridge = ApiBridge::new(remote_url).expect("bridge builds");
    let state = Arc::new(GatewayState::new(bridge, CookieConfig::default()));
    router(state, Path::new("dist"))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json_of(response: axum::response::Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

fn sample_user() -> Value {
    json!({
        "id": 1,
        "email": "user@example.com",
        "first_name": "Ana",
        "last_name": "Moreno",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

#[tokio::test]
async fn login_success_sets_the_session_cookie() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(mock_path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": sample_user()
        })))
        .mount(&server)
        .await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/login",
            json!({"email": "user@example.com", "password": "secret"}),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()?
        .to_string();
    assert_eq!(
        cookie,
        "auth_token=t1; Path=/; HttpOnly; SameSite=Strict; Max-Age=86400"
    );

    let body = body_json_of(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "user@example.com");
    Ok(())
}

#[tokio::test]
async fn malformed_email_is_rejected_before_the_network() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/login",
            json!({"email": "not-an-email", "password": "secret"}),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json_of(response).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Please enter a valid email address");

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "remote API must not be called");
    Ok(())
}

#[tokio::test]
async fn remote_rejection_surfaces_the_exact_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(mock_path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/login",
            json!({"email": "user@example.com", "password": "wrong-pass"}),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json_of(response).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "invalid credentials");
    Ok(())
}

#[tokio::test]
async fn register_answers_created_with_a_cookie() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(mock_path("/auth/register"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "longenough",
            "first_name": "Ana",
            "last_name": "Moreno"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "t2",
            "user": sample_user()
        })))
        .mount(&server)
        .await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "email": "user@example.com",
                "password": "longenough",
                "first_name": "Ana",
                "last_name": "Moreno"
            }),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()?
        .to_string();
    assert!(cookie.starts_with("auth_token=t2;"));
    Ok(())
}

#[tokio::test]
async fn reset_mismatch_is_rejected_before_the_network() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/reset-password",
            json!({
                "token": "reset-token",
                "new_password": "longenough",
                "confirm_password": "different1"
            }),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json_of(response).await?;
    assert_eq!(body["error"], "Passwords do not match");

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "remote API must not be called");
    Ok(())
}

#[tokio::test]
async fn reset_strips_the_confirmation_field() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    // Exact-body matcher: a leaked confirm_password would fail the mock.
    Mock::given(method("POST"))
        .and(mock_path("/auth/reset-password"))
        .and(body_json(json!({
            "token": "reset-token",
            "new_password": "longenough"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Password updated"})),
        )
        .mount(&server)
        .await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/reset-password",
            json!({
                "token": "reset-token",
                "new_password": "longenough",
                "confirm_password": "longenough"
            }),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = body_json_of(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password updated");
    Ok(())
}

#[tokio::test]
async fn forgot_password_passes_the_remote_message_through() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(mock_path("/auth/forgot-password"))
        .and(body_json(json!({"email": "user@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "If the account exists, an email is on its way"
        })))
        .mount(&server)
        .await;

    let response = app(&server.uri())
        .oneshot(post_json(
            "/api/auth/forgot-password",
            json!({"email": "user@example.com"}),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = body_json_of(response).await?;
    assert_eq!(body["message"], "If the account exists, an email is on its way");
    Ok(())
}

#[tokio::test]
async fn profile_update_without_a_session_never_reaches_the_remote() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/profile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "first_name": "Ana",
                "last_name": "Moreno",
                "email": "user@example.com"
            })
            .to_string(),
        ))?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json_of(response).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Authentication required");

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "remote API must not be called");
    Ok(())
}

#[tokio::test]
async fn profile_update_forwards_the_cookie_token_as_bearer() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(mock_path("/profile"))
        .and(mock_header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": sample_user()})))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/profile")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "auth_token=t1")
        .body(Body::from(
            json!({
                "first_name": "Ana",
                "last_name": "Moreno",
                "email": "user@example.com"
            })
            .to_string(),
        ))?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], 1);
    Ok(())
}

#[tokio::test]
async fn logout_clears_the_cookie_even_when_the_remote_fails() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(mock_path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "session store down"})),
        )
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header(header::COOKIE, "auth_token=t1")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("clearing cookie set")
        .to_str()?
        .to_string();
    assert_eq!(
        cookie,
        "auth_token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0"
    );

    let body = body_json_of(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
    Ok(())
}

#[tokio::test]
async fn gate_redirects_anonymous_page_requests_to_login() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let request = Request::builder()
        .method("GET")
        .uri("/dashboard")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/auth/login")
    );
    Ok(())
}

#[tokio::test]
async fn gate_redirects_authenticated_requests_off_auth_pages() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let request = Request::builder()
        .method("GET")
        .uri("/auth/login")
        .header(header::COOKIE, "auth_token=t1")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/")
    );
    Ok(())
}

#[tokio::test]
async fn session_endpoint_hydrates_from_the_cookie() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(mock_path("/auth/me"))
        .and(mock_header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": sample_user()})))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/session")
        .header(header::COOKIE, "auth_token=t1")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await?;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "user@example.com");
    Ok(())
}

#[tokio::test]
async fn session_endpoint_reports_anonymous_without_a_cookie() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/session")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await?;
    assert_eq!(body["authenticated"], false);
    assert!(body.get("user").is_none());

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "no cookie means no remote lookup");
    Ok(())
}

#[tokio::test]
async fn session_endpoint_swallows_a_stale_token() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(mock_path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/session")
        .header(header::COOKIE, "auth_token=stale")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    // The cause stays private; the UI only learns there is no session.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await?;
    assert_eq!(body["authenticated"], false);
    Ok(())
}

#[tokio::test]
async fn health_reports_build_and_upstream() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())?;

    let response = app(&server.uri()).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await?;
    assert_eq!(body["name"], "portiko");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["upstream"], server.uri().trim_end_matches('/'));
    Ok(())
}
