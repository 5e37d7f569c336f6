mod common;

use auth::Claims;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app.signup("a@x.com", "pw123456").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["email"], "a@x.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "pw123456").await;
    let response = app.signup("a@x.com", "another-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_signup_duplicate_email_differing_in_case() {
    let app = TestApp::spawn().await;

    let first: Value = app
        .signup("Alice@Example.com", "pw123456")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(first["data"]["email"], "alice@example.com");

    let response = app.signup("alice@EXAMPLE.COM", "another-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::spawn().await;

    app.signup("alice@example.com", "pw123456").await;
    let response = app.login("ALICE@example.com", "pw123456").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_credentials_without_json_body() {
    let app = TestApp::spawn().await;

    for path in ["/api/auth/signup", "/api/auth/login"] {
        let requests = [
            app.post(path),
            app.post(path)
                .header("content-type", "application/json")
                .body("{\"email\": "),
            app.post(path)
                .header("content-type", "application/json")
                .body("42"),
            app.post(path)
                .header("content-type", "text/plain")
                .body("email=a@x.com&password=pw123456"),
        ];

        for request in requests {
            let response = request.send().await.expect("Failed to execute request");

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body: Value = response.json().await.expect("Failed to parse response");
            assert_eq!(body["error"], "Email and password required");
        }
    }
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::spawn().await;

    for payload in [
        json!({ "email": "a@x.com" }),
        json!({ "password": "pw123456" }),
        json!({ "email": "", "password": "pw123456" }),
    ] {
        let response = app
            .post("/api/auth/signup")
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "Email and password required");
    }
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.signup("not-an-email", "pw123456").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let signup: Value = app
        .signup("a@x.com", "pw123456")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let user_id = signup["data"]["id"].as_str().unwrap().to_string();

    let response = app.login("a@x.com", "pw123456").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    assert_eq!(body["data"]["user"]["email"], "a@x.com");

    let token = body["data"]["token"].as_str().unwrap();
    let claims = app.jwt_handler.verify(token).expect("Token should verify");
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, Duration::hours(24).num_seconds());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "pw123456").await;
    let response = app.login("a@x.com", "wrong-password").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::spawn().await;

    let response = app.login("ghost@x.com", "pw123456").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email and password required");
}

#[tokio::test]
async fn test_whoami_with_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com").await;

    let response = app
        .get_authenticated("/api/auth/whoami", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_missing_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/whoami")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "No token provided");
}

#[tokio::test]
async fn test_wrong_auth_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/notes")
        .header("Authorization", "Token abc")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid token format");
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com").await;
    let claims = app.jwt_handler.verify(&token).unwrap();

    let expired = app
        .jwt_handler
        .issue(&Claims::issued_at(
            &claims.sub,
            &claims.email,
            Utc::now() - Duration::days(8),
            Duration::days(7),
        ))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/whoami", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com").await;

    let (unsigned, signature) = token.rsplit_once('.').unwrap();
    let flipped = if signature.starts_with('A') { "B" } else { "A" };
    let tampered = format!("{}.{}{}", unsigned, flipped, &signature[1..]);

    let response = app
        .get_authenticated("/api/auth/whoami", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_deleted_account_token_still_verifies() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com").await;

    let response = app
        .delete_authenticated("/api/auth/whoami", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.user_count(), 0);

    // The token is not revoked, but the identity no longer resolves
    assert!(app.jwt_handler.verify(&token).is_ok());

    let response = app
        .get_authenticated("/api/auth/whoami", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_deleted_account_can_sign_up_again() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com").await;

    app.delete_authenticated("/api/auth/whoami", &token)
        .send()
        .await
        .expect("Failed to execute request");

    let response = app.signup("a@x.com", "pw123456").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
