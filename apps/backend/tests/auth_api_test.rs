mod support;

use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use backend::auth::jwt::mint_session_token;
use backend::state::app_state::AppState;
use backend::state::security_config::{SecurityConfig, SESSION_COOKIE};
use backend_test_support::problem_details::assert_problem;
use serde_json::json;
use support::create_test_app;

fn test_security() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
}

fn test_state() -> AppState {
    AppState::without_db(test_security(), backend::RouteRules::default())
}

fn session_cookie_for(sub: &str, role: Option<&str>, minted_at: SystemTime) -> Cookie<'static> {
    let token = mint_session_token(sub, role, minted_at, &test_security()).unwrap();
    Cookie::new(SESSION_COOKIE, token)
}

#[actix_web::test]
async fn logout_clears_the_session_cookie() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("removal cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session=;"));
    assert!(set_cookie.contains("HttpOnly"));
    // Expiry in the past deletes the cookie client-side.
    assert!(set_cookie.contains("1970"));
}

#[actix_web::test]
async fn me_without_cookie_is_unauthorized() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .contains("application/problem+json"));

    let body = test::read_body(resp).await;
    assert_problem(&body, 401, "SESSION_MISSING");
}

#[actix_web::test]
async fn me_with_valid_cookie_returns_claims() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(session_cookie_for("42", Some("admin"), SystemTime::now()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sub"], "42");
    assert_eq!(body["role"], "admin");
    assert!(body["exp"].as_i64().unwrap() > 0);
}

#[actix_web::test]
async fn me_with_expired_cookie_is_unauthorized() {
    let app = create_test_app(test_state()).await;

    let minted_at = SystemTime::now() - Duration::from_secs(8 * 24 * 60 * 60);
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(session_cookie_for("42", Some("admin"), minted_at))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_problem(&body, 401, "SESSION_MISSING");
}

#[actix_web::test]
async fn admin_api_without_session_is_unauthorized() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::delete()
        .uri("/api/admin/projects/1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_problem(&body, 401, "SESSION_MISSING");
}

#[actix_web::test]
async fn admin_api_with_subscriber_session_is_forbidden() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::delete()
        .uri("/api/admin/projects/1")
        .cookie(session_cookie_for("7", Some("subscriber"), SystemTime::now()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = test::read_body(resp).await;
    assert_problem(&body, 403, "FORBIDDEN");
}

#[actix_web::test]
async fn login_rejects_empty_email() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "", "password": "Correct1!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    // Validation failures never set a cookie.
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body = test::read_body(resp).await;
    assert_problem(&body, 400, "INVALID_EMAIL");
}

#[actix_web::test]
async fn login_rejects_empty_password() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "user@test.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body = test::read_body(resp).await;
    assert_problem(&body, 400, "INVALID_PASSWORD");
}

#[actix_web::test]
async fn responses_carry_a_request_id() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-request-id").is_some());
}
