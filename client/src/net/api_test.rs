use super::*;

fn config() -> ApiConfig {
    ApiConfig::new("https://api.example.test/")
}

fn credential() -> Credential {
    Credential { identifier: "a@b.com".to_owned(), secret: "x".to_owned() }
}

// =============================================================
// Request building
// =============================================================

#[test]
fn register_request_posts_credential_json() {
    let req = register_request(&config(), &credential()).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "https://api.example.test/register");
    assert_eq!(req.body, Some(serde_json::json!({ "username": "a@b.com", "password": "x" })));
    assert_eq!(req.authorization(), None);
}

#[test]
fn login_request_mirrors_register_shape() {
    let login = login_request(&config(), &credential()).unwrap();
    let register = register_request(&config(), &credential()).unwrap();
    assert_eq!(login.url, "https://api.example.test/login");
    assert_eq!(login.body, register.body);
}

#[test]
fn list_posts_request_is_authorized_get() {
    let req = list_posts_request(&config(), "tok123");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "https://api.example.test/posts");
    assert_eq!(req.authorization().as_deref(), Some("Bearer tok123"));
    assert_eq!(req.body, None);
}

#[test]
fn add_post_request_sends_url_body() {
    let req = add_post_request(&config(), "t", "https://www.facebook.com/p/posts/1/").unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "https://api.example.test/posts");
    assert_eq!(req.body, Some(serde_json::json!({ "url": "https://www.facebook.com/p/posts/1/" })));
    assert_eq!(req.authorization().as_deref(), Some("Bearer t"));
}

#[test]
fn webhook_requests_target_config_path() {
    let get = fetch_webhook_request(&config(), "t");
    let set = set_webhook_request(&config(), "t", "http://hook").unwrap();
    assert_eq!(get.url, "https://api.example.test/config/webhook");
    assert_eq!(get.method, Method::Get);
    assert_eq!(set.url, get.url);
    assert_eq!(set.method, Method::Post);
    assert_eq!(set.body, Some(serde_json::json!({ "url": "http://hook" })));
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_success_returns_token() {
    let parsed: TokenResponse = decode(200, r#"{"access_token":"tok123"}"#).unwrap();
    assert_eq!(parsed.access_token, "tok123");
}

#[test]
fn decode_created_status_counts_as_success() {
    let parsed: UrlBody = decode(201, r#"{"url":"http://x"}"#).unwrap();
    assert_eq!(parsed.url, "http://x");
}

#[test]
fn decode_success_without_token_is_malformed() {
    let err = decode::<TokenResponse>(200, r#"{"token":"nope"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn decode_failure_surfaces_error_field() {
    let err = decode::<TokenResponse>(400, r#"{"error":"E-mail já registrado"}"#).unwrap_err();
    assert_eq!(err.user_message("Erro ao registrar"), "E-mail já registrado");
}

#[test]
fn decode_unauthorized() {
    let err = decode::<PostsResponse>(401, r#"{"detail":"Not authenticated"}"#).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn decode_webhook_not_configured_is_none() {
    assert_eq!(decode_webhook(404, r#"{"detail":"Webhook não configurado"}"#), Ok(None));
}

#[test]
fn decode_webhook_returns_configured_url() {
    assert_eq!(decode_webhook(200, r#"{"webhook":"http://hook"}"#), Ok(Some("http://hook".to_owned())));
}

#[test]
fn method_names_are_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}

// =============================================================
// Non-browser builds
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn exchange_is_unavailable_outside_browser() {
    let req = list_posts_request(&config(), "t");
    let result = block_on_ready(exchange(&req));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was expected to complete immediately"),
    }
}
