//! Gateway Error Mapping Integration Tests
//!
//! Exercises the OpenRouter provider's fail-fast credential check and the
//! normalized HTTP error mapping. No network calls are made: the one async
//! test points at an unroutable address and must fail before any I/O.

use pitch_writer_llm::{
    parse_http_error, CompletionError, CompletionProvider, OpenRouterProvider, ProviderConfig,
};

#[tokio::test]
async fn test_missing_credential_fails_before_network() {
    let provider = OpenRouterProvider::new(ProviderConfig {
        api_key: None,
        // TEST-NET-1 address: a real request here would surface as a
        // NetworkError, so an AuthenticationFailed proves none was made.
        base_url: Some("http://192.0.2.1:1/v1/chat/completions".to_string()),
        timeout_secs: 1,
        ..Default::default()
    });

    let err = provider.complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::AuthenticationFailed { .. }));
}

#[test]
fn test_status_codes_map_to_normalized_variants() {
    assert!(matches!(
        parse_http_error(401, "unauthorized", "openrouter"),
        CompletionError::AuthenticationFailed { .. }
    ));
    assert!(matches!(
        parse_http_error(403, "forbidden", "openrouter"),
        CompletionError::AuthenticationFailed { .. }
    ));
    assert!(matches!(
        parse_http_error(429, "slow down", "openrouter"),
        CompletionError::RateLimited { .. }
    ));
    assert!(matches!(
        parse_http_error(400, "bad request", "openrouter"),
        CompletionError::InvalidRequest { .. }
    ));
    assert!(matches!(
        parse_http_error(503, "unavailable", "openrouter"),
        CompletionError::ServerError {
            status: Some(503),
            ..
        }
    ));
}

#[test]
fn test_mapped_errors_keep_raw_body_for_logs() {
    let err = parse_http_error(500, r#"{"error":"model overloaded"}"#, "openrouter");
    assert!(err.to_string().contains("model overloaded"));
}

#[test]
fn test_user_messages_never_leak_raw_payloads() {
    let raw = "401 Unauthorized for key sk-or-deadbeef";
    let errors = [
        parse_http_error(401, raw, "openrouter"),
        parse_http_error(429, raw, "openrouter"),
        parse_http_error(500, raw, "openrouter"),
        CompletionError::NetworkError {
            message: raw.to_string(),
        },
        CompletionError::ParseError {
            message: raw.to_string(),
        },
    ];

    for err in errors {
        let user = err.user_message();
        assert!(!user.contains("sk-or-deadbeef"));
        assert!(!user.contains("401"));
    }
}
