//! Integration tests for nntp-session
//!
//! These tests verify the public API surface without a server.

use nntp_session::{Headers, NntpError, ServerConfig, codes};

#[test]
fn test_server_config_creation() {
    let config = ServerConfig::new("news.example.com", 563, true, "user", "pass");
    assert_eq!(config.host, "news.example.com");
    assert_eq!(config.port, 563);
    assert!(config.tls);
    assert_eq!(config.username, "user");
    assert_eq!(config.password, "pass");
}

#[test]
fn test_error_display() {
    let err = NntpError::Timeout;
    assert_eq!(err.to_string(), "Read timeout");

    let err = NntpError::InvalidArgument("article id");
    assert_eq!(err.to_string(), "Missing required article id");

    let err = NntpError::Protocol {
        expected: 211,
        code: 411,
        message: "no such group".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "NNTP error: expected 211, got 411: no such group"
    );

    let err = NntpError::AuthFailed {
        code: 482,
        message: "rejected".to_string(),
    };
    assert_eq!(err.to_string(), "Authentication failed (482): rejected");
}

#[test]
fn test_response_codes() {
    assert_eq!(codes::READY_POSTING_ALLOWED, 200);
    assert_eq!(codes::CLOSING_CONNECTION, 205);
    assert_eq!(codes::GROUP_SELECTED, 211);
    assert_eq!(codes::LIST_INFORMATION_FOLLOWS, 215);
    assert_eq!(codes::HEAD_FOLLOWS, 221);
    assert_eq!(codes::BODY_FOLLOWS, 222);
}

#[test]
fn test_headers_public_api() {
    let mut headers = Headers::new();
    headers.push("Subject", "Hi");
    headers.push("From", "a@b");

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("subject"), Some("Hi"));

    let names: Vec<_> = (&headers).into_iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Subject", "From"]);
}

#[cfg(feature = "serde")]
#[test]
fn test_server_config_serde() {
    let config = ServerConfig::tls("news.example.com", "user", "pass");

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("news.example.com"));
    assert!(json.contains("\"port\":563"));

    let deserialized: ServerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.host, config.host);
    assert_eq!(deserialized.port, config.port);
    assert_eq!(deserialized.tls, config.tls);
    assert_eq!(deserialized.read_timeout, config.read_timeout);
}
