use super::*;

#[test]
fn completions_url_appends_path() {
    let url = completions_url("https://api.groq.com/openai/v1").unwrap();
    assert_eq!(url.as_str(), "https://api.groq.com/openai/v1/chat/completions");
}

#[test]
fn completions_url_strips_trailing_slash() {
    let url = completions_url("http://127.0.0.1:9000/").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9000/chat/completions");
}

#[test]
fn completions_url_rejects_garbage() {
    let err = completions_url("not a url").unwrap_err();
    assert!(matches!(err, LlmError::Upstream { ref message } if message.contains("invalid base URL")));
}

#[test]
fn new_rejects_blank_key() {
    let err = CompletionClient::new("  ", &CompletionSettings::default()).unwrap_err();
    assert!(matches!(err, LlmError::ClientUnconfigured));
}

#[test]
fn debug_output_redacts_key() {
    let client = CompletionClient::with_base_url("gsk-secret", "http://localhost:1").unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("gsk-secret"));
    assert!(rendered.contains("llama-3.3-70b-versatile"));
}

#[test]
fn api_error_detail_prefers_json_message() {
    let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
    assert_eq!(api_error_detail(body), "Invalid API Key");
}

#[test]
fn api_error_detail_falls_back_to_raw_preview() {
    assert_eq!(api_error_detail("  Bad Gateway \n"), "Bad Gateway");
    assert_eq!(api_error_detail(""), "empty response body");
    let long = "x".repeat(500);
    assert_eq!(api_error_detail(&long).len(), ERROR_BODY_PREVIEW);
}
