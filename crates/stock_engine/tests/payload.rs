use pretty_assertions::assert_eq;
use stock_engine::{analysis_url, decode_payload, FailureKind};

#[test]
fn url_joins_base_and_symbol() {
    let url = analysis_url("http://localhost:8000", "aapl").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/stock/AAPL");
}

#[test]
fn url_keeps_base_path_prefix() {
    let url = analysis_url("https://example.com/backend/", "TSLA").unwrap();
    assert_eq!(url.as_str(), "https://example.com/backend/api/stock/TSLA");
}

#[test]
fn symbol_is_encoded_as_one_path_segment() {
    let url = analysis_url("http://localhost:8000", "brk/b ?x").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/stock/BRK%2FB%20%3FX");
}

#[test]
fn bad_base_url_is_rejected() {
    let err = analysis_url("not a url", "AAPL").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);

    let err = analysis_url("mailto:someone@example.com", "AAPL").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[test]
fn payload_content_is_decoded() {
    let result = decode_payload(br#"{"content": "Hello", "extra": [1, 2]}"#).unwrap();
    assert_eq!(result.content(), "Hello");
}

#[test]
fn payload_must_be_an_object_with_string_content() {
    for body in [
        &b"not json"[..],
        br#"{"content": 42}"#,
        br#"["content"]"#,
        b"",
    ] {
        let err = decode_payload(body).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidPayload);
    }
}
