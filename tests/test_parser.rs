use burrow::http::parser::{
    ParseError, decode_target, is_blank, next_line, parse_header_line, parse_request_line,
};
use burrow::http::request::Method;

#[test]
fn test_parse_get_request_line() {
    let line = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(line.method, Method::GET);
    assert_eq!(line.path, "/index.html");
    assert_eq!(line.version, "HTTP/1.1");
}

#[test]
fn test_parse_head_request_line() {
    let line = parse_request_line("HEAD /a.png HTTP/1.0").unwrap();

    assert_eq!(line.method, Method::HEAD);
    assert_eq!(line.version, "HTTP/1.0");
}

#[test]
fn test_parse_unsupported_method() {
    for raw in ["FOO /x HTTP/1.1", "POST / HTTP/1.1", "get / HTTP/1.1"] {
        assert!(matches!(
            parse_request_line(raw),
            Err(ParseError::InvalidRequestLine(_))
        ));
    }
}

#[test]
fn test_parse_bad_version() {
    for raw in [
        "GET / HTTP/11",
        "GET / HTTP/1.10",
        "GET / http/1.1",
        "GET /",
        "GET / HTTP/1.1 extra",
        "",
    ] {
        assert!(parse_request_line(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn test_parse_target_is_percent_decoded() {
    let line = parse_request_line("GET /my%20file.html HTTP/1.1").unwrap();
    assert_eq!(line.path, "/my file.html");
}

#[test]
fn test_parse_target_is_not_normalized() {
    let line = parse_request_line("GET /a/../b/./c HTTP/1.1").unwrap();
    assert_eq!(line.path, "/a/../b/./c");
}

#[test]
fn test_decode_target() {
    assert_eq!(decode_target("/caf%C3%A9").as_deref(), Some("/café"));
    assert_eq!(decode_target("/a+b.html").as_deref(), Some("/a b.html"));
    assert_eq!(decode_target("/a%2Bb").as_deref(), Some("/a+b"));
    assert_eq!(decode_target("%2e%2e/").as_deref(), Some("../"));
    assert_eq!(decode_target("/%FF").as_deref(), Some("/\u{FFFD}"));
}

#[test]
fn test_decode_target_malformed_escape() {
    for raw in ["/100%", "/a%2", "/a%g0", "%%41"] {
        assert_eq!(decode_target(raw), None, "{raw:?} should be rejected");
    }
}

#[test]
fn test_parse_malformed_escape_rejects_line() {
    assert!(matches!(
        parse_request_line("GET /100% HTTP/1.1"),
        Err(ParseError::InvalidRequestLine(_))
    ));
}

#[test]
fn test_parse_plus_in_target_is_space() {
    let line = parse_request_line("GET /a+b.html HTTP/1.1").unwrap();
    assert_eq!(line.path, "/a b.html");
}

#[test]
fn test_parse_version_digits_are_ascii() {
    assert!(parse_request_line("GET / HTTP/\u{0661}.\u{0661}").is_err());
}

#[test]
fn test_parse_target_may_contain_non_ascii_space() {
    let line = parse_request_line("GET /a\u{a0}b HTTP/1.1").unwrap();
    assert_eq!(line.path, "/a\u{a0}b");
}

#[test]
fn test_parse_header_separator_is_ascii_whitespace() {
    assert!(parse_header_line("X-Tab:\tvalue").is_ok());
    assert!(parse_header_line("X-Nbsp:\u{a0}value").is_err());
}

#[test]
fn test_parse_header_line() {
    let header = parse_header_line("Content-Type: text/html").unwrap();

    assert_eq!(header.name, "Content-Type");
    assert_eq!(header.value, "text/html");
}

#[test]
fn test_parse_header_case_preservation() {
    let header = parse_header_line("x-CUSTOM-header: Value").unwrap();
    assert_eq!(header.name, "x-CUSTOM-header");
    assert_eq!(header.value, "Value");
}

#[test]
fn test_parse_header_empty_value() {
    let header = parse_header_line("X-Empty: ").unwrap();
    assert_eq!(header.name, "X-Empty");
    assert_eq!(header.value, "");
}

#[test]
fn test_parse_malformed_header() {
    for raw in ["BrokenHeader", "Host:example.com", "NoSpace:"] {
        assert!(matches!(
            parse_header_line(raw),
            Err(ParseError::InvalidHeader(_))
        ));
    }
}

#[test]
fn test_blank_lines() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(!is_blank("Host: a"));
}

#[tokio::test]
async fn test_next_line_handles_both_line_endings() {
    let mut input: &[u8] = b"GET / HTTP/1.1\r\nHost: a\n\r\n";

    assert_eq!(
        next_line(&mut input).await.unwrap().as_deref(),
        Some("GET / HTTP/1.1")
    );
    assert_eq!(next_line(&mut input).await.unwrap().as_deref(), Some("Host: a"));
    assert_eq!(next_line(&mut input).await.unwrap().as_deref(), Some(""));
    assert_eq!(next_line(&mut input).await.unwrap(), None);
}

#[tokio::test]
async fn test_next_line_empty_stream() {
    let mut input: &[u8] = b"";
    assert_eq!(next_line(&mut input).await.unwrap(), None);
}
