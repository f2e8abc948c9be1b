use burrow::http::request::{Header, Method, Request, RequestLine};

fn request_with(headers: Vec<Header>) -> Request {
    Request::new(
        RequestLine {
            method: Method::GET,
            path: "/".to_string(),
            version: "HTTP/1.1".to_string(),
        },
        headers,
    )
}

#[test]
fn test_request_header_retrieval() {
    let req = request_with(vec![
        Header::new("Host", "example.com"),
        Header::new("Accept", "*/*"),
    ]);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Accept"), Some("*/*"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_case_sensitive() {
    let req = request_with(vec![Header::new("host", "example.com")]);

    assert_eq!(req.header("Host"), None);
    assert_eq!(req.header("host"), Some("example.com"));
}

#[test]
fn test_request_duplicate_headers_first_wins() {
    let req = request_with(vec![
        Header::new("Connection", "Keep-Alive"),
        Header::new("Connection", "close"),
    ]);

    assert_eq!(req.headers.len(), 2);
    assert_eq!(req.header("Connection"), Some("Keep-Alive"));
    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_without_header() {
    // HTTP/1.0 with no Connection header still stays open
    let mut req = request_with(vec![]);
    req.version = "HTTP/1.0".to_string();

    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_values() {
    for value in ["Keep-Alive", "keep-alive", "upgrade", ""] {
        let req = request_with(vec![Header::new("Connection", value)]);
        assert!(req.keep_alive(), "value {value:?} should keep the connection");
    }
}

#[test]
fn test_request_close_values() {
    for value in ["Close", "close"] {
        let req = request_with(vec![Header::new("Connection", value)]);
        assert!(!req.keep_alive(), "value {value:?} should close the connection");
    }

    let req = request_with(vec![Header::new("Connection", "CLOSE")]);
    assert!(req.keep_alive());
}

#[test]
fn test_request_close_header_name_must_match_exactly() {
    let req = request_with(vec![Header::new("connection", "close")]);
    assert!(req.keep_alive());
}

#[test]
fn test_method_round_trip_names() {
    assert_eq!(Method::from_str("GET").map(|m| m.as_str()), Some("GET"));
    assert_eq!(Method::from_str("HEAD").map(|m| m.as_str()), Some("HEAD"));
    assert_eq!(Method::from_str("POST"), None);
    assert_eq!(Method::from_str("head"), None);
}
