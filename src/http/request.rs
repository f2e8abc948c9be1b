/// HTTP request methods.
///
/// Only GET and HEAD are served. Any other token in the method position is a
/// malformed request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use burrow::http::request::Method;
    /// assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

/// A single request header, name case preserved as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The parsed first line of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Percent-decoded target, otherwise untouched.
    pub path: String,
    /// Version token such as "HTTP/1.1".
    pub version: String,
}

/// Represents a parsed HTTP request from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The decoded request target (e.g., "/index.html")
    pub path: String,
    /// HTTP version as received
    pub version: String,
    /// Headers in arrival order, duplicates kept
    pub headers: Vec<Header>,
}

impl Request {
    pub fn new(line: RequestLine, headers: Vec<Header>) -> Self {
        Self {
            method: line.method,
            path: line.path,
            version: line.version,
            headers,
        }
    }

    /// Returns the value of the first header whose name equals `name`
    /// exactly (case-sensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }

    /// Determines whether the connection should remain open after the response.
    ///
    /// Only `Connection: Close` or `Connection: close` ends the connection.
    /// A missing header, `Keep-Alive`, or any other value keeps it open,
    /// whatever the request version.
    pub fn keep_alive(&self) -> bool {
        !matches!(self.header("Connection"), Some("Close") | Some("close"))
    }
}
