/// HTTP status codes produced by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use burrow::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase written on the status line.
    ///
    /// ```
    /// # use burrow::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body; `None` when nothing follows the blank line
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use burrow::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body(b"<p>hi</p>".to_vec())
///     .build();
///
/// assert_eq!(response.header("Content-Length"), Some("9"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header, replacing the value of an existing header with the
    /// same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a Content-Length header from the body size (0 without a body)
    /// unless one was set explicitly.
    pub fn build(mut self) -> Response {
        if !self.headers.iter().any(|(k, _)| k == "Content-Length") {
            let len = self.body.as_ref().map_or(0, Vec::len);
            self.headers
                .push(("Content-Length".to_string(), len.to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 with the file contents as body.
    pub fn file(mime: &str, contents: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", mime)
            .header("Content-Length", contents.len().to_string())
            .body(contents)
            .build()
    }

    /// 200 announcing a file of `len` bytes without sending it.
    pub fn file_head(mime: &str, len: u64) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", mime)
            .header("Content-Length", len.to_string())
            .build()
    }

    /// 404 with `Content-Length: 0` and no body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
