//! Line-oriented request parsing.
//!
//! A request is read one line at a time: a request line, then header lines up
//! to the first blank line. The functions here are pure; the connection
//! decides what a failure means for the connection.

use std::fmt;
use std::io;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Header, Method, RequestLine};

// Whitespace and digits are ASCII only.
static REQUEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(GET|HEAD) ([^ \t\n\x0B\f\r]*) (HTTP/[0-9]\.[0-9])$")
        .expect("request line pattern")
});

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*):[ \t\n\x0B\f\r](.*)$").expect("header line pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not match `METHOD SP TARGET SP HTTP/d.d`.
    InvalidRequestLine(String),
    /// The line is not `Name: Value`.
    InvalidHeader(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRequestLine(line) => write!(f, "bad request line: {line:?}"),
            ParseError::InvalidHeader(line) => write!(f, "bad header: {line:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a request line, decoding the target. A target with a malformed
/// `%` escape makes the whole line invalid.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    let invalid = || ParseError::InvalidRequestLine(line.to_string());
    let caps = REQUEST_LINE.captures(line).ok_or_else(invalid)?;

    let method = Method::from_str(&caps[1]).ok_or_else(invalid)?;
    let path = decode_target(&caps[2]).ok_or_else(invalid)?;

    Ok(RequestLine {
        method,
        path,
        version: caps[3].to_string(),
    })
}

/// Parses a `Name: Value` header line. The name is everything before the
/// last colon that is followed by whitespace.
pub fn parse_header_line(line: &str) -> Result<Header, ParseError> {
    let caps = HEADER_LINE
        .captures(line)
        .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;

    Ok(Header::new(&caps[1], &caps[2]))
}

/// A whitespace-only line ends the header block.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Form-style decoding: `+` becomes a space and `%XX` escapes are decoded,
/// with invalid UTF-8 replaced. Returns `None` when a `%` is not followed by
/// two hex digits.
pub fn decode_target(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = raw.replace('+', " ");
    Some(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Reads one line, without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of stream when no bytes were read.
pub async fn next_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;

    if n == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
