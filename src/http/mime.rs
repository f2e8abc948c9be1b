//! Extension to MIME type lookup.

/// Returned for unknown or missing extensions.
pub const DEFAULT_MIME: &str = "application/octet-stream";

// jpg and jpeg carry each other's usual values; clients have been served
// these exact strings, so they stay.
static MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
    ("tar", "application/x-tar"),
    ("rar", "application/x-rar-compressed"),
    ("pdf", "application/pdf"),
    ("webm", "video/webm"),
    ("mp4", "video/mp4"),
    ("mp3", "audio/mp3"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpg"),
    ("png", "image/png"),
    ("ico", "image/ico"),
];

/// Exact, case-sensitive lookup of an extension without its dot.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Extension of the last path segment: the text after its last `.`.
///
/// A segment that starts or ends with the dot has no extension.
pub fn extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);

    match segment.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < segment.len() => Some(&segment[idx + 1..]),
        _ => None,
    }
}

/// MIME type for a request target, falling back to [`DEFAULT_MIME`].
///
/// ```
/// # use burrow::http::mime;
/// assert_eq!(mime::for_path("/img/logo.png"), "image/png");
/// assert_eq!(mime::for_path("/notes.txt"), "application/octet-stream");
/// ```
pub fn for_path(path: &str) -> &'static str {
    extension(path)
        .and_then(from_extension)
        .unwrap_or(DEFAULT_MIME)
}
