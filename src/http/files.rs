//! Maps a request onto the base directory.
//!
//! The target is appended to the base directory as a string, with no
//! normalization and no containment check: a target with `..` segments can
//! reach outside the base directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::log::Logger;

pub const INDEX_DOCUMENT: &str = "index.html";

/// Filesystem path a target resolves to under `base_dir`.
pub fn resolve_path(base_dir: &str, target: &str) -> PathBuf {
    PathBuf::from(format!("{base_dir}{target}"))
}

/// Builds the response for `request`, reading the file fresh from disk.
///
/// A directory target is retried once as `target/index.html`. Anything that
/// is then not a regular file answers 404.
pub async fn resolve(request: &Request, base_dir: &str, log: &Logger) -> io::Result<Response> {
    let mut target = request.path.clone();
    let mut path = resolve_path(base_dir, &target);
    log.debug(format_args!("file: {}", path.display()));

    if is_dir(&path).await {
        target = format!("{target}/{INDEX_DOCUMENT}");
        path = resolve_path(base_dir, &target);
        log.debug(format_args!("directory redirected to {}", path.display()));
    }

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) if m.is_file() => m,
        _ => {
            log.debug(format_args!("not found: {}", path.display()));
            return Ok(Response::not_found());
        }
    };

    let content_type = mime::for_path(&target);

    match request.method {
        Method::GET => {
            let contents = tokio::fs::read(&path).await?;
            Ok(Response::file(content_type, contents))
        }
        Method::HEAD => Ok(Response::file_head(content_type, metadata.len())),
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
