use std::path::{Path, PathBuf};

use crate::http::response::StatusCode;

/// Largest accepted image dimension, in pixels.
pub const MAX_DIMENSION: u32 = 2048;

/// Classification of a request target.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// `/<width>,<height>`: render a bitmap.
    Image { width: u32, height: u32 },
    /// A file under the document root, verified to exist.
    File { path: PathBuf },
    /// Anything the server refuses to serve.
    Rejected { status: StatusCode, reason: String },
}

impl RouteDecision {
    fn rejected(status: StatusCode, reason: &str) -> Self {
        RouteDecision::Rejected {
            status,
            reason: reason.to_string(),
        }
    }
}

/// Classifies a request path (query already stripped).
///
/// An exact `/<int>,<int>` target is an image request; dimensions outside
/// `1..=MAX_DIMENSION` are rejected with 400. Everything else is a file
/// request: the path must be `/`-rooted and free of `..`, `/` itself is
/// rewritten to `/index.html`, and the result is resolved under `root`.
/// Missing files and unreadable metadata both classify as 404.
pub async fn resolve(root: &Path, path: &str) -> RouteDecision {
    if let Some((width, height)) = parse_dimensions(path) {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return RouteDecision::rejected(StatusCode::BadRequest, "bad image size");
        }

        return RouteDecision::Image { width, height };
    }

    if path.is_empty() || !path.starts_with('/') || path.contains("..") {
        return RouteDecision::rejected(StatusCode::BadRequest, "bad path");
    }

    let path = if path == "/" { "/index.html" } else { path };

    let resolved = root.join(path.trim_start_matches('/'));

    match tokio::fs::metadata(&resolved).await {
        Ok(meta) if meta.is_file() => RouteDecision::File { path: resolved },
        Ok(_) => RouteDecision::rejected(StatusCode::NotFound, "not found"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            RouteDecision::rejected(StatusCode::NotFound, "not found")
        }
        Err(e) => RouteDecision::rejected(StatusCode::NotFound, &e.to_string()),
    }
}

/// Matches the `/<int>,<int>` image pattern, all-or-nothing.
///
/// Anything that is not exactly two decimal integers after the leading
/// slash (`/12x,5`, `/3,4,5`, trailing segments) yields `None` and
/// falls through to file handling.
fn parse_dimensions(path: &str) -> Option<(u32, u32)> {
    let rest = path.strip_prefix('/')?;
    let (w, h) = rest.split_once(',')?;

    if w.is_empty() || h.is_empty() {
        return None;
    }

    if !w.bytes().all(|b| b.is_ascii_digit()) || !h.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let width = w.parse().ok()?;
    let height = h.parse().ok()?;

    Some((width, height))
}
