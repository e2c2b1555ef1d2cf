use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::Timelike;
use tracing::info;

use crate::files::reader::FileReader;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Body, Response, ResponseBuilder, StatusCode};
use crate::image;
use crate::serve::route::{self, RouteDecision};

/// Turns classified requests into responses.
///
/// One handler is built per connection from the shared configuration;
/// it carries only the document root and is cheap to clone.
#[derive(Debug, Clone)]
pub struct Handler {
    root: PathBuf,
}

impl Handler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Produces exactly one response for `request` and logs the outcome.
    ///
    /// Errors never leave this function: every failure inside becomes an
    /// error response, so the connection stays usable for the next
    /// request.
    pub async fn dispatch(&self, conn: u64, peer: SocketAddr, request: &Request) -> Response {
        let (path, _query) = request.split_target();

        let response = self.respond(path, request).await;

        info!(
            conn,
            peer = %peer,
            method = ?request.method,
            target = %request.path,
            status = response.status.as_u16(),
            "Request handled"
        );

        response
    }

    async fn respond(&self, path: &str, request: &Request) -> Response {
        if request.method != Method::GET {
            return Response::error(StatusCode::MethodNotAllowed, path, "method not supported");
        }

        match route::resolve(&self.root, path).await {
            RouteDecision::Image { width, height } => self.serve_image(path, width, height),
            RouteDecision::File { path: resolved } => self.serve_file(path, &resolved).await,
            RouteDecision::Rejected { status, reason } => Response::error(status, path, &reason),
        }
    }

    /// Renders the time-of-day bitmap for an in-range `/<w>,<h>` target.
    fn serve_image(&self, rqpath: &str, width: u32, height: u32) -> Response {
        let hour = chrono::Local::now().hour();

        match image::render(width, height, hour) {
            Ok(data) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "image/bmp")
                .body(Body::Bytes(data))
                .build(),

            Err(e) => Response::error(StatusCode::InternalServerError, rqpath, &e.to_string()),
        }
    }

    /// Opens the resolved file and hands its chunked reader to the
    /// response, with the content type derived from the resolved file's
    /// extension (so `/` gets `index.html`'s type).
    async fn serve_file(&self, rqpath: &str, resolved: &std::path::Path) -> Response {
        match FileReader::open(resolved).await {
            Ok(reader) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", mime::content_type(resolved))
                .body(Body::File(reader))
                .build(),

            Err(e) => Response::error(StatusCode::NotFound, rqpath, &e.to_string()),
        }
    }
}
