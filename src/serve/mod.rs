//! Request routing and dispatch
//!
//! This module decides what an inbound request target means (a rendered
//! bitmap, a file under the document root, or a rejection) and builds
//! the matching response.

pub mod handler;
pub mod route;

pub use handler::Handler;
pub use route::RouteDecision;
