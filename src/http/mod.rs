//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 server side of sundial: parsing
//! requests off a socket, building responses, and writing them back out,
//! with keep-alive support.
//!
//! # Architecture
//!
//! - **`connection`**: The per-socket handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers, enforcing size limits
//! - **`request`**: HTTP request representation and helpers
//! - **`response`**: HTTP response representation with builder pattern and streaming bodies
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-type lookup based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route the target and build a response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send head, then stream the body
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```
//!
//! A clean end-of-stream in `Reading` closes the connection normally; any
//! other read or framing error closes it after logging. Write failures are
//! logged and surface on the next read.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
