//! Chunked file transfer
//!
//! Sequential, bounded-memory readers and writers over on-disk files.
//! Transfers move in chunks of at most [`CHUNK_SIZE`] bytes, so peak memory
//! use stays independent of file size. File handles are released on drop,
//! covering the fully-drained path and every early-error path alike.

pub mod reader;
pub mod writer;

pub use reader::{CHUNK_SIZE, FileReader};
pub use writer::FileWriter;
