use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Maximum size of the request line plus headers, in bytes.
pub const HEADER_LIMIT: usize = 8192;

/// Maximum declared body size, in bytes.
pub const BODY_LIMIT: usize = 8192;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    HeadersTooLarge,
    BodyTooLarge,
    Incomplete,
}

/// Parses one HTTP/1.x request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed. `Incomplete` means
/// more data is needed; every other error is unrecoverable for the
/// connection, since framing can no longer be trusted. Oversized header
/// blocks and declared bodies are rejected rather than buffered without
/// bound.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Locate the header/body separator, bounding how much we will buffer.
    let headers_end = match find_headers_end(buf) {
        Some(i) => i,
        None if buf.len() > HEADER_LIMIT => return Err(ParseError::HeadersTooLarge),
        None => return Err(ParseError::Incomplete),
    };

    if headers_end + 4 > HEADER_LIMIT {
        return Err(ParseError::HeadersTooLarge);
    }

    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    // Body
    let content_length = headers
        .get("Content-Length")
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);

    if content_length > BODY_LIMIT {
        return Err(ParseError::BodyTooLarge);
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
