use std::net::SocketAddr;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::serve::handler::Handler;

/// One accepted client connection.
///
/// Owns the socket for its full lifetime and runs request/response cycles
/// until the peer disconnects or an unrecoverable error occurs. The id is
/// assigned by the listener and is unique across concurrent connections.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    id: u64,
    buffer: BytesMut,
    handler: Handler,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, id: u64, handler: Handler) -> Self {
        Self {
            stream,
            peer,
            id,
            buffer: BytesMut::with_capacity(4096),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Runs the connection to completion.
    ///
    /// Per-request failures become error responses inside the loop;
    /// connection-level failures end the loop after being logged. Either
    /// way the transport gets a best-effort orderly shutdown, where a
    /// not-connected peer is benign.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!(conn = self.id, peer = %self.peer, "Connected");

        self.serve_loop().await;

        if let Err(e) = self.stream.shutdown().await {
            if e.kind() != std::io::ErrorKind::NotConnected {
                warn!(conn = self.id, peer = %self.peer, error = %e, "Shutdown error");
            }
        }

        Ok(())
    }

    async fn serve_loop(&mut self) {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(Some(req)) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Ok(None) => {
                        info!(conn = self.id, peer = %self.peer, "Disconnected");
                        self.state = ConnectionState::Closed;
                    }
                    Err(e) => {
                        warn!(conn = self.id, peer = %self.peer, error = %e, "Read error");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let keep_alive = req.keep_alive();
                    let response = self.handler.dispatch(self.id, self.peer, req).await;

                    let writer = ResponseWriter::new(response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    // A failed write is logged but does not end the cycle
                    // by itself; a broken transport surfaces on the next
                    // read.
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        warn!(conn = self.id, peer = %self.peer, error = %e, "Write error");
                    }

                    if *keep_alive {
                        self.state = ConnectionState::Reading;
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }
    }

    /// Reads one request off the socket.
    ///
    /// `Ok(None)` is a clean end-of-stream: the peer closed between
    /// requests. EOF mid-request and parser failures other than
    /// `Incomplete` are errors; both close the connection.
    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }

                anyhow::bail!("connection closed mid-request");
            }
        }
    }
}
