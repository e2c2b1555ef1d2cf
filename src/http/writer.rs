use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes one response to a stream: the serialized head, then the body.
///
/// In-memory bodies go out as a single buffer; file bodies are pumped
/// chunk by chunk from their [`FileReader`](crate::files::reader::FileReader),
/// so peak memory stays independent of file size.
pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        let head = serialize_head(&self.response);
        write_buf(stream, &head).await?;

        match &mut self.response.body {
            Body::Empty => {}
            Body::Bytes(bytes) => {
                write_buf(stream, bytes).await?;
            }
            Body::File(reader) => {
                while let Some((chunk, _more)) = reader.next_chunk().await? {
                    write_buf(stream, &chunk).await?;
                }
            }
        }

        stream.flush().await?;

        Ok(())
    }
}

async fn write_buf<S>(stream: &mut S, buf: &[u8]) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let mut written = 0;

    while written < buf.len() {
        let n = stream.write(&buf[written..]).await?;

        if n == 0 {
            return Err(anyhow::anyhow!("connection closed while writing"));
        }

        written += n;
    }

    Ok(())
}
