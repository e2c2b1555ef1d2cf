use std::path::Path;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Upper bound on the bytes moved per read or write operation.
pub const CHUNK_SIZE: usize = 4096;

/// Sequential reader that produces a file's contents as bounded chunks.
///
/// The total length is fixed by filesystem metadata at open time, and
/// bytes emitted plus bytes remaining always equal it. The handle is
/// released when the reader is dropped, whether it drained fully or an
/// error ended the transfer early.
#[derive(Debug)]
pub struct FileReader {
    file: File,
    len: u64,
    remaining: u64,
}

impl FileReader {
    /// Opens `path` for reading and takes its length from metadata.
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open '{}'", path.display()))?;

        let len = file
            .metadata()
            .await
            .with_context(|| format!("failed to stat '{}'", path.display()))?
            .len();

        Ok(Self {
            file,
            len,
            remaining: len,
        })
    }

    /// Total file length in bytes, as of open time.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Bytes not yet emitted.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the next chunk, at most [`CHUNK_SIZE`] bytes.
    ///
    /// Returns the chunk plus a flag telling whether more bytes remain,
    /// or `None` once the file is drained. A zero-byte read while bytes
    /// remain means the file shrank since metadata was read and is
    /// reported as an error, distinct from normal completion.
    pub async fn next_chunk(&mut self) -> anyhow::Result<Option<(Vec<u8>, bool)>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let want = CHUNK_SIZE.min(self.remaining as usize);
        let mut chunk = vec![0u8; want];

        let n = self.file.read(&mut chunk).await.context("file read failed")?;

        if n == 0 {
            anyhow::bail!(
                "unexpected end of file with {} bytes remaining",
                self.remaining
            );
        }

        chunk.truncate(n);
        self.remaining -= n as u64;

        Ok(Some((chunk, self.remaining > 0)))
    }
}
