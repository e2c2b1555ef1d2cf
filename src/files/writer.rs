use std::path::Path;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Sequential writer that persists byte chunks to a file.
///
/// The symmetric counterpart of [`FileReader`](super::FileReader):
/// `create`, any number of `write` calls, then `finish` to flush.
/// Dropping the writer releases the handle even when `finish` was never
/// reached, so the error path cannot leak it.
#[derive(Debug)]
pub struct FileWriter {
    file: File,
}

impl FileWriter {
    /// Creates or truncates `path` for writing.
    pub async fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .await
            .with_context(|| format!("failed to create '{}'", path.display()))?;

        Ok(Self { file })
    }

    /// Appends one chunk. Short writes are reported as errors.
    pub async fn write(&mut self, chunk: &[u8]) -> anyhow::Result<()> {
        self.file
            .write_all(chunk)
            .await
            .context("file write failed")
    }

    /// Flushes buffered data and consumes the writer.
    pub async fn finish(mut self) -> anyhow::Result<()> {
        self.file.flush().await.context("file flush failed")
    }
}
