use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::serve::handler::Handler;

/// Hands out strictly increasing connection ids.
///
/// Incremented atomically so ids stay unique across concurrently
/// accepted connections; each id is passed by value into its connection
/// at construction.
#[derive(Debug, Default)]
pub struct ConnectionIds(AtomicU64);

impl ConnectionIds {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// The accept loop.
///
/// Spawns one task per accepted connection. A connection's failure is
/// caught and logged at its task boundary and never reaches the loop.
pub struct Listener {
    inner: TcpListener,
    handler: Handler,
    ids: ConnectionIds,
}

impl Listener {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(&cfg.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;

        info!("Listening on {}", inner.local_addr()?);

        Ok(Self {
            inner,
            handler: Handler::new(&cfg.doc_root),
            ids: ConnectionIds::default(),
        })
    }

    /// The address actually bound, useful when the port was 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    pub async fn serve(&self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await?;
            let id = self.ids.next();

            let handler = self.handler.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, peer, id, handler);
                if let Err(e) = conn.run().await {
                    error!(conn = id, peer = %peer, error = %e, "Connection failed");
                }
            });
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.serve().await
}
