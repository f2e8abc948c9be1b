use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::connection::Connection;
use crate::log::Logger;

/// Binds the listening socket. Failure here is fatal to the service.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = cfg.address();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Accepts connections, one task per connection, never waiting for a task
/// to finish. Returns only when accepting fails.
pub async fn serve(listener: TcpListener, base_dir: Arc<str>) -> anyhow::Result<()> {
    let log = Logger::new("listener");
    let http_log = Logger::new("http");

    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;
        log.info(format_args!("Accepted connection from {peer}"));

        let conn = Connection::new(socket, peer, base_dir.clone(), &http_log);
        let conn_log = log.scoped(conn.peer().to_string());
        tokio::spawn(async move {
            if let Err(e) = conn.run().await {
                conn_log.warn(format_args!("Connection error: {e:#}"));
            }
        });
    }
}

pub async fn run(cfg: &ServerConfig) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    Logger::new("listener").info(format_args!(
        "Listening on {}, serving {}",
        cfg.address(),
        cfg.base_dir
    ));

    serve(listener, Arc::from(cfg.base_dir.as_str())).await
}
