use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::StaticServer;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listen_addr = cfg.listen_addr();
    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Listening on {}, document root {}", listen_addr, cfg.doc_root);

    let server = Arc::new(StaticServer::new(cfg.doc_root.clone()));

    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        let server = Arc::clone(&server);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, server);
            if let Err(e) = conn.run().await {
                tracing::debug!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
