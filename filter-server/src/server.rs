use crate::{app::create_app, config::ServerConfig};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct FilterServer {
    config: ServerConfig,
}

impl FilterServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let socket_addr: SocketAddr = self
            .config
            .address
            .parse()
            .with_context(|| format!("invalid listen address `{}`", self.config.address))?;

        let listener = TcpListener::bind(socket_addr)
            .await
            .with_context(|| format!("bind {socket_addr} failed"))?;

        log::info!("Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, create_app(self.config))
            .await
            .context("http server exited")
    }
}
