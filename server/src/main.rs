use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::default();
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("server running on {}", config.bind_addr);
    todo_server::run(listener).await?;
    Ok(())
}
