use anyhow::Context;
use mock_server::ServerSettings;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = ServerSettings::load().context("failed to load server settings")?;
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let app = if settings.seed {
        mock_server::seeded_app()
    } else {
        mock_server::app()
    };

    tracing::info!(%addr, seed = settings.seed, "listening");
    mock_server::serve(listener, app).await?;
    Ok(())
}
