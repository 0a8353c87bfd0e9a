use clap::Parser;
use loggate::{AppState, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loggate", about = "Loggate — REST gateway for the log store and alert engine")]
struct Cli {
    /// TOML config file. Defaults to ./loggate.toml when present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Override `server.port`.
    #[arg(long)]
    port: Option<u16>,

    /// Never contact the primary store; always serve the fixture set.
    #[arg(long)]
    no_store: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.no_store {
        config.store.enabled = false;
    }

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        store = %format!("{}:{}/{}", config.store.host, config.store.port, config.store.database),
        store_enabled = config.store.enabled,
        "loggate starting"
    );

    loggate::serve(listener, AppState::from_config(&config), shutdown_signal()).await?;
    tracing::info!("loggate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
}
