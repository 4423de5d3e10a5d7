//! Postbox HTTP server entry point.
//!
//! Binary name: `postbox`
//!
//! Resolves configuration (CLI flags > environment > config.toml >
//! defaults), initializes the database and service, then serves the API
//! until Ctrl+C or SIGTERM.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "postbox", version, about = "Minimal chat message storage service")]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, env = "POSTBOX_PORT")]
    port: Option<u16>,

    /// Address to bind.
    #[arg(long, env = "POSTBOX_HOST")]
    host: Option<String>,

    /// SQLite database URL (e.g. sqlite:///var/lib/postbox/postbox.db).
    #[arg(long, env = "POSTBOX_DATABASE_URL")]
    database_url: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,postbox=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = postbox_infra::config::resolve_data_dir();
    tokio::fs::create_dir_all(&data_dir).await?;
    let file_config = postbox_infra::config::load_server_config(&data_dir).await;

    let host = cli.host.unwrap_or(file_config.host);
    let port = cli.port.unwrap_or(file_config.port);
    let database_url = cli
        .database_url
        .or(file_config.database_url)
        .unwrap_or_else(|| postbox_infra::config::default_database_url(&data_dir));

    let state = AppState::init(&database_url).await?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Postbox listening");

    let router = http::router::build_router(state.clone());
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
