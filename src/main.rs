//! Pitch Writer - Binary Entry Point
//!
//! `pitch-writer serve` runs the HTTP proxy server (the default);
//! `pitch-writer wizard` runs the interview interactively in the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pitch_writer::{build_router, wizard, AppState, ConfigService};

#[derive(Parser)]
#[command(name = "pitch-writer", version, about = "Questionnaire-driven business pitch generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        host: Option<String>,
        /// Override the configured bind port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the interview interactively in the terminal
    Wizard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitch_writer=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config_service = ConfigService::new().context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let mut config = config_service.get_config_clone();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(AppState::new(config)).await
        }
        Command::Wizard => {
            let state = AppState::new(config_service.get_config_clone());
            wizard::run(state.provider()).await?;
            Ok(())
        }
    }
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config().host, state.config().port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "pitch-writer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutting down");
}
