//! switchboard: demo chat server routing messages to canned agents.

use std::path::PathBuf;

use clap::Parser;
use switchboard_agents::{ChatService, SessionStore, ToolLatency, ToolRegistry};
use switchboard_common::SwitchboardError;
use switchboard_config::schema::{LogLevel, LoggingConfig};
use switchboard_config::SwitchboardConfig;
use switchboard_server::{build_app, AppState};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "switchboard", about = "Multi-agent chat demo server")]
struct Args {
    /// Config file. Defaults to the platform config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    port: Option<u16>,

    /// trace, debug, info, warn or error. `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn load(args: &Args) -> Result<SwitchboardConfig, SwitchboardError> {
    let mut config = match &args.config {
        Some(path) => switchboard_config::load_config_from(path)?,
        None => switchboard_config::load_config()?,
    };
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    switchboard_config::validation::validate(&config)?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// `RUST_LOG` if set, otherwise `directive`.
fn env_filter(directive: String) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into())
}

/// Filter used while the config file is read, before its `[logging]`
/// section is known.
fn startup_directive(cli_level: Option<LogLevel>) -> String {
    LoggingConfig {
        level: cli_level.unwrap_or_default(),
    }
    .directive()
}

#[tokio::main]
async fn main() -> Result<(), SwitchboardError> {
    let args = Args::parse();

    let startup = tracing_subscriber::fmt()
        .with_env_filter(env_filter(startup_directive(args.log_level)))
        .finish();
    let config = tracing::subscriber::with_default(startup, || load(&args))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.logging.directive()))
        .init();

    let tools = &config.tools;
    let latency = ToolLatency::from_millis(
        tools.calculator_latency_ms,
        tools.web_search_latency_ms,
        tools.current_time_latency_ms,
    );
    let store = SessionStore::new(config.session.expiration());
    let service = ChatService::new(ToolRegistry::new(latency), store.clone());

    // Optional sweep of idle sessions.
    if let Some(interval) = config.session.reap_interval() {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let reaped = store.reap_expired().await;
                let count = store.len().await;
                tracing::debug!(reaped, sessions = count, "Reaper tick");
            }
        });
    }

    let app = build_app(AppState::new(service), &config.server.allowed_origin)?;

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        origin = %config.server.allowed_origin,
        expiration_secs = config.session.expiration_secs,
        "switchboard listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
