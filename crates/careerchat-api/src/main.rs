//! careerchat CLI and web entry point.
//!
//! Binary name: `careerchat`
//!
//! Parses CLI arguments, loads configuration and secrets, then either serves
//! the chat front end or prints the career report.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use careerchat_infra::config::{apply_env_overrides, default_config_path, read_config};
use careerchat_observe::tracing_setup::{
    filter_for_verbosity, init_tracing, shutdown_tracing, TracingOptions,
};
use careerchat_types::config::AppConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is normal; real environment variables still apply.
    let dotenv_path = dotenv::dotenv().ok();

    match cli.command {
        Commands::Serve { host, port, config } => {
            let mut app_config = load_config(config, cli.verbose, cli.quiet).await;
            if let Some(path) = dotenv_path {
                debug!(path = %path.display(), "Loaded .env file");
            }

            if let Some(host) = host {
                app_config.server.host = host;
            }
            if let Some(port) = port {
                app_config.server.port = port;
            }

            serve(app_config).await?;
            shutdown_tracing();
        }

        Commands::Report { json } => {
            cli::report::print_report(json)?;
        }
    }

    Ok(())
}

/// Read the config file, install the tracing subscriber it asks for, then
/// apply environment overrides.
///
/// The subscriber depends on `[logging]`, so problems reading the file are
/// logged only once it is installed.
async fn load_config(path: Option<PathBuf>, verbose: u8, quiet: bool) -> AppConfig {
    let path = path.or_else(default_config_path);
    let loaded = match &path {
        Some(path) => read_config(path).await,
        None => Ok(None),
    };

    let mut config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    let options = TracingOptions {
        default_filter: filter_for_verbosity(verbose, quiet).to_string(),
        json: config.logging.json,
        otel: config.logging.otel,
    };
    if let Err(e) = init_tracing(&options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    match (loaded, &path) {
        (Ok(Some(_)), Some(path)) => info!(path = %path.display(), "Loaded configuration"),
        (Ok(_), _) => debug!("No config file found, using defaults"),
        (Err(e), _) => warn!(error = %e, "Invalid config file, using defaults"),
    }

    apply_env_overrides(&mut config);
    config
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::init(config).context("failed to initialize application state")?;

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, model = state.chat_service.model(), "careerchat listening");
    println!(
        "  {} careerchat listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
