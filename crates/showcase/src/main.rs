mod app;
mod cache;
mod config;
mod geo;
mod handlers;
mod messaging;
mod runners;
mod services;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase_core::messaging::CHAT_CHANNEL;
use showcase_session::SessionConfig;

use crate::{
    app::create_app,
    config::{Backend, Config},
    messaging::{ListenerContainer, LoggingListener},
    state::AppState,
};

/// Redis Showcase - pub/sub, repositories, geo, caching and sessions on Redis
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,

    /// Backend for storage, cache, pub/sub and sessions
    #[arg(long, value_enum, default_value_t = Backend::Redis, env = "BACKEND")]
    backend: Backend,

    /// Run the demo runners and exit without serving HTTP
    #[arg(long)]
    no_server: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = AppState::new(&config, SessionConfig::from_env(), cli.backend).await?;

    // Listen on the chat channel before anything publishes to it
    let listeners = ListenerContainer::new(state.pubsub.clone(), state.shutdown_tx.clone());
    listeners
        .add_listener(CHAT_CHANNEL, Arc::new(LoggingListener))
        .await?;

    if cli.no_server {
        let failures = runners::run_all(&runners::all(&state)).await;
        state.signal_shutdown();
        if failures > 0 {
            anyhow::bail!("{} runner(s) failed", failures);
        }
        return Ok(());
    }

    let app = create_app(state.clone());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // The demo runs alongside the server
    let runner_state = state.clone();
    tokio::spawn(async move {
        runners::run_all(&runners::all(&runner_state)).await;
    });

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM) and stop the listeners.
async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    state.signal_shutdown();
}
