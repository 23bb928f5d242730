#[cfg(all(feature = "server", feature = "lambda"))]
compile_error!(
    "Features 'server' and 'lambda' are mutually exclusive. Build with --no-default-features --features lambda,<backend>."
);

#[cfg(not(any(feature = "server", feature = "lambda")))]
compile_error!("Enable exactly one runtime feature: 'server' or 'lambda'.");

mod app;
mod config;
mod graphql;
mod handlers;
#[cfg(feature = "inmemory")]
mod mock_data;
mod state;
mod storage;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    // Create application state with the compiled-in storage backend
    let state = AppState::new(&config).await?;

    // Build the application router
    let app = create_app(state);

    run(app).await
}

/// Initialize the tracing subscriber. Lambda output is JSON for CloudWatch.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todoql=debug,tower_http=debug".into());

    #[cfg(feature = "lambda")]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .without_time()
        .with_target(false);

    #[cfg(not(feature = "lambda"))]
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Hand the router to the Lambda runtime.
#[cfg(feature = "lambda")]
async fn run(app: axum::Router) -> Result<()> {
    tracing::info!("Starting Lambda runtime");
    lambda_http::run(app)
        .await
        .map_err(|err| anyhow::anyhow!(err))
}

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use clap::Parser;
    use listenfd::ListenFd;
    use tokio::{net::TcpListener, signal};

    /// todoql - GraphQL API for todos and their users
    #[derive(Parser, Debug)]
    #[command(name = "todoql")]
    #[command(version, about, long_about = None)]
    struct Cli {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    }

    /// Bind a socket and serve the router until a shutdown signal arrives.
    pub async fn run(app: axum::Router) -> Result<()> {
        let cli = Cli::parse();

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

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Wait for shutdown signals (Ctrl+C or SIGTERM).
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
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
    }

}

#[cfg(feature = "server")]
use server::run;
