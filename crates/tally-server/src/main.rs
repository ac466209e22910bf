//! Tally counter server.
//!
//! - GET  /api/counter            -> {"value": N}
//! - POST /api/counter/increment  -> {"value": N+1}
//! - POST /api/counter/decrement  -> {"value": N-1}
//! - POST /api/counter/reset      -> {"value": 0}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::error::{Result, TallyError};
use tally_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), err = %e, "tally-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let state = app_state::AppState::new(config::load_from_env()?);
    let listen = state.cfg().server.listen_addr()?;
    let policy = state.counter().policy();
    let app = router::build_router(state);

    tracing::info!(%listen, %policy, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TallyError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(err = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(err = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
