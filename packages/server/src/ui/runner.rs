//! Server entry points.

use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;

use super::{router::build_router, signal::shutdown_signal, state::AppState};
use crate::{config::ServerConfig, error::ServerError};

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    tracing::info!(
        "Lobby listening on {} (chat at {}, documents from {})",
        listener.local_addr()?,
        config.chat_path,
        config.document_root.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Lobby stopped");
    Ok(())
}
