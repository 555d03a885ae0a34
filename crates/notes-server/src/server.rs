use std::sync::Arc;

use notes_store::{InMemoryNoteStore, NoteStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_app;

/// Notes REST server.
pub struct NotesServer {
    config: ServerConfig,
    store: Arc<dyn NoteStore>,
}

impl NotesServer {
    /// A server backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryNoteStore::new()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn NoteStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn NoteStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let state = AppState::new(Arc::clone(&self.store), self.config.notes_root.as_str());
        build_app(&self.config, state)
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            "notes server listening on {} (notes at {})",
            self.config.bind_addr,
            self.config.notes_root
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
