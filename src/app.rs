//! Process bootstrap: storage pool, schema, HTTP server and shutdown.

use crate::config::{AppConfig, DatabaseConfig};
use crate::task::{
    adapters::postgres::{PostgresTaskRepository, TaskPgPool, ensure_schema, task_pool_builder},
    services::TaskLifecycleService,
};
use crate::web::{AppState, ViewError, Views, router};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PoolError};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Failure that prevents the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The database could not be reached.
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] PoolError),
    /// The task table could not be created.
    #[error("failed to prepare the database schema: {0}")]
    Schema(#[source] diesel::result::Error),
    /// The embedded templates failed to compile.
    #[error(transparent)]
    Views(#[from] ViewError),
    /// The blocking bootstrap task panicked or was cancelled.
    #[error("database bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// The listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Opens the connection pool and ensures the task table exists.
///
/// Every pooled connection carries the configured `statement_timeout`.
///
/// Building the pool establishes its connections eagerly, so an unreachable
/// database fails here rather than on the first request.
///
/// # Errors
///
/// Returns [`StartupError::Connect`] or [`StartupError::Schema`] when the
/// database is unusable.
pub async fn connect(config: &DatabaseConfig) -> Result<TaskPgPool, StartupError> {
    let url = config.url.clone();
    let pool_size = config.pool_size;
    let connect_timeout = config.connect_timeout;
    let statement_timeout = config.statement_timeout;

    tokio::task::spawn_blocking(move || -> Result<TaskPgPool, StartupError> {
        let manager = ConnectionManager::<PgConnection>::new(url);
        let pool = task_pool_builder(statement_timeout)
            .max_size(pool_size)
            .connection_timeout(connect_timeout)
            .build(manager)
            .map_err(StartupError::Connect)?;
        let mut connection = pool.get().map_err(StartupError::Connect)?;
        ensure_schema(&mut connection).map_err(StartupError::Schema)?;
        Ok(pool)
    })
    .await?
}

/// Runs the server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`StartupError`] when any startup step fails or the server stops
/// with an I/O error.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let pool = connect(&config.database).await?;
    tracing::info!(pool_size = config.database.pool_size, "database connected");

    let repository =
        PostgresTaskRepository::new(pool).with_statement_timeout(config.database.statement_timeout);
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = router(AppState::new(service, Views::new()?));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    let bound_addr = listener.local_addr().map_err(StartupError::Serve)?;
    tracing::info!(addr = %bound_addr, "server is up");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
