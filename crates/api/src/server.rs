//! Process startup shared by the three binaries.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::jwt::AuthConfig;
use crate::config::{ConfigError, DatabaseConfig, ServerConfig};
use crate::router::build_app_router;
use crate::service::Service;
use crate::state::AppState;

/// Fatal startup and serving errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid HOST address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialise tracing, connect, migrate, and serve `service` until SIGINT or
/// SIGTERM.
pub async fn run(service: Service) -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env(service.default_port())?;
    let db_config = DatabaseConfig::from_env()?;
    tracing::info!(
        service = service.name(),
        host = %config.host,
        port = config.port,
        "Loaded server configuration"
    );

    let auth = AuthConfig::load().await?.map(Arc::new);
    if service.requires_auth() && auth.is_none() {
        return Err(ConfigError::Missing("AUTH_JWKS_URL or AUTH_SECRET").into());
    }

    // --- Database ---
    let pool = marquee_db::create_pool(&db_config.url, db_config.max_connections).await?;
    tracing::info!(
        max_connections = db_config.max_connections,
        "Database connection pool created"
    );

    marquee_db::health_check(&pool).await?;
    marquee_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- Router ---
    let state = AppState {
        pool: pool.clone(),
        auth,
    };
    let app = build_app_router(state, &config, service);

    // --- Start server ---
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, service = service.name(), "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
