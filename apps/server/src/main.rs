//! Dealership Inventory Server
//!
//! Entry point and wiring. Initialization order matters: open persistence,
//! run migrations, seed the operator account, then serve. Uses `anyhow` for
//! startup errors; request-level errors live in the feature crates.

mod views;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, middleware, routing::get};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::application::SeedAdminUseCase;
use auth::domain::repository::SessionRepository as _;
use auth::{AuthConfig, SessionGuardState, SqliteAuthRepository, require_session};
use inventory::{SqliteCarRepository, inventory_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,auth=info,inventory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection; defaults to the local SQLite file
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://carros.sqlite?mode=rwc".to_string());

    let options: SqliteConnectOptions = database_url
        .parse()
        .with_context(|| format!("Invalid DATABASE_URL: {database_url}"))?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../migrations").run(&pool).await?;

    tracing::info!("Migrations completed");

    let auth_repo = Arc::new(SqliteAuthRepository::new(pool.clone()));
    let car_repo = Arc::new(SqliteCarRepository::new(pool.clone()));

    // Seed the operator account before accepting requests
    SeedAdminUseCase::new(auth_repo.clone()).execute().await?;

    // Startup cleanup: drop expired sessions. Failure here should not
    // prevent the server from starting.
    match auth_repo.cleanup_expired().await {
        Ok(deleted) => {
            tracing::info!(sessions_deleted = deleted, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    // Auth configuration
    let config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };
    let config = Arc::new(config);

    let guard = SessionGuardState {
        repo: auth_repo.clone(),
        config: config.clone(),
    };

    // Protected routes: listing + mutations + logout, behind the guard
    let protected = Router::new()
        .merge(inventory_router(car_repo))
        .merge(auth::logout_router(auth_repo.clone(), config.clone()))
        .route_layer(middleware::from_fn_with_state(
            guard,
            require_session::<SqliteAuthRepository>,
        ));

    // Build router
    let app = Router::new()
        .merge(protected)
        .merge(auth::auth_router(auth_repo, config))
        .route("/cv", get(views::cv))
        .fallback(views::not_found)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()
        .context("Invalid BIND_ADDR")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
