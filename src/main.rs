mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session, deletion_task) = startup::connect_to_session(&db, &config).await?;

    if config.seed_users {
        startup::seed_users(&db, config.bcrypt_cost).await?;
    }

    let app = router::router()
        .with_state(AppState::new(db, config.bcrypt_cost))
        .layer(session)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind listener: {}", e)))?;

    tracing::info!("Server listening on {}", config.listen_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    deletion_task.abort();
    tracing::info!("Server stopped");

    Ok(())
}
