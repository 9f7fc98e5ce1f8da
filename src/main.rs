use std::time::Duration;

use hireflow::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let tokens = TokenService::new(
        &config.jwt_secret,
        chrono::Duration::minutes(config.access_token_expiry_minutes),
    );
    let state = AppState::new(db, tokens, config.bcrypt_cost, config.environment);

    let app = router::router(state, Duration::from_secs(config.request_timeout_secs));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
