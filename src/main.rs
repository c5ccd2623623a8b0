mod model;
mod server;

use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::verification_codes,
    service::verification_code::VerificationCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::cors_layer(&config);

    let codes = VerificationCodeService::new(Duration::from_secs(
        config.verification_code_ttl_seconds,
    ));

    // Start verification code sweep scheduler
    let scheduler_codes = codes.clone();
    tokio::spawn(async move {
        if let Err(e) = verification_codes::start_scheduler(scheduler_codes).await {
            tracing::error!("Verification code scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, codes))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
