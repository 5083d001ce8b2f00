use itinerary_server::cache::CachedPlanProvider;
use itinerary_server::config::ServerConfig;
use itinerary_server::otp::OtpClient;
use itinerary_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    // Create OTP client, wrapped in the plan cache
    let client = OtpClient::new(config.otp.clone())?;
    let provider = CachedPlanProvider::new(client, &config.cache);
    info!(plan_url = %config.otp.plan_url(), "using OTP");

    // Build app state and router
    let state = AppState::new(provider).with_display_offset(config.display_offset);
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "itinerary server listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /v1/itineraries  - Plan transit itineraries");

    axum::serve(listener, app).await?;
    Ok(())
}
