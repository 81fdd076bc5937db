use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padel_checker::api::router;
use padel_checker::clubs::ClubRegistry;
use padel_checker::provider::{BookingProvider, HttpBookingProvider};
use padel_checker::services::{AvailabilityService, CheckScheduler};
use padel_checker::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "padel_checker=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000);
    let check_interval_secs: u64 = std::env::var("CHECK_INTERVAL_SECS")
        .ok()
        .and_then(|secs| secs.parse().ok())
        .unwrap_or(3600);

    let provider: Arc<dyn BookingProvider> = Arc::new(HttpBookingProvider::new()?);
    let clubs = Arc::new(ClubRegistry::builtin());

    let service = AvailabilityService::new(provider.clone(), clubs.clone());
    let scheduler = Arc::new(CheckScheduler::new(service, check_interval_secs));

    let state = AppState {
        provider,
        clubs,
        scheduler,
    };
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
