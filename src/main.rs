//! VenueLens dashboard CLI
//!
//! Main application entry point: loads configuration, initializes logging,
//! and refreshes the venue dashboard for the configured locations.

use tracing::{info, warn};

use VenueLens::{
    config::Settings,
    services::{EventController, EventGateway},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must live until the process exits
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", VenueLens::info());

    let gateway = EventGateway::new(&settings.api)?;
    let mut controller = EventController::new(gateway);

    if settings.dashboard.location_ids.is_empty() {
        warn!("No locations configured; nothing to refresh");
        return Ok(());
    }

    controller
        .refresh_locations(&settings.dashboard.location_ids)
        .await?;

    for &location_id in &settings.dashboard.location_ids {
        if let Some(dashboard) = controller.projections().dashboard(location_id) {
            info!(
                location_id = location_id,
                events = dashboard.event_count,
                "Location dashboard refreshed"
            );
            for event in &dashboard.events {
                info!(
                    event_id = event.event_id,
                    name = %event.name,
                    status = %event.status,
                    approved_photographers = event.approved_photographers_count,
                    bookings = event.total_bookings_count,
                    "Event"
                );
            }
        }
    }

    Ok(())
}
