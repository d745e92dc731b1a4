//! # seerhubd
//!
//! Composition root for the seerhub daemon. Builds the in-process HomeSeer
//! client, the event bus and the sensor registry, hands a context to the
//! HomeSeer integration, and logs hub events until shutdown.
//!
//! ## Responsibilities
//!
//! - Load configuration and initialise logging.
//! - Wire concrete adapters into the application core.
//! - Run until Ctrl-C, then tear the integration down.
//!
//! ## Dependency rule
//!
//! The binary may depend on every other crate. Nothing depends on it.

mod config;
mod demo;

use std::sync::Arc;

use seerhub_adapter_homeseer::{HomeSeerIntegration, unique_id_for_ref};
use seerhub_app::event_bus::InProcessEventBus;
use seerhub_app::ports::Integration;
use seerhub_app::services::integration_context::ServiceContext;
use seerhub_app::services::registry::SensorRegistry;
use seerhub_domain::error::HubError;
use seerhub_domain::event::{Event, EventType};
use seerhub_hs_client::{DeviceRef, HomeSeerClient};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Shared event publisher handed to every component.
type Bus = Arc<InProcessEventBus>;

/// Buffered events per subscriber on the in-process bus.
const EVENT_BUS_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();
    tracing::info!("starting seerhubd");

    let client = Arc::new(HomeSeerClient::new());
    demo::seed(&client)?;

    let event_bus = Arc::new(InProcessEventBus::new(EVENT_BUS_CAPACITY));
    let registry = Arc::new(SensorRegistry::new(Arc::clone(&event_bus)));
    let ctx = ServiceContext::new(Arc::clone(&registry), Arc::clone(&event_bus));

    // Subscribe before setup so registration events reach the log too.
    tokio::spawn(log_events(event_bus.subscribe()));

    // Forward controller updates into StateChanged events.
    tokio::spawn(forward_updates(client.subscribe(), Arc::clone(&registry)));

    let mut integration = HomeSeerIntegration::new(Arc::clone(&client));
    if config.integrations.homeseer_enabled {
        integration.setup(&ctx).await?;
        integration.start_background(ctx.clone()).await?;
        tracing::info!(integration = integration.name(), "integration running");
    } else {
        tracing::warn!("HomeSeer integration disabled by configuration");
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");
    integration.teardown().await?;
    tracing::info!("seerhubd stopped");
    Ok(())
}

/// Re-observe the matching sensor for every device update the client
/// reports, publishing a `StateChanged` event with the fresh snapshot.
async fn forward_updates(
    mut updates: broadcast::Receiver<DeviceRef>,
    registry: Arc<SensorRegistry<Bus>>,
) {
    loop {
        match updates.recv().await {
            Ok(ref_id) => {
                let unique_id = unique_id_for_ref(ref_id);
                match registry.refresh(&unique_id).await {
                    Ok(snapshot) => {
                        tracing::debug!(
                            unique_id = %unique_id,
                            state = %snapshot.state,
                            "sensor re-observed"
                        );
                    }
                    // Updates for devices in other categories have no
                    // registered sensor; that is not a fault.
                    Err(HubError::NotFound(_)) => {
                        tracing::trace!(
                            unique_id = %unique_id,
                            "update for a device without a sensor"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(
                            unique_id = %unique_id,
                            error = %err,
                            "sensor refresh failed"
                        );
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "update feed lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Mirror every hub event into the log until the bus closes.
async fn log_events(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                let unique_id = event
                    .data
                    .get("unique_id")
                    .and_then(|id| id.as_str())
                    .unwrap_or("-")
                    .to_owned();
                match event.event_type {
                    EventType::EntityRegistered => {
                        tracing::info!(unique_id, "entity registered");
                    }
                    EventType::StateChanged => {
                        tracing::info!(unique_id, state = %event.data["state"], "state changed");
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
