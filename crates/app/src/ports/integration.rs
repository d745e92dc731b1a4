//! Integration port — lifecycle and discovery handling for device integrations.
//!
//! An integration bridges an external controller (HomeSeer, virtual, …) into
//! the hub. It hands discovered sensors to the hub on startup; thereafter
//! the hub re-observes them as device updates arrive, reading each sensor's
//! live record.

use std::future::Future;

use seerhub_domain::error::HubError;
use seerhub_domain::event::Event;
use seerhub_domain::sensor::Sensor;

/// Context provided to integrations for interacting with the hub.
///
/// This is a **port** — adapters call it to register the sensors they
/// discover and to announce state changes. The service layer provides a
/// concrete implementation backed by the sensor registry.
pub trait IntegrationContext: Send + Sync {
    /// Register a batch of discovered sensors, returning how many were added.
    ///
    /// The batch is all-or-nothing: a validation failure on any sensor
    /// leaves the registry untouched.
    fn add_sensors(
        &self,
        sensors: Vec<Box<dyn Sensor>>,
    ) -> impl Future<Output = Result<usize, HubError>> + Send;

    /// Publish a domain event to the event bus.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HubError>> + Send;
}

/// A pluggable device integration.
///
/// Implementations live in adapter crates (e.g. `adapters/homeseer`).
/// The binary crate calls the lifecycle methods in order:
///
/// 1. [`setup`](Self::setup) — initialise and register instant discoveries
/// 2. [`start_background`](Self::start_background) — spawn long-running tasks
/// 3. (the hub runs, re-observing sensors as updates arrive)
/// 4. [`teardown`](Self::teardown) — clean up resources
pub trait Integration {
    /// Unique name identifying this integration (e.g. `"homeseer"`).
    fn name(&self) -> &'static str;

    /// Fast, non-blocking initialisation.
    ///
    /// Integrations whose devices are already known (the controller pushes a
    /// full inventory on connect) register them via `ctx` here. Slow
    /// discovery belongs in [`start_background`](Self::start_background).
    fn setup(
        &mut self,
        ctx: &impl IntegrationContext,
    ) -> impl Future<Output = Result<(), HubError>> + Send;

    /// Start long-running background work.
    ///
    /// Spawns internal tasks that talk to the hub via a cloned `ctx` and
    /// returns immediately. The default implementation is a no-op (suitable
    /// for integrations that do everything in [`setup`](Self::setup)).
    fn start_background(
        &mut self,
        _ctx: impl IntegrationContext + Clone + 'static,
    ) -> impl Future<Output = Result<(), HubError>> + Send {
        async { Ok(()) }
    }

    /// Called on graceful shutdown. Clean up any background tasks or connections.
    fn teardown(&mut self) -> impl Future<Output = Result<(), HubError>> + Send;
}
