//! Concrete [`IntegrationContext`] backed by application services.

use std::sync::Arc;

use seerhub_domain::error::HubError;
use seerhub_domain::event::Event;
use seerhub_domain::sensor::Sensor;

use crate::ports::{EventPublisher, IntegrationContext};
use crate::services::registry::SensorRegistry;

/// [`IntegrationContext`] implementation that delegates to the
/// [`SensorRegistry`] and an `EventPublisher`.
///
/// Wraps the `Arc`-ed registry so it is cheaply cloneable and `Send + Sync`.
/// The generic parameter is confined to this struct — integrations see only
/// the [`IntegrationContext`] trait.
pub struct ServiceContext<P> {
    registry: Arc<SensorRegistry<P>>,
    event_publisher: P,
}

impl<P> ServiceContext<P> {
    /// Create a new context backed by the given registry and event publisher.
    pub fn new(registry: Arc<SensorRegistry<P>>, event_publisher: P) -> Self {
        Self {
            registry,
            event_publisher,
        }
    }
}

impl<P: Clone> Clone for ServiceContext<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            event_publisher: self.event_publisher.clone(),
        }
    }
}

impl<P> IntegrationContext for ServiceContext<P>
where
    P: EventPublisher + Send + Sync + 'static,
{
    async fn add_sensors(&self, sensors: Vec<Box<dyn Sensor>>) -> Result<usize, HubError> {
        self.registry.register_sensors(sensors).await
    }

    async fn publish(&self, event: Event) -> Result<(), HubError> {
        self.event_publisher.publish(event).await
    }
}
