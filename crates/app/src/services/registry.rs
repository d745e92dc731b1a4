//! Sensor registry — use-cases for registering sensors and observing state.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use seerhub_domain::error::{HubError, NotFoundError, ValidationError};
use seerhub_domain::event::{Event, EventType};
use seerhub_domain::id::EntityId;
use seerhub_domain::sensor::{Sensor, SensorSnapshot};

use crate::ports::EventPublisher;

struct RegisteredSensor {
    entity_id: EntityId,
    sensor: Box<dyn Sensor>,
}

/// Application service owning all registered sensors.
///
/// Sensors are keyed by their integration-provided unique id and receive a
/// hub-side [`EntityId`] at registration time. Every registration and every
/// refresh is announced on the event bus as a [`SensorSnapshot`] payload.
pub struct SensorRegistry<P> {
    publisher: P,
    sensors: RwLock<BTreeMap<String, RegisteredSensor>>,
}

impl<P: EventPublisher> SensorRegistry<P> {
    /// Create a new registry publishing through `publisher`.
    pub fn new(publisher: P) -> Self {
        Self {
            publisher,
            sensors: RwLock::new(BTreeMap::new()),
        }
    }

    /// Register a batch of sensors, returning how many were added.
    ///
    /// The batch is validated as a whole before anything is inserted, so a
    /// bad sensor leaves the registry untouched. Each registered sensor is
    /// announced with an `EntityRegistered` event.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when a sensor has an empty unique id
    /// or name, or when a unique id collides with an already-registered
    /// sensor or another member of the batch.
    pub async fn register_sensors(
        &self,
        sensors: Vec<Box<dyn Sensor>>,
    ) -> Result<usize, HubError> {
        let mut announcements = Vec::with_capacity(sensors.len());
        {
            let mut registered = self.write_sensors();
            let mut batch_ids = BTreeSet::new();
            for sensor in &sensors {
                let unique_id = sensor.unique_id();
                if unique_id.is_empty() {
                    return Err(ValidationError::EmptyUniqueId.into());
                }
                if sensor.name().is_empty() {
                    return Err(ValidationError::EmptyName.into());
                }
                if registered.contains_key(&unique_id) || !batch_ids.insert(unique_id.clone()) {
                    return Err(ValidationError::DuplicateUniqueId(unique_id).into());
                }
            }
            for sensor in sensors {
                let unique_id = sensor.unique_id();
                let entity_id = EntityId::new();
                let snapshot = SensorSnapshot::of(sensor.as_ref());
                tracing::debug!(%entity_id, unique_id = %unique_id, "sensor registered");
                registered.insert(unique_id, RegisteredSensor { entity_id, sensor });
                announcements.push((entity_id, snapshot));
            }
        }
        let count = announcements.len();
        for (entity_id, snapshot) in announcements {
            self.announce(EventType::EntityRegistered, entity_id, &snapshot)
                .await?;
        }
        Ok(count)
    }

    /// Take a fresh snapshot of one sensor without publishing anything.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no sensor is registered under
    /// `unique_id`.
    pub fn snapshot(&self, unique_id: &str) -> Result<SensorSnapshot, HubError> {
        let registered = self.read_sensors();
        let entry = registered.get(unique_id).ok_or_else(|| NotFoundError {
            entity: "Sensor",
            id: unique_id.to_string(),
        })?;
        Ok(SensorSnapshot::of(entry.sensor.as_ref()))
    }

    /// Snapshots of every registered sensor, ordered by unique id.
    #[must_use]
    pub fn snapshots(&self) -> Vec<SensorSnapshot> {
        self.read_sensors()
            .values()
            .map(|entry| SensorSnapshot::of(entry.sensor.as_ref()))
            .collect()
    }

    /// Re-observe a sensor and announce the fresh snapshot as `StateChanged`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no sensor is registered under
    /// `unique_id`.
    pub async fn refresh(&self, unique_id: &str) -> Result<SensorSnapshot, HubError> {
        let (entity_id, snapshot) = {
            let registered = self.read_sensors();
            let entry = registered.get(unique_id).ok_or_else(|| NotFoundError {
                entity: "Sensor",
                id: unique_id.to_string(),
            })?;
            (entry.entity_id, SensorSnapshot::of(entry.sensor.as_ref()))
        };
        tracing::debug!(unique_id, state = %snapshot.state, "sensor refreshed");
        self.announce(EventType::StateChanged, entity_id, &snapshot)
            .await?;
        Ok(snapshot)
    }

    async fn announce(
        &self,
        event_type: EventType,
        entity_id: EntityId,
        snapshot: &SensorSnapshot,
    ) -> Result<(), HubError> {
        // Snapshots are plain data; serialization cannot fail on them.
        let payload = serde_json::to_value(snapshot).unwrap_or_default();
        self.publisher
            .publish(Event::new(event_type, Some(entity_id), payload))
            .await
    }

    fn read_sensors(&self) -> RwLockReadGuard<'_, BTreeMap<String, RegisteredSensor>> {
        self.sensors.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sensors(&self) -> RwLockWriteGuard<'_, BTreeMap<String, RegisteredSensor>> {
        self.sensors.write().unwrap_or_else(PoisonError::into_inner)
    }
}
