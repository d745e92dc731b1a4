//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use seerhub_domain::error::HubError;
use seerhub_domain::event::Event;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HubError>> + Send {
        // broadcast::send errors only when no receiver exists; publishing
        // to an empty bus is not a failure.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seerhub_domain::event::EventType;
    use seerhub_domain::id::EntityId;
    use seerhub_domain::measurement::{EntityCategory, SensorDeviceClass, UnitOfMeasurement};
    use seerhub_domain::sensor::{SensorSnapshot, StateValue};
    use seerhub_domain::time::now;

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        let event = Event::new(
            EventType::StateChanged,
            Some(EntityId::new()),
            serde_json::json!({"state": 21.5}),
        );
        let event_id = event.id;

        bus.publish(event).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, event_id);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = Event::new(EventType::EntityRegistered, None, serde_json::json!({}));
        let event_id = event.id;

        bus.publish(event).await.unwrap();

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();
        assert_eq!(r1.id, event_id);
        assert_eq!(r2.id, event_id);
    }

    #[tokio::test]
    async fn should_carry_registration_snapshot_payloads_intact() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        let snapshot = SensorSnapshot {
            unique_id: "homeseer-17".to_string(),
            name: "Bedroom Battery".to_string(),
            available: true,
            state: StateValue::Number(45.0),
            unit_of_measurement: Some(UnitOfMeasurement::Percentage),
            device_class: Some(SensorDeviceClass::Battery),
            entity_category: Some(EntityCategory::Diagnostic),
            icon: Some("mdi:battery-40".to_string()),
            observed_at: now(),
        };
        let event = Event::new(
            EventType::EntityRegistered,
            Some(EntityId::new()),
            serde_json::to_value(&snapshot).unwrap(),
        );

        bus.publish(event).await.unwrap();

        // The payload crosses the bus with the display renames applied.
        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_type, EventType::EntityRegistered);
        assert_eq!(received.data["unique_id"], "homeseer-17");
        assert_eq!(received.data["state"], 45.0);
        assert_eq!(received.data["unit_of_measurement"], "%");
        assert_eq!(received.data["device_class"], "battery");
        assert_eq!(received.data["entity_category"], "diagnostic");
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        let event = Event::new(EventType::StateChanged, None, serde_json::json!({}));
        let result = bus.publish(event).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);

        let event = Event::new(EventType::StateChanged, None, serde_json::json!({}));
        bus.publish(event).await.unwrap();

        let mut rx = bus.subscribe();

        let later = Event::new(EventType::EntityRegistered, None, serde_json::json!({}));
        let later_id = later.id;
        bus.publish(later).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, later_id);
    }
}
