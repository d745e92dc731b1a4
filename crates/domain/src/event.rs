use serde::{Deserialize, Serialize};

use crate::id::{EntityId, EventId};
use crate::time::{Timestamp, now};

/// Kind of a domain event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An entity was added to the registry.
    EntityRegistered,
    /// A registered entity's derived state was re-observed after an update.
    StateChanged,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntityRegistered => write!(f, "entity_registered"),
            Self::StateChanged => write!(f, "state_changed"),
        }
    }
}

/// A domain event published on the in-process bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// The entity this event concerns, when there is one.
    pub entity_id: Option<EntityId>,
    /// Event-specific payload, typically a sensor snapshot.
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    #[must_use]
    pub fn new(event_type: EventType, entity_id: Option<EntityId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            entity_id,
            data,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_event_with_fresh_id() {
        let a = Event::new(EventType::StateChanged, None, serde_json::Value::Null);
        let b = Event::new(EventType::StateChanged, None, serde_json::Value::Null);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_keep_entity_id_and_payload() {
        let entity_id = EntityId::new();
        let event = Event::new(
            EventType::EntityRegistered,
            Some(entity_id),
            serde_json::json!({"unique_id": "homeseer-17"}),
        );
        assert_eq!(event.entity_id, Some(entity_id));
        assert_eq!(event.data["unique_id"], "homeseer-17");
    }

    #[test]
    fn should_serialize_event_type_as_snake_case() {
        let json = serde_json::to_string(&EventType::EntityRegistered).unwrap();
        assert_eq!(json, "\"entity_registered\"");
        assert_eq!(EventType::StateChanged.to_string(), "state_changed");
    }
}
