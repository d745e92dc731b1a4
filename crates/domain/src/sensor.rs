//! Sensor — a read-only entity whose displayed attributes are derived from a
//! live device record at observation time.
//!
//! Integrations implement [`Sensor`] for their device-backed entity types and
//! register boxed instances with the application registry. Every property is
//! a pure function of the underlying record's current fields: nothing is
//! cached, so two observations between updates always agree.

use serde::{Deserialize, Serialize};

use crate::measurement::{EntityCategory, SensorDeviceClass, UnitOfMeasurement};
use crate::time::{Timestamp, now};

/// The displayed state of a sensor — raw text or a verbatim numeric reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for StateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// A registrable sensor entity.
///
/// The presentation properties default to `None`, which means "no override —
/// the platform default applies". Implementations override only what their
/// device actually provides.
pub trait Sensor: Send + Sync {
    /// Stable identifier, unique across all integrations.
    fn unique_id(&self) -> String;

    /// Human-readable display name.
    fn name(&self) -> String;

    /// Whether the backing connection currently considers this sensor live.
    fn available(&self) -> bool;

    /// Current state, read from the backing record at call time.
    fn state(&self) -> StateValue;

    /// Display unit shown next to a numeric state.
    fn unit_of_measurement(&self) -> Option<UnitOfMeasurement> {
        None
    }

    /// Semantic class driving frontend rendering.
    fn device_class(&self) -> Option<SensorDeviceClass> {
        None
    }

    /// Category for non-primary entities (diagnostics, configuration).
    fn entity_category(&self) -> Option<EntityCategory> {
        None
    }

    /// Icon override as an `mdi:` token.
    fn icon(&self) -> Option<&'static str> {
        None
    }
}

/// Serializable rendering of a [`Sensor`] at a single instant.
///
/// Snapshots decouple event payloads and logs from the live trait objects:
/// they are plain data and safe to ship across tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub unique_id: String,
    pub name: String,
    pub available: bool,
    pub state: StateValue,
    pub unit_of_measurement: Option<UnitOfMeasurement>,
    pub device_class: Option<SensorDeviceClass>,
    pub entity_category: Option<EntityCategory>,
    pub icon: Option<String>,
    /// When this snapshot was taken.
    pub observed_at: Timestamp,
}

impl SensorSnapshot {
    /// Capture the sensor's derived properties right now.
    #[must_use]
    pub fn of(sensor: &dyn Sensor) -> Self {
        Self {
            unique_id: sensor.unique_id(),
            name: sensor.name(),
            available: sensor.available(),
            state: sensor.state(),
            unit_of_measurement: sensor.unit_of_measurement(),
            device_class: sensor.device_class(),
            entity_category: sensor.entity_category(),
            icon: sensor.icon().map(str::to_owned),
            observed_at: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareSensor;

    impl Sensor for BareSensor {
        fn unique_id(&self) -> String {
            "test-1".to_string()
        }

        fn name(&self) -> String {
            "Test Sensor".to_string()
        }

        fn available(&self) -> bool {
            true
        }

        fn state(&self) -> StateValue {
            StateValue::Number(21.5)
        }
    }

    #[test]
    fn should_default_presentation_properties_to_none() {
        let sensor = BareSensor;
        assert_eq!(sensor.unit_of_measurement(), None);
        assert_eq!(sensor.device_class(), None);
        assert_eq!(sensor.entity_category(), None);
        assert_eq!(sensor.icon(), None);
    }

    #[test]
    fn should_capture_snapshot_of_sensor() {
        let snapshot = SensorSnapshot::of(&BareSensor);
        assert_eq!(snapshot.unique_id, "test-1");
        assert_eq!(snapshot.name, "Test Sensor");
        assert!(snapshot.available);
        assert_eq!(snapshot.state, StateValue::Number(21.5));
        assert_eq!(snapshot.icon, None);
    }

    #[test]
    fn should_serialize_numeric_state_as_plain_number() {
        let json = serde_json::to_string(&StateValue::Number(72.0)).unwrap();
        assert_eq!(json, "72.0");
    }

    #[test]
    fn should_serialize_text_state_as_plain_string() {
        let json = serde_json::to_string(&StateValue::Text("Idle".to_string())).unwrap();
        assert_eq!(json, "\"Idle\"");
    }

    #[test]
    fn should_display_state_values() {
        assert_eq!(StateValue::Number(45.0).to_string(), "45");
        assert_eq!(StateValue::Text("Heating".to_string()).to_string(), "Heating");
    }

    #[test]
    fn should_work_as_trait_object() {
        let boxed: Box<dyn Sensor> = Box::new(BareSensor);
        assert_eq!(boxed.state(), StateValue::Number(21.5));
    }
}
