//! Presentation vocabulary — device classes, display units, entity categories.
//!
//! These enums mirror the conventions most home-automation frontends expect:
//! a `device_class` selects the semantic rendering, `unit_of_measurement` is
//! the display symbol shown next to the state, and `entity_category` moves
//! housekeeping sensors out of the primary dashboard view.

use serde::{Deserialize, Serialize};

/// Semantic class of a sensor reading, driving frontend rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorDeviceClass {
    Illuminance,
    Temperature,
    Current,
    Power,
    Energy,
    Voltage,
    Humidity,
    Battery,
}

impl std::fmt::Display for SensorDeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illuminance => "illuminance",
            Self::Temperature => "temperature",
            Self::Current => "current",
            Self::Power => "power",
            Self::Energy => "energy",
            Self::Voltage => "voltage",
            Self::Humidity => "humidity",
            Self::Battery => "battery",
        };
        f.write_str(name)
    }
}

/// Display unit attached to a numeric sensor state.
///
/// Serializes as the display symbol itself (`"°C"`, `"kWh"`, …) so snapshots
/// carry exactly what a frontend would show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitOfMeasurement {
    #[serde(rename = "lx")]
    Lux,
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
    #[serde(rename = "%")]
    Percentage,
    #[serde(rename = "A")]
    Ampere,
    #[serde(rename = "kW")]
    Kilowatt,
    #[serde(rename = "kWh")]
    KilowattHour,
    #[serde(rename = "V")]
    Volt,
    #[serde(rename = "W")]
    Watt,
}

impl UnitOfMeasurement {
    /// The display symbol for this unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lux => "lx",
            Self::Celsius => "\u{b0}C",
            Self::Fahrenheit => "\u{b0}F",
            Self::Percentage => "%",
            Self::Ampere => "A",
            Self::Kilowatt => "kW",
            Self::KilowattHour => "kWh",
            Self::Volt => "V",
            Self::Watt => "W",
        }
    }
}

impl std::fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classification of a non-primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// Exposes a configuration parameter of a device.
    Config,
    /// Exposes diagnostics of a device (battery level, signal strength, …).
    Diagnostic,
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::Diagnostic => f.write_str("diagnostic"),
        }
    }
}
