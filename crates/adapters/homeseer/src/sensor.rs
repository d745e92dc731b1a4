//! Sensor variants for HomeSeer devices.
//!
//! One [`HomeSeerSensor`] struct covers every device; the controller type
//! string selects a [`SensorVariant`] that decides which fields of the
//! device record feed each presentation property.
//!
//! | Variant | State | Extras |
//! |---------|-------|--------|
//! | `Battery` | numeric value | battery class, decile icon, diagnostic category |
//! | `Humidity` | numeric value | humidity class |
//! | `FanState` | status text | fan icon from the raw value |
//! | `OperatingState` | status text | HVAC-mode icon from the status |
//! | `DoorLockLogging` | status text | fixed lock-clock icon |
//! | `Value` | numeric value | unit and class parsed from the status |
//! | `Status` | status text | none (fallback) |

use std::sync::Arc;

use seerhub_domain::measurement::{EntityCategory, SensorDeviceClass, UnitOfMeasurement};
use seerhub_domain::sensor::{Sensor, StateValue};
use seerhub_hs_client::client::HomeSeerClient;
use seerhub_hs_client::device::{
    DEVICE_ZWAVE_BATTERY, DEVICE_ZWAVE_DOOR_LOCK_LOGGING, DEVICE_ZWAVE_ELECTRIC_METER,
    DEVICE_ZWAVE_FAN_STATE, DEVICE_ZWAVE_LUMINANCE, DEVICE_ZWAVE_OPERATING_STATE,
    DEVICE_ZWAVE_RELATIVE_HUMIDITY, DEVICE_ZWAVE_SENSOR_MULTILEVEL, HsDevice,
};
use seerhub_hs_client::uom::{UnitCode, uom_from_status};

use crate::unique_id_for_ref;

/// Which rendering a device's type string selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorVariant {
    Battery,
    Humidity,
    FanState,
    OperatingState,
    DoorLockLogging,
    /// Generic numeric reading with status-derived unit and class.
    Value,
    /// Generic textual reading; the total fallback.
    Status,
}

impl SensorVariant {
    /// Select the variant for a controller type string.
    ///
    /// Total: anything unrecognised becomes [`SensorVariant::Status`].
    #[must_use]
    pub fn for_type_string(device_type_string: &str) -> Self {
        match device_type_string {
            DEVICE_ZWAVE_BATTERY => Self::Battery,
            DEVICE_ZWAVE_RELATIVE_HUMIDITY => Self::Humidity,
            DEVICE_ZWAVE_FAN_STATE => Self::FanState,
            DEVICE_ZWAVE_OPERATING_STATE => Self::OperatingState,
            DEVICE_ZWAVE_DOOR_LOCK_LOGGING => Self::DoorLockLogging,
            DEVICE_ZWAVE_ELECTRIC_METER | DEVICE_ZWAVE_LUMINANCE
            | DEVICE_ZWAVE_SENSOR_MULTILEVEL => Self::Value,
            _ => Self::Status,
        }
    }
}

/// A hub sensor backed by one HomeSeer device record.
///
/// Every property reads the record at call time; nothing is cached, so the
/// sensor always renders the record's current fields.
pub struct HomeSeerSensor {
    device: Arc<HsDevice>,
    client: Arc<HomeSeerClient>,
    variant: SensorVariant,
}

impl HomeSeerSensor {
    /// Wrap a device record, selecting the variant from its type string.
    #[must_use]
    pub fn new(device: Arc<HsDevice>, client: Arc<HomeSeerClient>) -> Self {
        let variant = SensorVariant::for_type_string(device.device_type_string());
        Self {
            device,
            client,
            variant,
        }
    }

    #[must_use]
    pub const fn variant(&self) -> SensorVariant {
        self.variant
    }

    fn status_unit(&self) -> Option<UnitCode> {
        uom_from_status(&self.device.status())
    }
}

impl Sensor for HomeSeerSensor {
    fn unique_id(&self) -> String {
        unique_id_for_ref(self.device.ref_id())
    }

    fn name(&self) -> String {
        self.device.full_name()
    }

    fn available(&self) -> bool {
        self.client.is_connected()
    }

    fn state(&self) -> StateValue {
        match self.variant {
            SensorVariant::Battery | SensorVariant::Humidity | SensorVariant::Value => {
                StateValue::Number(self.device.value())
            }
            SensorVariant::FanState
            | SensorVariant::OperatingState
            | SensorVariant::DoorLockLogging
            | SensorVariant::Status => StateValue::Text(self.device.status()),
        }
    }

    fn unit_of_measurement(&self) -> Option<UnitOfMeasurement> {
        match self.variant {
            SensorVariant::Battery | SensorVariant::Humidity | SensorVariant::Value => {
                self.status_unit().map(display_unit)
            }
            _ => None,
        }
    }

    fn device_class(&self) -> Option<SensorDeviceClass> {
        match self.variant {
            SensorVariant::Battery => Some(SensorDeviceClass::Battery),
            SensorVariant::Humidity => Some(SensorDeviceClass::Humidity),
            SensorVariant::Value => self.status_unit().and_then(device_class_hint),
            _ => None,
        }
    }

    fn entity_category(&self) -> Option<EntityCategory> {
        match self.variant {
            SensorVariant::Battery => Some(EntityCategory::Diagnostic),
            _ => None,
        }
    }

    fn icon(&self) -> Option<&'static str> {
        match self.variant {
            SensorVariant::Battery => battery_icon(self.device.value()),
            SensorVariant::FanState => Some(fan_state_icon(self.device.value())),
            SensorVariant::OperatingState => Some(operating_state_icon(&self.device.status())),
            SensorVariant::DoorLockLogging => Some("mdi:lock-clock"),
            _ => None,
        }
    }
}

/// Display unit for a recognised status unit code.
const fn display_unit(code: UnitCode) -> UnitOfMeasurement {
    match code {
        UnitCode::Lux => UnitOfMeasurement::Lux,
        UnitCode::Celsius => UnitOfMeasurement::Celsius,
        UnitCode::Fahrenheit => UnitOfMeasurement::Fahrenheit,
        UnitCode::Percentage => UnitOfMeasurement::Percentage,
        UnitCode::Ampere | UnitCode::Amperes => UnitOfMeasurement::Ampere,
        UnitCode::Kilowatt => UnitOfMeasurement::Kilowatt,
        UnitCode::KilowattHour => UnitOfMeasurement::KilowattHour,
        UnitCode::Volt | UnitCode::Volts => UnitOfMeasurement::Volt,
        UnitCode::Watt | UnitCode::Watts => UnitOfMeasurement::Watt,
    }
}

/// Device class implied by a status unit code.
///
/// Percentage maps to no class on purpose: a bare `%` on a generic value
/// sensor does not say whether the reading is humidity, battery, or
/// something else. The battery and humidity variants set theirs explicitly.
const fn device_class_hint(code: UnitCode) -> Option<SensorDeviceClass> {
    match code {
        UnitCode::Lux => Some(SensorDeviceClass::Illuminance),
        UnitCode::Celsius | UnitCode::Fahrenheit => Some(SensorDeviceClass::Temperature),
        UnitCode::Percentage => None,
        UnitCode::Ampere | UnitCode::Amperes => Some(SensorDeviceClass::Current),
        UnitCode::Kilowatt | UnitCode::Watt | UnitCode::Watts => Some(SensorDeviceClass::Power),
        UnitCode::KilowattHour => Some(SensorDeviceClass::Energy),
        UnitCode::Volt | UnitCode::Volts => Some(SensorDeviceClass::Voltage),
    }
}

/// Battery icon stepped in deciles over the charge percentage.
///
/// Thresholds are strict greater-than checks evaluated top down, so a charge
/// of exactly 45 lands in the `>39` bucket. Below 10 there is no override
/// and the platform default applies.
fn battery_icon(value: f64) -> Option<&'static str> {
    if value >= 100.0 {
        Some("mdi:battery")
    } else if value > 89.0 {
        Some("mdi:battery-90")
    } else if value > 79.0 {
        Some("mdi:battery-80")
    } else if value > 69.0 {
        Some("mdi:battery-70")
    } else if value > 59.0 {
        Some("mdi:battery-60")
    } else if value > 49.0 {
        Some("mdi:battery-50")
    } else if value > 39.0 {
        Some("mdi:battery-40")
    } else if value > 29.0 {
        Some("mdi:battery-30")
    } else if value > 19.0 {
        Some("mdi:battery-20")
    } else if value > 9.0 {
        Some("mdi:battery-10")
    } else {
        None
    }
}

/// Fan icon from the raw numeric value: exactly zero means the fan is off.
///
/// The value is read verbatim from the device record, never computed, so
/// the comparison is exact rather than tolerance-based.
fn fan_state_icon(value: f64) -> &'static str {
    if value == 0.0 {
        "mdi:fan-off"
    } else {
        "mdi:fan"
    }
}

/// HVAC-mode icon from the operating state text.
fn operating_state_icon(status: &str) -> &'static str {
    match status {
        "Idle" => "mdi:fan-off",
        "Heating" => "mdi:flame",
        "Cooling" => "mdi:snowflake",
        _ => "mdi:fan",
    }
}
