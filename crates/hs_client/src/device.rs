//! HomeSeer device records and the controller type strings they carry.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::error::{HsClientError, InvalidDevice};

/// Type strings HomeSeer reports for Z-Wave devices.
pub const DEVICE_ZWAVE_BATTERY: &str = "Z-Wave Battery";
pub const DEVICE_ZWAVE_RELATIVE_HUMIDITY: &str = "Z-Wave Relative Humidity";
pub const DEVICE_ZWAVE_FAN_STATE: &str = "Z-Wave Fan State";
pub const DEVICE_ZWAVE_OPERATING_STATE: &str = "Z-Wave Operating State";
pub const DEVICE_ZWAVE_DOOR_LOCK_LOGGING: &str = "Z-Wave Door Lock Logging";
pub const DEVICE_ZWAVE_ELECTRIC_METER: &str = "Z-Wave Electric Meter";
pub const DEVICE_ZWAVE_LUMINANCE: &str = "Z-Wave Luminance";
pub const DEVICE_ZWAVE_SENSOR_MULTILEVEL: &str = "Z-Wave Sensor Multilevel";
pub const DEVICE_ZWAVE_SWITCH_BINARY: &str = "Z-Wave Switch Binary";
pub const DEVICE_ZWAVE_SWITCH_MULTILEVEL: &str = "Z-Wave Switch Multilevel";
pub const DEVICE_ZWAVE_DOOR_LOCK: &str = "Z-Wave Door Lock";

/// Controller-assigned device reference id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceRef(u32);

impl DeviceRef {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeviceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeviceRef {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone)]
struct LiveState {
    status: String,
    value: f64,
}

/// A device record owned by the client.
///
/// Identity fields are fixed at construction. `status` and `value` track the
/// controller and change on every update; reads clone under the lock, so a
/// holder never observes half of an update.
#[derive(Debug)]
pub struct HsDevice {
    ref_id: DeviceRef,
    name: String,
    location: String,
    location2: String,
    device_type_string: String,
    live: RwLock<LiveState>,
}

impl HsDevice {
    /// Create a builder for constructing an [`HsDevice`].
    #[must_use]
    pub fn builder() -> HsDeviceBuilder {
        HsDeviceBuilder::default()
    }

    #[must_use]
    pub const fn ref_id(&self) -> DeviceRef {
        self.ref_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room-level location, e.g. "Bedroom".
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Floor-level location, e.g. "Upstairs".
    #[must_use]
    pub fn location2(&self) -> &str {
        &self.location2
    }

    #[must_use]
    pub fn device_type_string(&self) -> &str {
        &self.device_type_string
    }

    /// Display name built from the non-empty parts of
    /// `location2`, `location`, and `name`, in that order.
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            self.location2.as_str(),
            self.location.as_str(),
            self.name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Current status string as reported by the controller.
    #[must_use]
    pub fn status(&self) -> String {
        self.live().status.clone()
    }

    /// Current raw numeric value as reported by the controller.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.live().value
    }

    /// Replace the live status and value in one step.
    pub fn update(&self, status: impl Into<String>, value: f64) {
        let mut live = self
            .live
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        live.status = status.into();
        live.value = value;
    }

    fn live(&self) -> RwLockReadGuard<'_, LiveState> {
        // A poisoned writer still leaves the last coherent pair in place.
        self.live.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Step-by-step builder for [`HsDevice`].
#[derive(Debug, Default)]
pub struct HsDeviceBuilder {
    ref_id: Option<DeviceRef>,
    name: Option<String>,
    location: Option<String>,
    location2: Option<String>,
    device_type_string: Option<String>,
    status: Option<String>,
    value: Option<f64>,
}

impl HsDeviceBuilder {
    #[must_use]
    pub fn ref_id(mut self, ref_id: impl Into<DeviceRef>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn location2(mut self, location2: impl Into<String>) -> Self {
        self.location2 = Some(location2.into());
        self
    }

    #[must_use]
    pub fn device_type_string(mut self, device_type_string: impl Into<String>) -> Self {
        self.device_type_string = Some(device_type_string.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Consume the builder, validate, and return an [`HsDevice`].
    ///
    /// # Errors
    ///
    /// Returns [`HsClientError::Invalid`] when the reference id is missing or
    /// the name or type string is empty.
    pub fn build(self) -> Result<HsDevice, HsClientError> {
        let ref_id = self.ref_id.ok_or(InvalidDevice::MissingRef)?;
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(InvalidDevice::EmptyName.into());
        }
        let device_type_string = self.device_type_string.unwrap_or_default();
        if device_type_string.is_empty() {
            return Err(InvalidDevice::EmptyTypeString.into());
        }
        Ok(HsDevice {
            ref_id,
            name,
            location: self.location.unwrap_or_default(),
            location2: self.location2.unwrap_or_default(),
            device_type_string,
            live: RwLock::new(LiveState {
                status: self.status.unwrap_or_default(),
                value: self.value.unwrap_or_default(),
            }),
        })
    }
}
