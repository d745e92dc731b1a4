//! The client facade: a registry of device records plus an update feed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

use crate::device::{
    DEVICE_ZWAVE_DOOR_LOCK, DEVICE_ZWAVE_SWITCH_BINARY, DEVICE_ZWAVE_SWITCH_MULTILEVEL, DeviceRef,
    HsDevice,
};
use crate::error::HsClientError;

/// Buffered update notifications per subscriber before lagging kicks in.
const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Coarse grouping used to hand devices to the right entity platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCategory {
    Sensor,
    Switch,
    Light,
    Lock,
}

impl DeviceCategory {
    /// Classify a controller type string.
    ///
    /// The eight Z-Wave sensor type strings, and anything unrecognised, land
    /// in [`DeviceCategory::Sensor`]: a read-only status entity is the safe
    /// rendering for a device we cannot name.
    #[must_use]
    pub fn for_type_string(device_type_string: &str) -> Self {
        match device_type_string {
            DEVICE_ZWAVE_SWITCH_BINARY => Self::Switch,
            DEVICE_ZWAVE_SWITCH_MULTILEVEL => Self::Light,
            DEVICE_ZWAVE_DOOR_LOCK => Self::Lock,
            _ => Self::Sensor,
        }
    }
}

/// In-process HomeSeer client.
///
/// Owns the device records, tracks controller connectivity, and broadcasts
/// the reference id of every device that receives an update. Cheap to share
/// behind an [`Arc`]; all methods take `&self`.
#[derive(Debug)]
pub struct HomeSeerClient {
    devices: RwLock<BTreeMap<DeviceRef, Arc<HsDevice>>>,
    connected: AtomicBool,
    updates: broadcast::Sender<DeviceRef>,
}

impl HomeSeerClient {
    #[must_use]
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            devices: RwLock::new(BTreeMap::new()),
            connected: AtomicBool::new(true),
            updates,
        }
    }

    /// Register a device record.
    ///
    /// # Errors
    ///
    /// Returns [`HsClientError::DuplicateDevice`] when a record already
    /// exists under the same reference id.
    pub fn add_device(&self, device: HsDevice) -> Result<Arc<HsDevice>, HsClientError> {
        let ref_id = device.ref_id();
        let mut devices = self
            .devices
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if devices.contains_key(&ref_id) {
            return Err(HsClientError::DuplicateDevice(ref_id));
        }
        let device = Arc::new(device);
        devices.insert(ref_id, Arc::clone(&device));
        tracing::debug!(
            device = %ref_id,
            device_type = device.device_type_string(),
            "device registered"
        );
        Ok(device)
    }

    /// Look up a device by reference id.
    #[must_use]
    pub fn device(&self, ref_id: DeviceRef) -> Option<Arc<HsDevice>> {
        self.read_devices().get(&ref_id).cloned()
    }

    /// All devices, ordered by reference id.
    #[must_use]
    pub fn devices(&self) -> Vec<Arc<HsDevice>> {
        self.read_devices().values().cloned().collect()
    }

    /// Devices whose type string classifies into `category`, ordered by
    /// reference id.
    #[must_use]
    pub fn devices_in_category(&self, category: DeviceCategory) -> Vec<Arc<HsDevice>> {
        self.read_devices()
            .values()
            .filter(|device| {
                DeviceCategory::for_type_string(device.device_type_string()) == category
            })
            .cloned()
            .collect()
    }

    /// Apply a controller update to a device and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`HsClientError::UnknownDevice`] when no record exists under
    /// the given reference id.
    pub fn apply_update(
        &self,
        ref_id: DeviceRef,
        status: impl Into<String>,
        value: f64,
    ) -> Result<(), HsClientError> {
        let device = self
            .device(ref_id)
            .ok_or(HsClientError::UnknownDevice(ref_id))?;
        let status = status.into();
        tracing::debug!(device = %ref_id, status = %status, value, "device update");
        device.update(status, value);
        // Nobody listening is fine; updates are advisory.
        let _ = self.updates.send(ref_id);
        Ok(())
    }

    /// Subscribe to the reference ids of updated devices.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceRef> {
        self.updates.subscribe()
    }

    /// Whether the controller connection is currently considered live.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Flip the connectivity flag, e.g. when the event session drops.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
        tracing::debug!(connected, "connection state changed");
    }

    fn read_devices(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, BTreeMap<DeviceRef, Arc<HsDevice>>> {
        self.devices.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HomeSeerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{
        DEVICE_ZWAVE_BATTERY, DEVICE_ZWAVE_LUMINANCE, DEVICE_ZWAVE_OPERATING_STATE,
        DEVICE_ZWAVE_SENSOR_MULTILEVEL,
    };

    fn device(ref_id: u32, device_type_string: &str) -> HsDevice {
        HsDevice::builder()
            .ref_id(ref_id)
            .name("Device")
            .device_type_string(device_type_string)
            .build()
            .unwrap()
    }

    #[test]
    fn should_add_and_fetch_device() {
        let client = HomeSeerClient::new();
        client.add_device(device(17, DEVICE_ZWAVE_BATTERY)).unwrap();

        let fetched = client.device(DeviceRef::new(17)).unwrap();
        assert_eq!(fetched.device_type_string(), "Z-Wave Battery");
        assert!(client.device(DeviceRef::new(99)).is_none());
    }

    #[test]
    fn should_reject_duplicate_ref() {
        let client = HomeSeerClient::new();
        client.add_device(device(17, DEVICE_ZWAVE_BATTERY)).unwrap();

        let result = client.add_device(device(17, DEVICE_ZWAVE_LUMINANCE));
        assert!(matches!(
            result,
            Err(HsClientError::DuplicateDevice(ref_id)) if ref_id == DeviceRef::new(17)
        ));
    }

    #[test]
    fn should_list_devices_ordered_by_ref() {
        let client = HomeSeerClient::new();
        client.add_device(device(9, DEVICE_ZWAVE_BATTERY)).unwrap();
        client.add_device(device(3, DEVICE_ZWAVE_LUMINANCE)).unwrap();

        let refs: Vec<u32> = client
            .devices()
            .iter()
            .map(|d| d.ref_id().value())
            .collect();
        assert_eq!(refs, vec![3, 9]);
    }

    #[test]
    fn should_filter_devices_by_category() {
        let client = HomeSeerClient::new();
        client.add_device(device(1, DEVICE_ZWAVE_BATTERY)).unwrap();
        client
            .add_device(device(2, DEVICE_ZWAVE_SWITCH_BINARY))
            .unwrap();
        client
            .add_device(device(3, DEVICE_ZWAVE_SENSOR_MULTILEVEL))
            .unwrap();

        let sensors = client.devices_in_category(DeviceCategory::Sensor);
        assert_eq!(sensors.len(), 2);
        let switches = client.devices_in_category(DeviceCategory::Switch);
        assert_eq!(switches.len(), 1);
    }

    #[test]
    fn should_classify_known_type_strings() {
        assert_eq!(
            DeviceCategory::for_type_string(DEVICE_ZWAVE_SWITCH_BINARY),
            DeviceCategory::Switch
        );
        assert_eq!(
            DeviceCategory::for_type_string(DEVICE_ZWAVE_SWITCH_MULTILEVEL),
            DeviceCategory::Light
        );
        assert_eq!(
            DeviceCategory::for_type_string(DEVICE_ZWAVE_DOOR_LOCK),
            DeviceCategory::Lock
        );
        assert_eq!(
            DeviceCategory::for_type_string(DEVICE_ZWAVE_OPERATING_STATE),
            DeviceCategory::Sensor
        );
    }

    #[test]
    fn should_classify_unknown_type_string_as_sensor() {
        assert_eq!(
            DeviceCategory::for_type_string("Z-Wave Thermostat Setpoint"),
            DeviceCategory::Sensor
        );
    }

    #[tokio::test]
    async fn should_notify_subscribers_on_update() {
        let client = HomeSeerClient::new();
        client.add_device(device(17, DEVICE_ZWAVE_BATTERY)).unwrap();
        let mut updates = client.subscribe();

        client.apply_update(DeviceRef::new(17), "40 %", 40.0).unwrap();

        let notified = updates.recv().await.unwrap();
        assert_eq!(notified, DeviceRef::new(17));
        let fetched = client.device(DeviceRef::new(17)).unwrap();
        assert_eq!(fetched.status(), "40 %");
    }

    #[test]
    fn should_error_on_update_for_unknown_device() {
        let client = HomeSeerClient::new();
        let result = client.apply_update(DeviceRef::new(404), "Idle", 0.0);
        assert!(matches!(
            result,
            Err(HsClientError::UnknownDevice(ref_id)) if ref_id == DeviceRef::new(404)
        ));
    }

    #[test]
    fn should_track_connection_state() {
        let client = HomeSeerClient::new();
        assert!(client.is_connected());
        client.set_connected(false);
        assert!(!client.is_connected());
    }
}
