//! Demo inventory.
//!
//! Seeds the in-process client with a representative set of device records so
//! the daemon has live entities without a controller connection. One record
//! per supported sensor kind, plus a switch and an unrecognised type to show
//! category filtering and the status fallback.

use seerhub_hs_client::device::{
    DEVICE_ZWAVE_BATTERY, DEVICE_ZWAVE_DOOR_LOCK_LOGGING, DEVICE_ZWAVE_ELECTRIC_METER,
    DEVICE_ZWAVE_FAN_STATE, DEVICE_ZWAVE_LUMINANCE, DEVICE_ZWAVE_OPERATING_STATE,
    DEVICE_ZWAVE_RELATIVE_HUMIDITY, DEVICE_ZWAVE_SENSOR_MULTILEVEL, DEVICE_ZWAVE_SWITCH_BINARY,
};
use seerhub_hs_client::{HomeSeerClient, HsClientError, HsDevice};

/// Register the demo device records with the client.
///
/// # Errors
///
/// Returns an error when a record is invalid or a reference id repeats; both
/// would be a mistake in the list below.
pub fn seed(client: &HomeSeerClient) -> Result<(), HsClientError> {
    let records = [
        (17, "Battery", "Bedroom", "Upstairs", DEVICE_ZWAVE_BATTERY, "45 %", 45.0),
        (21, "Humidity", "Bathroom", "Upstairs", DEVICE_ZWAVE_RELATIVE_HUMIDITY, "62 %", 62.0),
        (23, "Temperature", "Living Room", "", DEVICE_ZWAVE_SENSOR_MULTILEVEL, "21.5 C", 21.5),
        (28, "Luminance", "Living Room", "", DEVICE_ZWAVE_LUMINANCE, "312 Lux", 312.0),
        (31, "Electric Meter", "Garage", "", DEVICE_ZWAVE_ELECTRIC_METER, "1.54 kWh", 1.54),
        (35, "Fan State", "Hallway", "", DEVICE_ZWAVE_FAN_STATE, "Off", 0.0),
        (36, "Operating State", "Hallway", "", DEVICE_ZWAVE_OPERATING_STATE, "Idle", 0.0),
        (40, "Lock Logging", "Entry", "", DEVICE_ZWAVE_DOOR_LOCK_LOGGING, "Locked by Keypad", 0.0),
        (44, "Setpoint", "Hallway", "", "Z-Wave Thermostat Setpoint", "20.0 C", 20.0),
        (50, "Lamp", "Living Room", "", DEVICE_ZWAVE_SWITCH_BINARY, "On", 100.0),
    ];
    for (ref_id, name, location, location2, device_type_string, status, value) in records {
        let device = HsDevice::builder()
            .ref_id(ref_id)
            .name(name)
            .location(location)
            .location2(location2)
            .device_type_string(device_type_string)
            .status(status)
            .value(value)
            .build()?;
        client.add_device(device)?;
    }
    tracing::info!(count = client.devices().len(), "demo inventory seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use seerhub_hs_client::DeviceCategory;

    use super::*;

    #[test]
    fn should_seed_demo_inventory() {
        let client = HomeSeerClient::new();
        seed(&client).unwrap();

        assert_eq!(client.devices().len(), 10);
        assert_eq!(client.devices_in_category(DeviceCategory::Sensor).len(), 9);
        assert_eq!(client.devices_in_category(DeviceCategory::Switch).len(), 1);
    }

    #[test]
    fn should_seed_each_record_once() {
        let client = HomeSeerClient::new();
        seed(&client).unwrap();
        assert!(matches!(
            seed(&client),
            Err(HsClientError::DuplicateDevice(_))
        ));
    }
}
