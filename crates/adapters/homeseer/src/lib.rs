//! # seerhub-adapter-homeseer
//!
//! HomeSeer integration — exposes the sensor-category devices of a HomeSeer
//! controller as hub sensors.
//!
//! ## How it works
//!
//! The client crate owns the device records and keeps them current. On
//! setup, this adapter enumerates the sensor-category records, wraps each in
//! a [`HomeSeerSensor`] whose variant is picked from the controller type
//! string, and registers the batch through the integration context. That is
//! the adapter's whole job: it spawns no tasks and caches no state. Sensors
//! read the live record on every observation, and the daemon follows the
//! client's update feed to decide when to re-observe.
//!
//! ## Dependency rule
//!
//! Depends on `seerhub-app` (port traits), `seerhub-domain`, and
//! `seerhub-hs-client`.

pub mod sensor;

pub use sensor::{HomeSeerSensor, SensorVariant};

use std::sync::Arc;

use seerhub_app::ports::integration::{Integration, IntegrationContext};
use seerhub_domain::error::HubError;
use seerhub_domain::sensor::Sensor;
use seerhub_hs_client::client::{DeviceCategory, HomeSeerClient};
use seerhub_hs_client::device::DeviceRef;

/// Hub-wide unique id for a controller reference id.
#[must_use]
pub fn unique_id_for_ref(ref_id: DeviceRef) -> String {
    format!("homeseer-{ref_id}")
}

/// HomeSeer integration wired to one client instance.
pub struct HomeSeerIntegration {
    client: Arc<HomeSeerClient>,
}

impl HomeSeerIntegration {
    /// Create a new integration over an already-populated client.
    #[must_use]
    pub fn new(client: Arc<HomeSeerClient>) -> Self {
        Self { client }
    }
}

impl Integration for HomeSeerIntegration {
    fn name(&self) -> &'static str {
        "homeseer"
    }

    async fn setup(&mut self, ctx: &impl IntegrationContext) -> Result<(), HubError> {
        let devices = self.client.devices_in_category(DeviceCategory::Sensor);
        let mut sensors: Vec<Box<dyn Sensor>> = Vec::with_capacity(devices.len());

        for device in devices {
            let sensor = HomeSeerSensor::new(device, Arc::clone(&self.client));
            tracing::info!(
                unique_id = %sensor.unique_id(),
                name = %sensor.name(),
                variant = ?sensor.variant(),
                "added HomeSeer sensor-type device"
            );
            sensors.push(Box::new(sensor));
        }

        let count = ctx.add_sensors(sensors).await?;
        tracing::info!(count, "HomeSeer sensor discovery complete");
        Ok(())
    }

    async fn teardown(&mut self) -> Result<(), HubError> {
        tracing::info!("HomeSeer integration stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use seerhub_domain::error::ValidationError;
    use seerhub_domain::event::Event;
    use seerhub_hs_client::device::{
        DEVICE_ZWAVE_BATTERY, DEVICE_ZWAVE_SENSOR_MULTILEVEL, DEVICE_ZWAVE_SWITCH_BINARY,
        HsDevice,
    };

    /// Context double that records the unique ids handed to it.
    #[derive(Default)]
    struct StubContext {
        added: Arc<Mutex<Vec<String>>>,
        reject: bool,
    }

    impl IntegrationContext for StubContext {
        fn add_sensors(
            &self,
            sensors: Vec<Box<dyn Sensor>>,
        ) -> impl Future<Output = Result<usize, HubError>> + Send {
            let result = if self.reject {
                Err(ValidationError::DuplicateUniqueId("homeseer-17".to_string()).into())
            } else {
                let mut added = self.added.lock().unwrap();
                for sensor in &sensors {
                    added.push(sensor.unique_id());
                }
                Ok(sensors.len())
            };
            async move { result }
        }

        fn publish(&self, _event: Event) -> impl Future<Output = Result<(), HubError>> + Send {
            async { Ok(()) }
        }
    }

    fn seeded_client() -> Arc<HomeSeerClient> {
        let client = Arc::new(HomeSeerClient::new());
        client
            .add_device(
                HsDevice::builder()
                    .ref_id(17)
                    .name("Battery")
                    .device_type_string(DEVICE_ZWAVE_BATTERY)
                    .status("45 %")
                    .value(45.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        client
            .add_device(
                HsDevice::builder()
                    .ref_id(21)
                    .name("Temperature")
                    .device_type_string(DEVICE_ZWAVE_SENSOR_MULTILEVEL)
                    .status("21.5 C")
                    .value(21.5)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        client
            .add_device(
                HsDevice::builder()
                    .ref_id(30)
                    .name("Switch")
                    .device_type_string(DEVICE_ZWAVE_SWITCH_BINARY)
                    .status("Off")
                    .value(0.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        client
    }

    #[test]
    fn should_format_unique_id_from_ref() {
        assert_eq!(unique_id_for_ref(DeviceRef::new(204)), "homeseer-204");
    }

    #[tokio::test]
    async fn should_register_only_sensor_category_devices() {
        let mut integration = HomeSeerIntegration::new(seeded_client());
        let ctx = StubContext::default();

        integration.setup(&ctx).await.unwrap();

        let added = ctx.added.lock().unwrap().clone();
        assert_eq!(added, vec!["homeseer-17", "homeseer-21"]);
    }

    #[tokio::test]
    async fn should_propagate_registration_failures() {
        let mut integration = HomeSeerIntegration::new(seeded_client());
        let ctx = StubContext {
            reject: true,
            ..StubContext::default()
        };

        let result = integration.setup(&ctx).await;
        assert!(matches!(result, Err(HubError::Validation(_))));
    }

    #[tokio::test]
    async fn should_name_integration_homeseer() {
        let integration = HomeSeerIntegration::new(Arc::new(HomeSeerClient::new()));
        assert_eq!(integration.name(), "homeseer");
    }

    #[tokio::test]
    async fn should_teardown_cleanly() {
        let mut integration = HomeSeerIntegration::new(seeded_client());
        assert!(integration.teardown().await.is_ok());
    }
}
