//! Client error types.

use crate::device::DeviceRef;

/// Errors raised by the HomeSeer client.
#[derive(Debug, thiserror::Error)]
pub enum HsClientError {
    /// No device is registered under the given reference id.
    #[error("device {0} not found")]
    UnknownDevice(DeviceRef),

    /// A device with the same reference id is already registered.
    #[error("device {0} already registered")]
    DuplicateDevice(DeviceRef),

    /// A device record failed validation at build time.
    #[error("invalid device record")]
    Invalid(#[source] InvalidDevice),
}

/// Details about why a device record could not be built.
#[derive(Debug, thiserror::Error)]
pub enum InvalidDevice {
    /// Every record needs the controller-assigned reference id.
    #[error("reference id is required")]
    MissingRef,

    /// The device name must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The controller type string must not be empty.
    #[error("device type string must not be empty")]
    EmptyTypeString,
}

impl From<InvalidDevice> for HsClientError {
    fn from(err: InvalidDevice) -> Self {
        Self::Invalid(err)
    }
}
