//! # seerhub-hs-client
//!
//! In-process client for a HomeSeer HS3 controller: the device-registry half
//! of the bridge. It owns the canonical [`HsDevice`] records, classifies them
//! into categories from the controller type string, and fans out update
//! notifications on a broadcast channel.
//!
//! ## Responsibilities
//!
//! - Hold device records keyed by their controller reference id
//! - Derive unit codes from the tail token of a device status string
//! - Apply status/value updates and notify subscribers
//!
//! ## Dependency rule
//!
//! This crate stands alone. Controller transport (HTTP polling, ASCII event
//! sessions) is out of scope, and nothing here depends on the hub's domain
//! or application layers.

pub mod client;
pub mod device;
pub mod error;
pub mod uom;

pub use client::{DeviceCategory, HomeSeerClient};
pub use device::{DeviceRef, HsDevice};
pub use error::{HsClientError, InvalidDevice};
pub use uom::{UnitCode, uom_from_status};
