//! # seerhub-domain
//!
//! Pure domain model for the seerhub home automation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Sensor** abstraction (read-only entities whose displayed
//!   attributes are derived from a live device record at observation time)
//! - Define presentation vocabulary: device classes, display units, icons,
//!   entity categories
//! - Define **Events** (registration and state-change records)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod measurement;
pub mod sensor;
