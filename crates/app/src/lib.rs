//! # seerhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement or receive:
//!   - `EventPublisher` — publish domain events
//!   - `Integration` — lifecycle of a device integration
//!   - `IntegrationContext` — what an integration may ask of the hub
//! - Provide the **sensor registry** use-cases: register discovered sensors,
//!   snapshot them on demand, and announce state changes
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* devices are reached
//!
//! ## Dependency rule
//! Depends on `seerhub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
