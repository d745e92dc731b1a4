//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HubError`]
//! at port boundaries via `#[from]` — no stringly-typed variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced object does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A bridge/client library failure crossing a port boundary.
    #[error("bridge error")]
    Bridge(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An object was built without a name.
    #[error("name must not be empty")]
    EmptyName,

    /// A sensor was registered without a unique id.
    #[error("unique id must not be empty")]
    EmptyUniqueId,

    /// A sensor with this unique id is already registered.
    #[error("unique id {0:?} is already registered")]
    DuplicateUniqueId(String),
}

/// A lookup failed because the object does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of object looked up (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}
