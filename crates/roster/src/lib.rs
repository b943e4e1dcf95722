//! The shared library for Roster, an activity sign-up service.
//!
//! This library holds everything the backend and the frontend agree on: the wire
//! data structures, error types, logging setup, the HTTP client used by the
//! frontend and the Yew helper macros.

pub mod api;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;

pub use serde;
pub use serde_json;
pub use tracing;
