//! Context providers for shared application state and services.

pub mod api;
