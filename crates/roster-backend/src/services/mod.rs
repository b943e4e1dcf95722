//! Backend services for the activity directory.
//!
//! This module provides the service layer abstraction for listing activities and
//! managing their participants, the in-memory implementation the server runs on,
//! and the seed data it starts from.

pub mod activities;
pub mod seed;

pub use activities::*;
