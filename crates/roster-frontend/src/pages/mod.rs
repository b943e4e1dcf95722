//! Page components for different routes in the application.

pub mod home;

pub use home::*;
