//! Reusable UI components for the Roster frontend.

pub mod activity_card;
pub mod signup_form;
pub mod status_message;

pub use activity_card::*;
pub use signup_form::*;
pub use status_message::*;
