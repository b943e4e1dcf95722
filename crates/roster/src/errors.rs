//! Shared error types and utilities for the roster project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the activity directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("{email} is not registered for {activity}")]
    ParticipantNotFound { activity: String, email: String },
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("A participant email is required")]
    InvalidParticipant,
}

impl DirectoryError {
    /// Whether the error means the addressed activity or participant does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ActivityNotFound(_) | Self::ParticipantNotFound { .. }
        )
    }
}
