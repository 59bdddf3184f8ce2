use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid navigation tree: {0}")]
    InvalidNavigation(String),

    #[error("Invalid machine name: {0}")]
    InvalidMachineName(String),

    #[error("Machine name already in use: {0}")]
    DuplicateMachine(String),

    #[error("Unknown pairing totem")]
    UnknownTotem,

    #[error("Pairing totem expired for machine: {0}")]
    TotemExpired(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Machine not found: {0}")]
    MachineNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
