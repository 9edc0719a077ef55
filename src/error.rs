use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to parse contacts data: {0}")]
    ContactsParse(#[from] serde_json::Error),

    // Store-level errors for mutations against unknown documents
    #[error("Person not found: {id}")]
    PersonNotFound { id: String },

    #[error("Group not found: {id}")]
    GroupNotFound { id: String },

    #[error("Group is not empty: {id} still has {person_count} persons")]
    GroupNotEmpty { id: String, person_count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("{0}")]
    #[allow(dead_code)] // Kept for callers that need a free-form error
    Custom(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a person-not-found error for a store mutation
    pub fn person_not_found(id: impl Into<String>) -> Self {
        Self::PersonNotFound { id: id.into() }
    }

    /// Create a group-not-found error for a store mutation
    pub fn group_not_found(id: impl Into<String>) -> Self {
        Self::GroupNotFound { id: id.into() }
    }
}
