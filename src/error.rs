use thiserror::Error;

use crate::model::EntityKind;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("{kind} referenced by '{field}' not found: {id}")]
    ReferenceNotFound {
        kind: EntityKind,
        field: &'static str,
        id: String,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("{from}.{field} points at a missing record: {id}")]
    DanglingReference {
        from: EntityKind,
        field: &'static str,
        id: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'farmgraph init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl FarmError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FarmError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        FarmError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Stable machine-readable code, surfaced in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            FarmError::Validation { .. } => "VALIDATION_FAILED",
            FarmError::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            FarmError::NotFound { .. } => "NOT_FOUND",
            FarmError::DanglingReference { .. } => "DANGLING_REFERENCE",
            FarmError::Config(_) | FarmError::NotInitialized | FarmError::AlreadyInitialized(_) => {
                "CONFIG_ERROR"
            }
            FarmError::Storage(_)
            | FarmError::Io(_)
            | FarmError::Yaml(_)
            | FarmError::Json(_) => "STORAGE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmError>;
