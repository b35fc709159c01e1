use std::io;

use thiserror::Error;

use crate::domain::wizard::WizardStep;

/// Library-wide error type for launchpad operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project type identifier is not in the catalog.
    #[error("Unknown project type '{name}'. Available: {available}")]
    UnknownProjectType { name: String, available: String },

    /// Library identifier is not in the catalog.
    #[error("Unknown library '{name}'. Available: {available}")]
    UnknownLibrary { name: String, available: String },

    /// Library is not compatible with the selected project type.
    #[error("Library '{library}' is not compatible with project type '{project_type}'")]
    IncompatibleLibrary { library: String, project_type: String },

    /// A step gate is not satisfied for the requested transition.
    #[error("The {step} step is not complete")]
    StepIncomplete { step: WizardStep },

    /// JSON encoding of the project spec failed.
    #[error("Failed to encode project spec as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML encoding of the project spec failed.
    #[error("Failed to encode project spec as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
