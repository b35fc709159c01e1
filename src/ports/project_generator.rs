use crate::domain::{AppError, ProjectSpec};

/// Result of handing a finalized configuration to a generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Human-readable acknowledgment of the received configuration.
    pub message: String,
    /// Paths the collaborator would create, relative to the project root.
    pub planned_files: Vec<String>,
}

/// Port for the generation collaborator invoked after the review step.
///
/// The reference implementation only acknowledges the spec; a real
/// collaborator would render templates and create the file tree.
pub trait ProjectGenerator {
    /// Hand off a finalized configuration.
    fn generate(&self, spec: &ProjectSpec) -> Result<GenerateOutcome, AppError>;
}
