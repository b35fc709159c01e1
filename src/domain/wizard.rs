//! The wizard controller: a four-step, gated configuration flow.
//!
//! The controller owns the in-memory configuration draft and the step pointer.
//! Forward movement is gated per step; retreat is always allowed and never
//! discards field values. The draft is snapshotted into a [`ProjectSpec`] at
//! the review step for handoff to the generation collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::catalog::{self, Library, LibraryId, ProjectTypeId};

/// Steps of the configuration wizard, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    ProjectInfo,
    ProjectType,
    Libraries,
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::ProjectInfo,
        WizardStep::ProjectType,
        WizardStep::Libraries,
        WizardStep::Review,
    ];

    /// 1-based step number for display.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    /// Total number of steps.
    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// Display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::ProjectInfo => "Project Info",
            WizardStep::ProjectType => "Project Type",
            WizardStep::Libraries => "Libraries",
            WizardStep::Review => "Review",
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::ProjectInfo => Some(WizardStep::ProjectType),
            WizardStep::ProjectType => Some(WizardStep::Libraries),
            WizardStep::Libraries => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::ProjectInfo => None,
            WizardStep::ProjectType => Some(WizardStep::ProjectInfo),
            WizardStep::Libraries => Some(WizardStep::ProjectType),
            WizardStep::Review => Some(WizardStep::Libraries),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// The in-progress configuration draft, mutated field-by-field across steps.
///
/// `libraries` has set semantics: membership is checked on toggle, so
/// duplicates are impossible. Order follows toggle history and is not
/// significant; a removed-then-re-added id lands at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub project_type: Option<ProjectTypeId>,
    pub libraries: Vec<LibraryId>,
}

/// Immutable snapshot of a completed configuration, handed to the generation
/// collaborator at finalize time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: ProjectTypeId,
    pub libraries: Vec<LibraryId>,
}

/// The wizard controller.
#[derive(Debug, Default)]
pub struct Wizard {
    config: ProjectConfig,
    step: WizardStep,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current configuration draft.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Replace the project name verbatim, whitespace included. Emptiness of
    /// the trimmed value only affects the Project Info gate.
    pub fn set_name(&mut self, name: &str) {
        self.config.name = name.to_string();
    }

    /// Replace the project description verbatim. Never validated.
    pub fn set_description(&mut self, description: &str) {
        self.config.description = description.to_string();
    }

    /// Select a project type. Always clears the library selection, even when
    /// re-selecting the current type: previously selected libraries may not be
    /// compatible with the new type.
    pub fn select_type(&mut self, id: ProjectTypeId) {
        self.config.project_type = Some(id);
        self.config.libraries.clear();
    }

    /// Flip membership of a library in the selection. Compatibility is not
    /// checked here; callers offer only entries from [`compatible_libraries`].
    ///
    /// [`compatible_libraries`]: Wizard::compatible_libraries
    pub fn toggle_library(&mut self, id: LibraryId) {
        if let Some(position) = self.config.libraries.iter().position(|lib| *lib == id) {
            self.config.libraries.remove(position);
        } else {
            self.config.libraries.push(id);
        }
    }

    /// Libraries compatible with the current project type, in catalog order.
    /// Empty while the type is unset.
    pub fn compatible_libraries(&self) -> Vec<&'static Library> {
        match self.config.project_type {
            Some(ty) => {
                catalog::LIBRARIES.iter().filter(|lib| lib.is_compatible_with(ty)).collect()
            }
            None => Vec::new(),
        }
    }

    /// Gating predicate: may the wizard move forward past `step`?
    pub fn can_advance(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ProjectInfo => !self.config.name.trim().is_empty(),
            WizardStep::ProjectType => self.config.project_type.is_some(),
            // Library selection is optional.
            WizardStep::Libraries => true,
            WizardStep::Review => false,
        }
    }

    /// Move forward one step if the current gate holds. Returns whether the
    /// wizard moved.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) if self.can_advance(self.step) => {
                self.step = next;
                true
            }
            _ => false,
        }
    }

    /// Move back one step. Retreat is always allowed and preserves all field
    /// values. Returns whether the wizard moved.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Jump to `target`. Backward jumps are unconditional; forward jumps
    /// require every intervening gate to hold.
    pub fn go_to_step(&mut self, target: WizardStep) -> Result<(), AppError> {
        let mut gate = self.step;
        while gate < target {
            if !self.can_advance(gate) {
                return Err(AppError::StepIncomplete { step: gate });
            }
            match gate.next() {
                Some(next) => gate = next,
                None => break,
            }
        }
        self.step = target;
        Ok(())
    }

    /// Snapshot the draft for handoff to the generation collaborator. Only
    /// valid at the Review step.
    pub fn finalize(&self) -> Result<ProjectSpec, AppError> {
        if self.step != WizardStep::Review {
            return Err(AppError::StepIncomplete { step: WizardStep::Review });
        }
        let project_type = self
            .config
            .project_type
            .ok_or(AppError::StepIncomplete { step: WizardStep::ProjectType })?;

        Ok(ProjectSpec {
            name: self.config.name.clone(),
            description: self.config.description.clone(),
            project_type,
            libraries: self.config.libraries.clone(),
        })
    }
}
