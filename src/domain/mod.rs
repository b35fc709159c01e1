pub mod catalog;
pub mod error;
pub mod wizard;

pub use catalog::{
    LIBRARIES, Library, LibraryId, PROJECT_TYPES, ProjectType, ProjectTypeId, library,
    project_type, resolve_library, resolve_project_type,
};
pub use error::AppError;
pub use wizard::{ProjectConfig, ProjectSpec, Wizard, WizardStep};
