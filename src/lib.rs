//! launchpad: Configure new development projects through a step-gated wizard
//! and hand the result to a generation collaborator.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::{
    AppContext,
    commands::{list, new},
};

pub use app::commands::new::{NewOutcome, NewProjectOptions, OutputFormat};
pub use domain::{
    AppError, LIBRARIES, Library, LibraryId, PROJECT_TYPES, ProjectConfig, ProjectSpec,
    ProjectType, ProjectTypeId, Wizard, WizardStep,
};
pub use ports::{GenerateOutcome, ProjectGenerator};
pub use services::AnnouncingGenerator;

/// Configure a new project: interactive wizard when no selection flags are
/// given, flag-driven otherwise.
///
/// Returns a `NewOutcome` describing whether a configuration was handed to
/// the generation collaborator.
pub fn new_project(options: NewProjectOptions) -> Result<NewOutcome, AppError> {
    let ctx = AppContext::new(AnnouncingGenerator::new());
    new::execute(&ctx, options)
}

/// Print the project type catalog.
pub fn list_types() {
    list::print_types();
}

/// Print the add-on library catalog, optionally restricted to the set
/// compatible with one project type.
pub fn list_libraries(type_filter: Option<&str>) -> Result<(), AppError> {
    let project_type = type_filter.map(domain::resolve_project_type).transpose()?;
    list::print_libraries(project_type);
    Ok(())
}
