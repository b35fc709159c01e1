mod interactive;
mod outcome;

use std::io::IsTerminal;

use crate::app::AppContext;
use crate::domain::{
    AppError, ProjectSpec, Wizard, WizardStep, resolve_library, resolve_project_type,
};
use crate::ports::{GenerateOutcome, ProjectGenerator};

use interactive::run_wizard;
pub use outcome::{NewOutcome, OutputFormat};

/// Options for the `new` command.
#[derive(Debug, Default)]
pub struct NewProjectOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Project type identifier string, resolved against the catalog.
    pub project_type: Option<String>,
    /// Library identifier strings, resolved and compatibility-checked.
    pub libraries: Vec<String>,
    pub format: OutputFormat,
}

impl NewProjectOptions {
    fn has_selection_flags(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.project_type.is_some()
            || !self.libraries.is_empty()
    }
}

/// Execute the `new` command.
///
/// With no selection flags and a TTY, runs the interactive wizard. Otherwise
/// the configuration is built from flags, with name and type required.
pub fn execute<G: ProjectGenerator>(
    ctx: &AppContext<G>,
    options: NewProjectOptions,
) -> Result<NewOutcome, AppError> {
    if !options.has_selection_flags() {
        if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
            return Err(AppError::config_error(
                "Interactive wizard requires a TTY. Provide --name and --type (and --lib for add-on libraries).",
            ));
        }
        return run_wizard(ctx, options.format);
    }

    configure_from_flags(ctx, options)
}

/// Non-interactive path: drive the wizard controller straight through with
/// flag values, so the same gating and compatibility rules apply.
fn configure_from_flags<G: ProjectGenerator>(
    ctx: &AppContext<G>,
    options: NewProjectOptions,
) -> Result<NewOutcome, AppError> {
    let name = options
        .name
        .ok_or_else(|| AppError::config_error("--name is required when running non-interactively"))?;
    let type_arg = options
        .project_type
        .ok_or_else(|| AppError::config_error("--type is required when running non-interactively"))?;
    let project_type = resolve_project_type(&type_arg)?;

    let mut wizard = Wizard::new();
    wizard.set_name(&name);
    if let Some(description) = options.description {
        wizard.set_description(&description);
    }
    if !wizard.advance() {
        return Err(AppError::config_error("Project name cannot be empty"));
    }

    wizard.select_type(project_type);
    for lib_arg in &options.libraries {
        let lib = resolve_library(lib_arg)?;
        if !wizard.compatible_libraries().iter().any(|entry| entry.id == lib) {
            return Err(AppError::IncompatibleLibrary {
                library: lib.id().to_string(),
                project_type: project_type.id().to_string(),
            });
        }
        wizard.toggle_library(lib);
    }
    wizard.go_to_step(WizardStep::Review)?;

    let spec = wizard.finalize()?;
    let outcome = ctx.generator().generate(&spec)?;
    report(&spec, &outcome, options.format)?;
    Ok(NewOutcome::Generated(spec))
}

/// Print the finalized configuration in the requested format.
fn report(
    spec: &ProjectSpec,
    outcome: &GenerateOutcome,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            println!("✅ {}", outcome.message);
            println!();
            println!("Planned layout:");
            println!("  {}/", spec.name);
            for file in &outcome.planned_files {
                println!("    {file}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(spec)?),
        OutputFormat::Toml => println!("{}", toml::to_string_pretty(spec)?),
    }
    Ok(())
}
