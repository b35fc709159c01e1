use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::app::AppContext;
use crate::domain::{AppError, PROJECT_TYPES, Wizard, WizardStep, library, project_type};
use crate::ports::ProjectGenerator;

use super::outcome::{NewOutcome, OutputFormat};
use super::report;

/// Run the interactive wizard loop, driving the controller one step at a time.
pub(super) fn run_wizard<G: ProjectGenerator>(
    ctx: &AppContext<G>,
    format: OutputFormat,
) -> Result<NewOutcome, AppError> {
    println!("🚀 Dev Launchpad");
    println!("Rapidly scaffold modern development projects with pre-configured libraries.");

    let mut wizard = Wizard::new();

    loop {
        match wizard.step() {
            WizardStep::ProjectInfo => prompt_project_info(&mut wizard)?,
            WizardStep::ProjectType => prompt_project_type(&mut wizard)?,
            WizardStep::Libraries => prompt_libraries(&mut wizard)?,
            WizardStep::Review => match review(&wizard)? {
                ReviewChoice::Generate => {
                    let spec = wizard.finalize()?;
                    let outcome = ctx.generator().generate(&spec)?;
                    report(&spec, &outcome, format)?;
                    return Ok(NewOutcome::Generated(spec));
                }
                ReviewChoice::Revisit(step) => {
                    // Retreat is unconditional; field values survive.
                    wizard.go_to_step(step)?;
                }
                ReviewChoice::Cancel => {
                    println!("Cancelled; nothing was generated.");
                    return Ok(NewOutcome::Cancelled);
                }
            },
        }
    }
}

enum ReviewChoice {
    Generate,
    Revisit(WizardStep),
    Cancel,
}

fn prompt_project_info(wizard: &mut Wizard) -> Result<(), AppError> {
    print_step_header(WizardStep::ProjectInfo, "Let's start by setting up your project details");

    loop {
        let name: String = Input::new()
            .with_prompt("Project name")
            .with_initial_text(wizard.config().name.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Name prompt failed: {e}")))?;

        wizard.set_name(&name);
        if wizard.can_advance(WizardStep::ProjectInfo) {
            break;
        }
        println!("Project name cannot be empty.");
    }

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .with_initial_text(wizard.config().description.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Description prompt failed: {e}")))?;
    wizard.set_description(&description);

    wizard.advance();
    Ok(())
}

fn prompt_project_type(wizard: &mut Wizard) -> Result<(), AppError> {
    print_step_header(WizardStep::ProjectType, "Select the type of project you want to create");

    let items: Vec<String> = PROJECT_TYPES
        .iter()
        .map(|ty| format!("{} {} - {}", ty.glyph, ty.name, ty.description))
        .collect();
    let default = wizard.config().project_type.map(|id| id as usize).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Project type")
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| AppError::config_error(format!("Project type selection failed: {e}")))?;

    wizard.select_type(PROJECT_TYPES[selection].id);
    wizard.advance();
    Ok(())
}

fn prompt_libraries(wizard: &mut Wizard) -> Result<(), AppError> {
    print_step_header(WizardStep::Libraries, "Choose additional libraries to include");

    let compatible = wizard.compatible_libraries();
    if compatible.is_empty() {
        println!("No additional libraries available for this project type.");
    } else {
        let items: Vec<String> = compatible
            .iter()
            .map(|lib| format!("{} {} - {}", lib.glyph, lib.name, lib.description))
            .collect();
        let defaults: Vec<bool> = compatible
            .iter()
            .map(|lib| wizard.config().libraries.contains(&lib.id))
            .collect();

        let picked = MultiSelect::new()
            .with_prompt("Libraries (space to toggle, enter to confirm)")
            .items(&items)
            .defaults(&defaults)
            .interact()
            .map_err(|e| AppError::config_error(format!("Library selection failed: {e}")))?;

        // Reconcile the picked set against the current selection with toggles.
        for (index, lib) in compatible.iter().enumerate() {
            let selected = wizard.config().libraries.contains(&lib.id);
            if picked.contains(&index) != selected {
                wizard.toggle_library(lib.id);
            }
        }
    }

    wizard.advance();
    Ok(())
}

fn review(wizard: &Wizard) -> Result<ReviewChoice, AppError> {
    print_step_header(WizardStep::Review, "Review your project configuration before generation");

    let config = wizard.config();
    println!("Name:        {}", config.name);
    if !config.description.is_empty() {
        println!("Description: {}", config.description);
    }
    if let Some(ty) = config.project_type {
        println!("Type:        {}", project_type(ty).name);
    }
    if config.libraries.is_empty() {
        println!("Libraries:   none");
    } else {
        let names: Vec<&str> = config.libraries.iter().map(|id| library(*id).name).collect();
        println!("Libraries:   {}", names.join(", "));
    }
    println!();

    let generate = Confirm::new()
        .with_prompt("Generate project?")
        .default(true)
        .interact()
        .map_err(|e| AppError::config_error(format!("Confirmation failed: {e}")))?;
    if generate {
        return Ok(ReviewChoice::Generate);
    }

    let actions = ["Edit project info", "Change project type", "Adjust libraries", "Cancel"];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&actions)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Selection failed: {e}")))?;

    Ok(match selection {
        0 => ReviewChoice::Revisit(WizardStep::ProjectInfo),
        1 => ReviewChoice::Revisit(WizardStep::ProjectType),
        2 => ReviewChoice::Revisit(WizardStep::Libraries),
        _ => ReviewChoice::Cancel,
    })
}

fn print_step_header(step: WizardStep, blurb: &str) {
    println!();
    println!("Step {}/{}: {}", step.number(), WizardStep::total(), step.title());
    println!("{blurb}");
}
