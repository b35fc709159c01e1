use clap::{Parser, Subcommand};
use launchpad::{AppError, NewProjectOptions, OutputFormat};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(version)]
#[command(
    about = "Configure and scaffold modern development projects",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure a new project through the step-gated wizard
    #[clap(visible_alias = "n")]
    New {
        /// Project name
        #[arg(short, long)]
        name: Option<String>,
        /// Short project description
        #[arg(short, long)]
        description: Option<String>,
        /// Project type identifier (see `launchpad types`)
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,
        /// Add-on library identifier; may be repeated
        #[arg(short = 'l', long = "lib")]
        libraries: Vec<String>,
        /// Output format for the finalized configuration
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the project type catalog
    Types,
    /// List the add-on library catalog
    #[clap(visible_alias = "libs")]
    Libraries {
        /// Only show libraries compatible with this project type
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::New { name, description, project_type, libraries, format } => {
            let options =
                NewProjectOptions { name, description, project_type, libraries, format };
            launchpad::new_project(options).map(|_| ())
        }
        Commands::Types => {
            launchpad::list_types();
            Ok(())
        }
        Commands::Libraries { project_type } => {
            launchpad::list_libraries(project_type.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
