use crate::domain::{AppError, ProjectSpec, library, project_type};
use crate::ports::{GenerateOutcome, ProjectGenerator};
use crate::services::plan::planned_files;

/// Reference generation collaborator: acknowledges the received configuration
/// and reports the planned layout without creating any files.
#[derive(Debug, Default)]
pub struct AnnouncingGenerator;

impl AnnouncingGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectGenerator for AnnouncingGenerator {
    fn generate(&self, spec: &ProjectSpec) -> Result<GenerateOutcome, AppError> {
        let type_name = project_type(spec.project_type).name;

        let message = if spec.libraries.is_empty() {
            format!("Project \"{}\" will be generated as {}", spec.name, type_name)
        } else {
            let names: Vec<&str> = spec.libraries.iter().map(|id| library(*id).name).collect();
            format!(
                "Project \"{}\" will be generated as {} with {}",
                spec.name,
                type_name,
                names.join(", ")
            )
        };

        Ok(GenerateOutcome { message, planned_files: planned_files(spec) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LibraryId, ProjectTypeId};

    #[test]
    fn acknowledgment_names_the_type_and_libraries() {
        let spec = ProjectSpec {
            name: "my-app".to_string(),
            description: String::new(),
            project_type: ProjectTypeId::Nextjs,
            libraries: vec![LibraryId::Prisma, LibraryId::Docker],
        };

        let outcome = AnnouncingGenerator::new().generate(&spec).expect("stub never fails");
        assert_eq!(
            outcome.message,
            "Project \"my-app\" will be generated as Next.js with Prisma, Docker"
        );
        assert!(outcome.planned_files.contains(&"docker-compose.yml".to_string()));
    }

    #[test]
    fn acknowledgment_without_libraries_omits_the_suffix() {
        let spec = ProjectSpec {
            name: "tool".to_string(),
            description: String::new(),
            project_type: ProjectTypeId::TypescriptCli,
            libraries: vec![],
        };

        let outcome = AnnouncingGenerator::new().generate(&spec).expect("stub never fails");
        assert_eq!(outcome.message, "Project \"tool\" will be generated as TypeScript CLI");
    }
}
