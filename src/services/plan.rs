//! Planned file layout derived from a finalized configuration.

use crate::domain::{LibraryId, ProjectSpec, ProjectTypeId};

/// Relative paths the generator would create for `spec`, in listing order.
///
/// Pure function of the spec. The Prisma + Docker bundle implies the files of
/// both of its constituents.
pub fn planned_files(spec: &ProjectSpec) -> Vec<String> {
    let mut files =
        vec!["package.json".to_string(), "tsconfig.json".to_string(), "README.md".to_string()];

    if spec.project_type == ProjectTypeId::Nextjs {
        files.push("src/".to_string());
        files.push("tailwind.config.js".to_string());
        files.push("next.config.js".to_string());
    }

    let selected = |id: LibraryId| spec.libraries.contains(&id);

    if selected(LibraryId::Prisma) || selected(LibraryId::PrismaDocker) {
        files.push("prisma/schema.prisma".to_string());
        files.push("prisma/seed.ts".to_string());
    }
    if selected(LibraryId::Docker) || selected(LibraryId::PrismaDocker) {
        files.push("docker-compose.yml".to_string());
    }

    files
}
