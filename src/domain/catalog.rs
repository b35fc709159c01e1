//! Static project type and library catalogs.
//!
//! Both catalogs are closed, compile-time tables: every selectable option is a
//! variant of an identifier enum with an associated catalog row. Out-of-catalog
//! identifiers are rejected at the parsing boundary, never stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Identifier for a project type in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectTypeId {
    Nextjs,
    TypescriptCli,
}

impl ProjectTypeId {
    /// All project types in catalog order.
    pub const ALL: [ProjectTypeId; 2] = [ProjectTypeId::Nextjs, ProjectTypeId::TypescriptCli];

    /// Stable string identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ProjectTypeId::Nextjs => "nextjs",
            ProjectTypeId::TypescriptCli => "typescript-cli",
        }
    }

    /// Parse an identifier string.
    pub fn from_id(id: &str) -> Option<ProjectTypeId> {
        match id {
            "nextjs" => Some(ProjectTypeId::Nextjs),
            "typescript-cli" => Some(ProjectTypeId::TypescriptCli),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Identifier for an add-on library in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryId {
    Prisma,
    Docker,
    PrismaDocker,
}

impl LibraryId {
    /// All libraries in catalog order.
    pub const ALL: [LibraryId; 3] = [LibraryId::Prisma, LibraryId::Docker, LibraryId::PrismaDocker];

    /// Stable string identifier.
    pub fn id(&self) -> &'static str {
        match self {
            LibraryId::Prisma => "prisma",
            LibraryId::Docker => "docker",
            LibraryId::PrismaDocker => "prisma-docker",
        }
    }

    /// Parse an identifier string.
    pub fn from_id(id: &str) -> Option<LibraryId> {
        match id {
            "prisma" => Some(LibraryId::Prisma),
            "docker" => Some(LibraryId::Docker),
            "prisma-docker" => Some(LibraryId::PrismaDocker),
            _ => None,
        }
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Static catalog entry describing a project type.
#[derive(Debug)]
pub struct ProjectType {
    pub id: ProjectTypeId,
    /// Human-readable display name.
    pub name: &'static str,
    pub description: &'static str,
    /// Feature labels rendered as badges by the presentation layer.
    pub features: &'static [&'static str],
    /// Presentation glyph shown next to the name.
    pub glyph: &'static str,
}

/// Static catalog entry describing an add-on library.
#[derive(Debug)]
pub struct Library {
    pub id: LibraryId,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub glyph: &'static str,
    /// Project types this library may be selected for.
    pub compatible_with: &'static [ProjectTypeId],
}

impl Library {
    pub fn is_compatible_with(&self, project_type: ProjectTypeId) -> bool {
        self.compatible_with.contains(&project_type)
    }
}

/// The project type catalog. Rows are laid out in `ProjectTypeId::ALL` order.
pub const PROJECT_TYPES: [ProjectType; 2] = [
    ProjectType {
        id: ProjectTypeId::Nextjs,
        name: "Next.js",
        description: "Modern React framework with App Router, TypeScript, and Tailwind CSS",
        features: &["TypeScript", "Tailwind CSS", "App Router", "API Routes", "ESLint", "Turbopack"],
        glyph: "🌐",
    },
    ProjectType {
        id: ProjectTypeId::TypescriptCli,
        name: "TypeScript CLI",
        description: "Command-line application with TypeScript and Commander.js",
        features: &["TypeScript", "Commander.js", "Build System", "Development Tools"],
        glyph: "💻",
    },
];

/// The library catalog. Rows are laid out in `LibraryId::ALL` order.
pub const LIBRARIES: [Library; 3] = [
    Library {
        id: LibraryId::Prisma,
        name: "Prisma",
        description: "Database ORM with PostgreSQL, pre-configured schema, and seeder",
        features: &["PostgreSQL Setup", "User & Post Models", "Database Seeder", "Migration Scripts"],
        glyph: "🗄️",
        compatible_with: &[ProjectTypeId::Nextjs],
    },
    Library {
        id: LibraryId::Docker,
        name: "Docker",
        description: "Containerized development environment",
        features: &["Docker Compose", "PostgreSQL Container", "Environment Variables"],
        glyph: "🐳",
        compatible_with: &[ProjectTypeId::Nextjs],
    },
    Library {
        id: LibraryId::PrismaDocker,
        name: "Prisma + Docker",
        description: "Complete database setup with Prisma ORM and Docker containers",
        features: &["All Prisma Features", "Docker Compose", "Containerized Database"],
        glyph: "🧩",
        compatible_with: &[ProjectTypeId::Nextjs],
    },
];

/// Look up the catalog entry for a project type.
pub fn project_type(id: ProjectTypeId) -> &'static ProjectType {
    // Row order matches the identifier enum order.
    &PROJECT_TYPES[id as usize]
}

/// Look up the catalog entry for a library.
pub fn library(id: LibraryId) -> &'static Library {
    &LIBRARIES[id as usize]
}

/// Resolve a project type identifier string, rejecting out-of-catalog values.
pub fn resolve_project_type(id: &str) -> Result<ProjectTypeId, AppError> {
    ProjectTypeId::from_id(id).ok_or_else(|| AppError::UnknownProjectType {
        name: id.to_string(),
        available: ProjectTypeId::ALL.map(|ty| ty.id()).join(", "),
    })
}

/// Resolve a library identifier string, rejecting out-of-catalog values.
pub fn resolve_library(id: &str) -> Result<LibraryId, AppError> {
    LibraryId::from_id(id).ok_or_else(|| AppError::UnknownLibrary {
        name: id.to_string(),
        available: LibraryId::ALL.map(|lib| lib.id()).join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_ids_roundtrip() {
        for ty in ProjectTypeId::ALL {
            assert_eq!(ProjectTypeId::from_id(ty.id()), Some(ty));
        }
    }

    #[test]
    fn library_ids_roundtrip() {
        for lib in LibraryId::ALL {
            assert_eq!(LibraryId::from_id(lib.id()), Some(lib));
        }
    }

    #[test]
    fn catalog_rows_match_identifier_order() {
        for (index, ty) in PROJECT_TYPES.iter().enumerate() {
            assert_eq!(ty.id as usize, index);
        }
        for (index, lib) in LIBRARIES.iter().enumerate() {
            assert_eq!(lib.id as usize, index);
        }
    }

    #[test]
    fn all_entries_have_descriptions_and_features() {
        for ty in &PROJECT_TYPES {
            assert!(!ty.name.is_empty());
            assert!(!ty.description.is_empty());
            assert!(!ty.features.is_empty());
        }
        for lib in &LIBRARIES {
            assert!(!lib.name.is_empty());
            assert!(!lib.description.is_empty());
            assert!(!lib.features.is_empty());
        }
    }

    #[test]
    fn every_library_is_nextjs_only() {
        for lib in &LIBRARIES {
            assert!(lib.is_compatible_with(ProjectTypeId::Nextjs));
            assert!(!lib.is_compatible_with(ProjectTypeId::TypescriptCli));
        }
    }

    #[test]
    fn identifiers_serialize_to_their_string_form() {
        let json = serde_json::to_string(&LibraryId::PrismaDocker).expect("serialize id");
        assert_eq!(json, "\"prisma-docker\"");

        let json = serde_json::to_string(&ProjectTypeId::TypescriptCli).expect("serialize id");
        assert_eq!(json, "\"typescript-cli\"");
    }

    #[test]
    fn resolve_rejects_out_of_catalog_identifiers() {
        assert!(resolve_project_type("rails").is_err());
        assert!(resolve_library("redis").is_err());
        assert_eq!(resolve_project_type("nextjs").unwrap(), ProjectTypeId::Nextjs);
        assert_eq!(resolve_library("docker").unwrap(), LibraryId::Docker);
    }
}
