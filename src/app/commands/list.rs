//! Catalog listings for the `types` and `libraries` commands.

use crate::domain::{LIBRARIES, PROJECT_TYPES, ProjectTypeId};

/// Print the project type catalog.
pub fn print_types() {
    println!("Available project types:");
    for ty in &PROJECT_TYPES {
        println!();
        println!("  {} {} ({})", ty.glyph, ty.name, ty.id);
        println!("      {}", ty.description);
        println!("      Features: {}", ty.features.join(", "));
    }
}

/// Print the library catalog. With a project type, only compatible entries
/// are listed.
pub fn print_libraries(project_type: Option<ProjectTypeId>) {
    let entries: Vec<_> = match project_type {
        Some(ty) => LIBRARIES.iter().filter(|lib| lib.is_compatible_with(ty)).collect(),
        None => LIBRARIES.iter().collect(),
    };

    if entries.is_empty() {
        println!("No additional libraries available for this project type.");
        return;
    }

    println!("Available libraries:");
    for lib in entries {
        println!();
        println!("  {} {} ({})", lib.glyph, lib.name, lib.id);
        println!("      {}", lib.description);
        println!("      Features: {}", lib.features.join(", "));
        let types: Vec<&str> = lib.compatible_with.iter().map(|ty| ty.id()).collect();
        println!("      Compatible with: {}", types.join(", "));
    }
}
