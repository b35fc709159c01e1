//! Contract tests for the wizard controller's public behavior, exercised
//! through the library surface.

use launchpad::{
    AnnouncingGenerator, LibraryId, ProjectGenerator, ProjectTypeId, Wizard, WizardStep,
};
use proptest::prelude::*;

#[test]
fn full_run_hands_the_snapshot_to_the_generator() {
    let mut wizard = Wizard::new();
    wizard.set_name("my-app");
    assert!(wizard.advance());
    wizard.select_type(ProjectTypeId::Nextjs);
    assert!(wizard.advance());
    wizard.toggle_library(LibraryId::Prisma);
    assert!(wizard.advance());

    let spec = wizard.finalize().expect("review reached");
    let outcome = AnnouncingGenerator::new().generate(&spec).expect("stub never fails");
    assert_eq!(
        outcome.message,
        "Project \"my-app\" will be generated as Next.js with Prisma"
    );
}

#[test]
fn retreat_from_review_keeps_the_draft_intact() {
    let mut wizard = Wizard::new();
    wizard.set_name("my-app");
    wizard.select_type(ProjectTypeId::Nextjs);
    wizard.toggle_library(LibraryId::Docker);
    wizard.go_to_step(WizardStep::Review).expect("gates satisfied");

    wizard.go_to_step(WizardStep::ProjectInfo).expect("retreat always succeeds");
    assert_eq!(wizard.config().name, "my-app");
    assert_eq!(wizard.config().project_type, Some(ProjectTypeId::Nextjs));
    assert_eq!(wizard.config().libraries, vec![LibraryId::Docker]);
}

proptest! {
    /// `set_name` stores any text exactly; only the trimmed value drives the
    /// Project Info gate.
    #[test]
    fn set_name_stores_text_verbatim(name in ".*") {
        let mut wizard = Wizard::new();
        wizard.set_name(&name);
        prop_assert_eq!(wizard.config().name.as_str(), name.as_str());
        prop_assert_eq!(
            wizard.can_advance(WizardStep::ProjectInfo),
            !name.trim().is_empty()
        );
    }

    /// Toggling the same library twice restores the prior membership, from
    /// any reachable selection state. The selection is a set: re-toggling an
    /// already-selected id may reorder the backing vec, so membership is
    /// compared, not order.
    #[test]
    fn toggle_twice_is_the_identity(toggles in proptest::collection::vec(0usize..3, 0..12)) {
        let ids = [LibraryId::Prisma, LibraryId::Docker, LibraryId::PrismaDocker];
        let mut wizard = Wizard::new();
        wizard.select_type(ProjectTypeId::Nextjs);

        for index in toggles {
            let before: std::collections::HashSet<LibraryId> =
                wizard.config().libraries.iter().copied().collect();
            wizard.toggle_library(ids[index]);
            wizard.toggle_library(ids[index]);
            let after: std::collections::HashSet<LibraryId> =
                wizard.config().libraries.iter().copied().collect();
            prop_assert_eq!(after, before);
            // Leave the state changed for the next round.
            wizard.toggle_library(ids[index]);
        }
    }

    /// The library selection never holds duplicates.
    #[test]
    fn selection_never_holds_duplicates(toggles in proptest::collection::vec(0usize..3, 0..24)) {
        let ids = [LibraryId::Prisma, LibraryId::Docker, LibraryId::PrismaDocker];
        let mut wizard = Wizard::new();
        wizard.select_type(ProjectTypeId::Nextjs);

        for index in toggles {
            wizard.toggle_library(ids[index]);
            let libraries = &wizard.config().libraries;
            let unique: std::collections::HashSet<_> = libraries.iter().collect();
            prop_assert_eq!(libraries.len(), unique.len());
        }
    }
}
