use crate::ports::ProjectGenerator;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: ProjectGenerator> {
    generator: G,
}

impl<G: ProjectGenerator> AppContext<G> {
    /// Create a new application context.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get a reference to the generation collaborator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}
