use crate::materializer::{self, MaterializeError};
use crate::options::Options;
use crate::project::Project;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MernforgeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Generates a MERN project skeleton named `name` under `target_dir`.
///
/// The whole run is a pure function of `(name, options)`: the same inputs
/// against two empty target directories produce byte-identical trees. A
/// pre-existing project directory is written into without confirmation.
///
/// # Errors
///
/// Returns a [`MernforgeError`] if:
///
/// - A directory cannot be created or a file cannot be written.
/// - A generated manifest fails to serialize.
pub fn create_project(
    name: &str,
    options: &Options,
    target_dir: &Path,
) -> Result<(), MernforgeError> {
    let project = Project::new(name, target_dir);

    println!("Creating MERN project: {}", project.name);

    materializer::generate(&project, options)?;

    Ok(())
}
