use crate::errors::{FileOperation, IoError, ManifestError};
use crate::options::Options;
use crate::plan::{self, Plan};
use crate::project::Project;
use colored::Colorize;
use miette::Diagnostic;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error while materializing the project tree")]
    #[diagnostic(code(mernforge::materialize::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),
}

/// Creates `path` and any missing ancestors. Calling it again for a directory
/// that already exists is a no-op, so redundant calls from overlapping file
/// writes are safe.
pub fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))
}

/// Writes `contents` to `path`, creating the parent directory first and
/// truncating any existing file at that path.
pub fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

/// Applies a staged plan under `root`: every directory first, then every
/// file. The first failed operation aborts the run; whatever was already
/// written stays on disk.
pub fn apply(plan: &Plan, root: &Path) -> Result<(), IoError> {
    create_directory(root)?;

    for entry in plan.dirs() {
        create_directory(&root.join(&entry.path))?;
    }

    for entry in plan.files() {
        let Some(contents) = &entry.content else {
            continue;
        };

        write_file(&root.join(&entry.path), contents)?;
    }

    Ok(())
}

/// Runs a full generation: stages the plan for `(project, options)`, applies
/// it under the project root, and prints the operator hints.
pub fn generate(project: &Project, options: &Options) -> Result<(), MaterializeError> {
    log::debug!(
        "materializing '{}' into {}",
        project.name,
        project.root.display()
    );

    let plan = plan::build(project, options)?;

    apply(&plan, &project.root)?;

    println!(
        "\n{}",
        "Project structure generated successfully!".green()
    );
    println!(
        "\nNext steps:\n  cd {}\n  npm run install:all\n  Start MongoDB\n  cp server/.env.example server/.env\n  npm run dev",
        project.name
    );

    Ok(())
}
