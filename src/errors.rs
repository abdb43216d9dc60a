use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("writing a file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
}

#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(mernforge::io),
    help("Check file permissions, disk space, or that the path is correct.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("failed to serialize generated manifest '{file}'")]
#[diagnostic(code(mernforge::manifest))]
pub struct ManifestError {
    pub file: &'static str,
    #[source]
    pub source: serde_json::Error,
}
impl ManifestError {
    pub fn new(file: &'static str, error: serde_json::Error) -> Self {
        Self {
            file,
            source: error,
        }
    }
}
