use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("writing a file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
}

/// The single failure kind of the materializer: an operation on a path that the
/// file system refused.
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(storefront_scaffold::io),
    help("Check file permissions, disk space, or that the path is correct, then re-run.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_path() {
        let error = IoError::new(
            FileOperation::Write,
            PathBuf::from("out/styles/globals.css"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );

        assert_eq!(
            error.to_string(),
            "I/O error: writing a file on path 'out/styles/globals.css'"
        );
        assert!(std::error::Error::source(&error).is_some());
    }
}
