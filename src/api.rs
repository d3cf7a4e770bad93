use crate::{
    blueprint::{Blueprint, BlueprintError},
    errors::{FileOperation, IoError},
    materialize::materialize,
    preview, prompt, storefront,
};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Blueprint(#[from] BlueprintError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// What the CLI asked for.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub root: PathBuf,
    /// Custom blueprint file; the built-in storefront when `None`.
    pub blueprint: Option<PathBuf>,
    pub dry_run: bool,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Directories and files were written.
    Materialized { directories: usize, files: usize },
    /// Only the preview was printed.
    Previewed,
    /// The user answered no at the confirmation prompt.
    Declined,
}

/// Resolves the blueprint to use for a run.
///
/// # Errors
///
/// Returns a [`BlueprintError`] if a custom blueprint cannot be read, parsed, or
/// names a path outside the root.
pub fn load_blueprint(path: Option<&Path>) -> Result<Blueprint, BlueprintError> {
    match path {
        Some(path) => Blueprint::from_file(path),
        None => Ok(storefront::blueprint()),
    }
}

/// Scaffolds the selected blueprint into `options.root`.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The custom blueprint could not be loaded.
/// - The confirmation prompt fails or is interrupted.
/// - The root, a directory, or a file cannot be created or written to. Files
///   written before the failure are kept.
pub fn scaffold(options: &ScaffoldOptions) -> Result<Outcome, ScaffoldError> {
    let blueprint = load_blueprint(options.blueprint.as_deref())?;

    log::debug!(
        "scaffolding {} directories and {} files into {}",
        blueprint.directory_count(),
        blueprint.file_count(),
        options.root.display()
    );

    if options.dry_run {
        preview::preview_as_tree(&blueprint, &options.root);

        return Ok(Outcome::Previewed);
    }

    if options.interactive {
        preview::preview_as_tree(&blueprint, &options.root);

        if !prompt::confirm_materialize(&options.root, blueprint.file_count())? {
            println!("{}", "Nothing written.".yellow());

            return Ok(Outcome::Declined);
        }
    }

    std::fs::create_dir_all(&options.root)
        .map_err(|error| IoError::new(FileOperation::Mkdir, options.root.clone(), error))?;

    materialize(&options.root, &blueprint.directories, &blueprint.files)?;

    println!(
        "{} {} directories, {} files in {}",
        "done".bold().green(),
        blueprint.directory_count(),
        blueprint.file_count(),
        options.root.display()
    );

    Ok(Outcome::Materialized {
        directories: blueprint.directory_count(),
        files: blueprint.file_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scaffold_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested/shop");

        let outcome = scaffold(&ScaffoldOptions {
            root: root.clone(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Materialized {
                directories: 7,
                files: 12
            }
        );
        assert!(root.join("pages/product/[id].js").is_file());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("shop");

        let outcome = scaffold(&ScaffoldOptions {
            root: root.clone(),
            dry_run: true,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(outcome, Outcome::Previewed);
        assert!(!root.exists());
    }

    #[test]
    fn custom_blueprint_replaces_storefront() {
        let dir = tempfile::tempdir().unwrap();
        let blueprint_path = dir.path().join("blueprint.toml");
        fs::write(
            &blueprint_path,
            "directories = [\"notes\"]\n\n[files]\n\"notes/todo.md\" = \"- ship it\"\n",
        )
        .unwrap();
        let root = dir.path().join("out");

        let outcome = scaffold(&ScaffoldOptions {
            root: root.clone(),
            blueprint: Some(blueprint_path),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Materialized {
                directories: 1,
                files: 1
            }
        );
        assert_eq!(
            fs::read_to_string(root.join("notes/todo.md")).unwrap(),
            "- ship it"
        );
        assert!(!root.join("package.json").exists());
    }

    #[test]
    fn root_that_is_a_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("occupied");
        fs::write(&root, "file").unwrap();

        let error = scaffold(&ScaffoldOptions {
            root: root.clone(),
            ..Default::default()
        })
        .unwrap_err();

        match error {
            ScaffoldError::Io(io) => {
                assert_eq!(io.operation, FileOperation::Mkdir);
                assert_eq!(io.path, root);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
