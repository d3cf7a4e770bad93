use crate::{
    blueprint::FileManifest,
    errors::{FileOperation, IoError},
};
use colored::Colorize;
use std::{
    fs,
    marker::PhantomData,
    path::{Path, PathBuf},
};

/// Nothing has been touched yet.
pub struct Pending;
/// Every listed directory exists; files may be written.
pub struct DirectoriesReady;
/// Every manifest file has been written.
pub struct Complete;
/// Describes a stage of a [`Materialization`].
pub trait MaterializationState {
    const NAME: &'static str;
    const IS_COMPLETE: bool;
}
impl MaterializationState for Pending {
    const NAME: &'static str = "pending";
    const IS_COMPLETE: bool = false;
}
impl MaterializationState for DirectoriesReady {
    const NAME: &'static str = "directories-ready";
    const IS_COMPLETE: bool = false;
}
impl MaterializationState for Complete {
    const NAME: &'static str = "complete";
    const IS_COMPLETE: bool = true;
}
/// A single pass that brings a root directory in line with a blueprint.
///
/// The state parameter only moves forward: a `Materialization<Pending>` can only
/// ensure directories, and only a `Materialization<DirectoriesReady>` can write
/// files, so files are never written before their directories exist.
///
/// Failure is the `Err` arm of either step. Nothing is rolled back: files written
/// before the failing entry stay on disk, and re-running the whole pass is the
/// recovery path since every write overwrites.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use storefront_scaffold::{materialize::Materialization, storefront};
///
/// let blueprint = storefront::blueprint();
/// Materialization::new(Path::new("shop"))
///     .ensure_directories(&blueprint.directories)?
///     .write_files(&blueprint.files)?;
/// # Ok::<(), storefront_scaffold::errors::IoError>(())
/// ```
pub struct Materialization<'a, State: MaterializationState> {
    root: &'a Path,
    advanced: bool,
    state: PhantomData<State>,
}
impl<'a, State: MaterializationState> Materialization<'a, State> {
    pub fn root(&self) -> &Path {
        self.root
    }

    fn advance<Next: MaterializationState>(mut self) -> Materialization<'a, Next> {
        self.advanced = true;

        log::debug!("materialization: {} -> {}", State::NAME, Next::NAME);

        Materialization {
            root: self.root,
            advanced: false,
            state: PhantomData,
        }
    }
}
impl<'a> Materialization<'a, Pending> {
    pub fn new(root: &'a Path) -> Self {
        Materialization {
            root,
            advanced: false,
            state: PhantomData,
        }
    }

    pub fn ensure_directories(
        self,
        directories: &[PathBuf],
    ) -> Result<Materialization<'a, DirectoriesReady>, IoError> {
        ensure_directories(self.root, directories)?;

        Ok(self.advance())
    }
}
impl<'a> Materialization<'a, DirectoriesReady> {
    pub fn write_files(
        self,
        manifest: &FileManifest,
    ) -> Result<Materialization<'a, Complete>, IoError> {
        write_files(self.root, manifest)?;

        Ok(self.advance())
    }
}
impl<S: MaterializationState> Drop for Materialization<'_, S> {
    fn drop(&mut self) {
        if self.advanced {
            return;
        }

        if S::IS_COMPLETE {
            log::debug!("materialization of {} complete", self.root.display());
        } else {
            log::warn!(
                "materialization of {} stopped while {}; anything already written is left in place",
                self.root.display(),
                S::NAME
            );
        }
    }
}

/// Creates every directory (and its missing ancestors) under `root`.
///
/// Directories that already exist are left alone.
///
/// # Errors
///
/// Returns an [`IoError`] for the first directory the file system refuses, for
/// example when a regular file already occupies the path.
pub fn ensure_directories(root: &Path, directories: &[PathBuf]) -> Result<(), IoError> {
    for directory in directories {
        create_directory(&root.join(directory))?;
    }

    Ok(())
}

/// Writes every manifest entry to `root/path`, replacing existing content.
///
/// Parent directories are expected to exist already.
///
/// # Errors
///
/// Returns an [`IoError`] naming the first path that could not be written. Entries
/// before it have already been written and are not removed.
pub fn write_files(root: &Path, manifest: &FileManifest) -> Result<(), IoError> {
    for (path, contents) in manifest {
        write_file(&root.join(path), contents)?;
    }

    Ok(())
}

/// Ensures `directories`, then writes `manifest`, under `root`.
pub fn materialize(
    root: &Path,
    directories: &[PathBuf],
    manifest: &FileManifest,
) -> Result<(), IoError> {
    Materialization::new(root)
        .ensure_directories(directories)?
        .write_files(manifest)?;

    Ok(())
}

fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("directory ready: {}", path.display());

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    let existed = path.is_file();

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let action = if existed {
        "overwrite".yellow()
    } else {
        "create".green()
    };

    println!("{} {}", action, path.display());

    Ok(())
}
