use crate::errors::{FileOperation, IoError};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;

/// Ordered directory paths, relative to the root.
pub type DirectoryList = Vec<PathBuf>;
/// Ordered mapping of relative file path to literal content.
pub type FileManifest = IndexMap<PathBuf, String>;

#[derive(Error, Debug, Diagnostic)]
pub enum BlueprintError {
    #[error("I/O error within blueprint domain")]
    #[diagnostic(code(storefront_scaffold::blueprint::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(
        code(storefront_scaffold::blueprint::parse_toml),
        help("A blueprint has a `directories` array and a `[files]` table of path = content")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("blueprint path '{entry}' escapes the root")]
    #[diagnostic(
        code(storefront_scaffold::blueprint::path_escapes_root),
        help("Use relative paths without `..` components")
    )]
    PathEscapesRoot { entry: String, path: PathBuf },
}

/// On-disk shape of a blueprint file, before paths are checked.
#[derive(Debug, Deserialize)]
struct BlueprintFile {
    #[serde(default)]
    directories: Vec<String>,
    #[serde(default)]
    files: IndexMap<String, String>,
}

/// Everything one run materializes: the directories to ensure and the files to
/// write into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    pub directories: DirectoryList,
    pub files: FileManifest,
}
impl Blueprint {
    pub fn new(directories: DirectoryList, files: FileManifest) -> Self {
        Self { directories, files }
    }

    /// Loads a blueprint from a TOML file.
    ///
    /// Every path in the file must be relative and stay below the root it will be
    /// materialized into; `.` components are dropped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed: BlueprintFile =
            toml::from_str(&content).map_err(|err| BlueprintError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })?;

        let mut directories = DirectoryList::with_capacity(parsed.directories.len());
        for entry in parsed.directories {
            directories.push(confine_to_root(&entry, path)?);
        }

        let mut files = FileManifest::with_capacity(parsed.files.len());
        for (entry, content) in parsed.files {
            // `a/./b` and `a/b` name the same file; the later entry wins
            files.insert(confine_to_root(&entry, path)?, content);
        }

        log::debug!(
            "loaded blueprint from {}: {} directories, {} files",
            path.display(),
            directories.len(),
            files.len()
        );

        Ok(Blueprint { directories, files })
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Normalizes a blueprint entry into a relative path that cannot leave the root.
fn confine_to_root(entry: &str, blueprint_path: &Path) -> Result<PathBuf, BlueprintError> {
    let mut relative = PathBuf::new();

    for component in Path::new(entry).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(segment) => relative.push(segment),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(BlueprintError::PathEscapesRoot {
                    entry: entry.to_string(),
                    path: blueprint_path.to_path_buf(),
                });
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(BlueprintError::PathEscapesRoot {
            entry: entry.to_string(),
            path: blueprint_path.to_path_buf(),
        });
    }

    Ok(relative)
}
