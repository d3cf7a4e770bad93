pub mod api;
pub mod blueprint;
pub mod errors;
pub mod materialize;
pub mod preview;
pub mod prompt;
pub mod storefront;

pub use api::{scaffold, Outcome, ScaffoldError, ScaffoldOptions};
pub use blueprint::{Blueprint, DirectoryList, FileManifest};
pub use materialize::{ensure_directories, materialize, write_files};
