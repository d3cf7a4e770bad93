//! The built-in furniture storefront: a Next.js + Tailwind project with a
//! landing page, a catalog and a product page backed by an in-memory product
//! list.
//!
//! File contents live under `blueprints/furniture-store/` and are embedded at
//! compile time, byte for byte.
use crate::blueprint::{Blueprint, DirectoryList, FileManifest};
use std::path::PathBuf;

macro_rules! payload {
    ($path:literal) => {
        (
            $path,
            include_str!(concat!("../blueprints/furniture-store/", $path)),
        )
    };
}

/// Build tooling configuration, written at the root.
pub const CONFIG_FILES: [(&str, &str); 4] = [
    payload!("package.json"),
    payload!("tailwind.config.js"),
    payload!("postcss.config.js"),
    payload!("next.config.js"),
];

pub const DIRECTORIES: [&str; 7] = [
    "pages",
    "pages/product",
    "components",
    "styles",
    "lib",
    "public",
    "public/images",
];

/// Styles, data access, components and pages. Every parent is in [`DIRECTORIES`].
pub const SOURCE_FILES: [(&str, &str); 8] = [
    payload!("styles/globals.css"),
    payload!("lib/api.js"),
    payload!("components/Header.jsx"),
    payload!("components/ProductCard.jsx"),
    payload!("components/Footer.jsx"),
    payload!("pages/index.js"),
    payload!("pages/catalog.js"),
    payload!("pages/product/[id].js"),
];

fn manifest_from(entries: &[(&str, &str)]) -> FileManifest {
    entries
        .iter()
        .map(|(path, content)| (PathBuf::from(path), content.to_string()))
        .collect()
}

pub fn config_files() -> FileManifest {
    manifest_from(&CONFIG_FILES)
}

pub fn source_files() -> FileManifest {
    manifest_from(&SOURCE_FILES)
}

pub fn directories() -> DirectoryList {
    DIRECTORIES.into_iter().map(PathBuf::from).collect()
}

/// Config files first, then sources.
pub fn blueprint() -> Blueprint {
    let mut files = config_files();
    files.extend(source_files());

    Blueprint::new(directories(), files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn blueprint_lists_every_artifact_once() {
        let blueprint = blueprint();

        assert_eq!(blueprint.directory_count(), 7);
        assert_eq!(blueprint.file_count(), 12);

        let first_source = blueprint.files.get_index(4).map(|(path, _)| path.clone());
        assert_eq!(first_source, Some(PathBuf::from("styles/globals.css")));
    }

    #[test]
    fn every_source_file_has_a_declared_parent() {
        let directories = directories();

        for (path, _) in SOURCE_FILES {
            let parent = Path::new(path).parent().unwrap();
            assert!(
                directories.iter().any(|dir| dir == parent),
                "{path} has no declared parent directory"
            );
        }
    }

    #[test]
    fn payload_is_embedded_verbatim() {
        let files = config_files();
        let package = &files[&PathBuf::from("package.json")];

        assert!(package.starts_with("{\n  \"name\": \"furniture-store\""));
        assert!(package.ends_with('}'));

        let sources = source_files();
        assert!(sources[&PathBuf::from("styles/globals.css")].starts_with("@tailwind base;\n"));
        assert!(sources[&PathBuf::from("components/ProductCard.jsx")]
            .contains("href={`/product/${product.id}`}"));
        assert!(sources[&PathBuf::from("lib/api.js")].contains("name: 'Стул Noa'"));
    }
}
