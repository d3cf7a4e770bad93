use crate::blueprint::Blueprint;
use colored::Colorize;
use std::{fmt::Write, path::Path};

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }

    /// Walks `path` below this node, adding missing directories along the way.
    /// The last component becomes a file when `is_file` is set.
    fn insert(&mut self, path: &Path, is_file: bool) {
        let segments: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();

        let mut node = self;
        for (i, segment) in segments.iter().enumerate() {
            let leaf_is_file = is_file && i == segments.len() - 1;

            let position = match node.children.iter().position(|c| &c.name == segment) {
                Some(position) => position,
                None => {
                    node.children
                        .push(TreeNode::new(segment.clone(), leaf_is_file));
                    node.children.len() - 1
                }
            };

            node = &mut node.children[position];
        }
    }
}

/// Build the directory tree from a blueprint, returning the root node.
fn build_tree(blueprint: &Blueprint, destination: &Path) -> TreeNode {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut root = TreeNode::new(root_name, false);

    for directory in &blueprint.directories {
        root.insert(directory, false);
    }
    for path in blueprint.files.keys() {
        root.insert(path, true);
    }

    root
}

fn write_tree(out: &mut String, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    // writing into a String cannot fail
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector.yellow(), name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        write_tree(out, child, &child_prefix, i == len - 1);
    }
}

/// Renders the tree `blueprint` would produce under `destination`.
///
/// Directories come first, in blueprint order, followed by files. Parents that a
/// path implies but the blueprint does not list are shown once.
pub fn render_tree(blueprint: &Blueprint, destination: &Path) -> String {
    let tree_root = build_tree(blueprint, destination);

    let mut out = String::new();
    write_tree(&mut out, &tree_root, "", true);

    out
}

pub fn preview_as_tree(blueprint: &Blueprint, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(blueprint, destination));

    println!(
        "\n{} {} directories, {} files\n",
        "└─".bold().bright_blue(),
        blueprint.directory_count(),
        blueprint.file_count()
    );
}
