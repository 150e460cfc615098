use ignore::WalkBuilder;
use std::path::Path;
use tracing::debug;

/// Walk the folder structure and render it as a tree-style listing.
///
/// Output resembles the `tree` tool: one entry per line, indented four
/// spaces per level under a `.` root. The walk honors `.gitignore` and
/// always skips the `.git` directory itself; dotfiles are otherwise
/// included. `max_depth` limits recursion (None = unlimited).
pub fn folder_tree(root: &Path, max_depth: Option<usize>) -> String {
    let mut walk = WalkBuilder::new(root);
    walk.hidden(false)
        .max_depth(max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != ".git");

    let mut lines = vec![".".to_string()];

    for entry in walk.build().flatten() {
        let depth = entry.depth();
        if depth == 0 {
            continue; // the root itself
        }
        let name = entry.file_name().to_string_lossy();
        let indent = "    ".repeat(depth - 1);
        lines.push(format!("{}└── {}", indent, name));
    }

    debug!(entries = lines.len() - 1, "Rendered folder tree");
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_nested_entries_with_indentation() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(dir.path().join("README.md"), "# hi").unwrap();

        let tree = folder_tree(dir.path(), None);
        assert!(tree.starts_with('.'));
        assert!(tree.contains("└── README.md"));
        assert!(tree.contains("└── src"));
        assert!(tree.contains("    └── main.rs"));
    }

    #[test]
    fn skips_git_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/config"), "").unwrap();
        fs::write(dir.path().join("lib.rs"), "").unwrap();

        let tree = folder_tree(dir.path(), None);
        assert!(!tree.contains(".git"));
        assert!(tree.contains("lib.rs"));
    }

    #[test]
    fn respects_max_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "").unwrap();

        let tree = folder_tree(dir.path(), Some(1));
        assert!(tree.contains("└── a"));
        assert!(!tree.contains("deep.txt"));
    }
}
