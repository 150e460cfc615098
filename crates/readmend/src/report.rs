//! Terminal rendering and persistence of results.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Print the free-form review report.
pub fn print_review(report: &str, repo_name: &str, model_name: &str) {
    eprintln!();
    eprintln!(
        "{}",
        format!("── Review for \"{}\" ──", repo_name).bright_cyan().bold()
    );
    eprintln!();
    println!("{}", report);
    eprintln!();
    eprintln!(
        "{}",
        format!("── LLM powered review by \"{}\" ──", model_name).cyan()
    );
}

/// Print the changelog recovered from a successful enhancement run.
pub fn print_changes(changes: &[String], repo_name: &str, model_name: &str) {
    eprintln!();
    eprintln!(
        "{}",
        format!("── Changes made for \"{}\" ──", repo_name)
            .bright_cyan()
            .bold()
    );
    for change in changes {
        eprintln!("  {} {}", "•".bright_green(), change);
    }
    eprintln!(
        "{}",
        format!("── LLM powered improvements by \"{}\" ──", model_name).cyan()
    );
}

/// Write the recovered document to `path`.
///
/// An empty document means the model omitted the markdown block; there is
/// nothing to write and the caller is told so instead of an empty file
/// clobbering the output path.
pub fn write_document(document: &str, path: &Path) -> Result<()> {
    if document.trim().is_empty() {
        eprintln!(
            "{}",
            "Note: the model returned no document body; nothing was written.".yellow()
        );
        return Ok(());
    }

    std::fs::write(path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let shown = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    eprintln!();
    eprintln!("{} {}", "Output saved to:".bright_cyan(), shown.display());
    Ok(())
}

/// Standard post-run disclaimer.
pub fn print_disclaimer() {
    eprintln!();
    eprintln!(
        "{}",
        "WARNING: Please double-check since LLMs can still make mistakes."
            .bright_yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_non_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_document("# Improved", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Improved");
    }

    #[test]
    fn empty_document_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_document("   \n", &path).unwrap();
        assert!(!path.exists());
    }
}
