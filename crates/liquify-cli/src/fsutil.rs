use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Recursively copy a directory tree, creating parents as needed.
pub fn copy_directory(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            // Skip .git directories
            !e.path().components().any(|c| c.as_os_str() == ".git")
        })
    {
        let path = entry.path();
        let relative = path.strip_prefix(src)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(path, &target)?;
        }
    }

    Ok(())
}

/// Delete a directory tree if present.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("theme");
        std::fs::create_dir_all(src.join("layout")).unwrap();
        std::fs::write(src.join("layout/theme.liquid"), "shell").unwrap();

        let dst = temp.path().join("out/theme");
        copy_directory(&src, &dst).unwrap();

        let copied = std::fs::read_to_string(dst.join("layout/theme.liquid")).unwrap();
        assert_eq!(copied, "shell");
    }

    #[test]
    fn remove_is_a_noop_for_missing_dirs() {
        let temp = TempDir::new().unwrap();
        remove_dir_if_exists(&temp.path().join("absent")).unwrap();
    }
}
