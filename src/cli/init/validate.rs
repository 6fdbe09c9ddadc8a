//! Target directory checks before any file is written.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Entries that do not make a directory "in use".
///
/// A freshly cloned GitHub Pages repository only holds `.git`.
const IGNORED_ENTRIES: &[&str] = &[".git"];

/// Where `sitemark init` writes, and which rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `sitemark init` - current directory, must be empty
    CurrentDir,
    /// `sitemark init <name>` - new subdirectory, must not exist
    NewDir,
}

impl InitMode {
    /// Resolve the site root for an optional `<name>` argument.
    pub fn target(cwd: &Path, name: Option<&Path>) -> (PathBuf, Self) {
        match name {
            Some(name) => (cwd.join(name), Self::NewDir),
            None => (cwd.to_path_buf(), Self::CurrentDir),
        }
    }
}

/// Fail unless `root` can take a new site under `mode`.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if let Some(entry) = first_entry(root)? {
                bail!(
                    "Current directory is not empty (found '{entry}').\n\
                     Use `sitemark init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// First entry of `path` that counts against initializing there.
fn first_entry(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;
    for entry in entries {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !IGNORED_ENTRIES.contains(&name.as_str()) {
            return Ok(Some(name));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_target() {
        let cwd = Path::new("/home/misaka");
        assert_eq!(
            InitMode::target(cwd, Some(Path::new("my-blog"))),
            (PathBuf::from("/home/misaka/my-blog"), InitMode::NewDir)
        );
        assert_eq!(
            InitMode::target(cwd, None),
            (PathBuf::from("/home/misaka"), InitMode::CurrentDir)
        );
    }

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_fresh_clone_counts_as_empty() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sitemark.toml"), "").unwrap();
        let err = validate_target(temp.path(), InitMode::CurrentDir).unwrap_err();
        assert!(err.to_string().contains("found 'sitemark.toml'"));
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("my-blog"), InitMode::NewDir).is_ok());
    }
}
