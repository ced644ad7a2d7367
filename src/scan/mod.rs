//! Image path collection
//!
//! Recursive traversal of the scan directory, keeping files whose name ends
//! with one of the configured extensions. Matching is case-sensitive and the
//! result keeps traversal order, unsorted. Traversal failures (for example a
//! permission-denied subdirectory) are fatal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Traversal errors
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Collect every file under `dir` whose name ends with one of `extensions`.
pub fn collect_images<P: AsRef<Path>>(
    dir: P,
    extensions: &[String],
) -> Result<Vec<PathBuf>, ScanError> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::HashSet;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_collects_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("sub/c.png"));

        let extensions = Config::default().extensions;
        let paths = collect_images(dir.path(), &extensions).unwrap();

        let found: HashSet<_> = paths.into_iter().collect();
        let expected: HashSet<_> = [dir.path().join("a.jpg"), dir.path().join("sub/c.png")]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("upper.JPG"));
        touch(&dir.path().join("lower.jpg"));

        let extensions = Config::default().extensions;
        let paths = collect_images(dir.path(), &extensions).unwrap();

        assert_eq!(paths, vec![dir.path().join("lower.jpg")]);
    }

    #[test]
    fn test_archive_file_is_not_collected() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Images.zip"));
        touch(&dir.path().join("a.gif"));

        let extensions = Config::default().extensions;
        let paths = collect_images(dir.path(), &extensions).unwrap();

        assert_eq!(paths, vec![dir.path().join("a.gif")]);
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_subdirectory_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        touch(&locked.join("hidden.jpg"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores directory modes; only assert when access is denied.
        let denied = fs::read_dir(&locked).is_err();

        let extensions = Config::default().extensions;
        let result = collect_images(dir.path(), &extensions);

        // Restore so the tempdir can clean up after itself.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if denied {
            assert!(matches!(result, Err(ScanError::Walk(_))));
        }
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let extensions = Config::default().extensions;
        assert!(collect_images(dir.path(), &extensions).unwrap().is_empty());
    }
}
