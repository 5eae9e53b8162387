//! Spec-file discovery - resolve the file set for one run

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Naming convention for spec files
pub const SPEC_SUFFIX: &str = "_spec.lua";

/// Default directory searched when no argument names a file
pub const DEFAULT_SPEC_DIR: &str = "tests/spec";

/// Failures that abort the run before any file is processed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The spec directory does not exist
    #[error("spec directory {0} not found")]
    MissingDir(PathBuf),
    /// The directory exists but holds no spec files
    #[error("no spec files found in {0}")]
    NoFiles(PathBuf),
    /// A pattern argument matched nothing
    #[error("no spec files found for: {0}")]
    NoMatches(String),
}

/// The ordered set of spec files for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<PathBuf>,
}

impl FileSet {
    /// Resolve the file set from the optional CLI argument.
    ///
    /// - no argument: every `*_spec.lua` file under `dir`
    /// - argument naming an existing `*_spec.lua` file: exactly that file
    /// - anything else: substring pattern over file names under `dir`
    ///
    /// Files are sorted lexicographically so output order is deterministic.
    pub fn resolve(arg: Option<&str>, dir: &Path) -> Result<Self, DiscoveryError> {
        match arg {
            Some(arg) if arg.ends_with(SPEC_SUFFIX) && Path::new(arg).is_file() => Ok(Self {
                files: vec![PathBuf::from(arg)],
            }),
            Some(pattern) => {
                let files = walk_specs(dir, |name| name.contains(pattern))?;
                if files.is_empty() {
                    return Err(DiscoveryError::NoMatches(pattern.to_string()));
                }
                Ok(Self { files })
            }
            None => {
                let files = walk_specs(dir, |_| true)?;
                if files.is_empty() {
                    return Err(DiscoveryError::NoFiles(dir.to_path_buf()));
                }
                Ok(Self { files })
            }
        }
    }

    /// Iterate files in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Check if the set holds any files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Get count of files
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Collect spec files under `dir` whose file name satisfies `keep`
fn walk_specs<F>(dir: &Path, keep: F) -> Result<Vec<PathBuf>, DiscoveryError>
where
    F: Fn(&str) -> bool,
{
    if !dir.is_dir() {
        return Err(DiscoveryError::MissingDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(SPEC_SUFFIX) && keep(name))
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "-- spec\n").unwrap();
        path
    }

    #[test]
    fn test_resolve_default_dir_sorted() {
        let dir = tempdir().unwrap();
        let b = touch(dir.path(), "b_spec.lua");
        let a = touch(dir.path(), "a_spec.lua");
        touch(dir.path(), "notes.txt");

        let set = FileSet::resolve(None, dir.path()).unwrap();
        let files: Vec<&Path> = set.iter().collect();
        assert_eq!(files, vec![a.as_path(), b.as_path()]);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "c_spec.lua");
        touch(dir.path(), "a_spec.lua");
        touch(dir.path(), "b_spec.lua");

        let first = FileSet::resolve(None, dir.path()).unwrap();
        let second = FileSet::resolve(None, dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_walks_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        let nested = touch(&dir.path().join("nested"), "deep_spec.lua");
        let top = touch(dir.path(), "top_spec.lua");

        let set = FileSet::resolve(None, dir.path()).unwrap();
        let files: Vec<&Path> = set.iter().collect();
        assert_eq!(set.len(), 2);
        assert!(files.contains(&nested.as_path()));
        assert!(files.contains(&top.as_path()));
    }

    #[test]
    fn test_resolve_literal_file() {
        let dir = tempdir().unwrap();
        let file = touch(dir.path(), "exact_spec.lua");

        let set = FileSet::resolve(file.to_str(), dir.path()).unwrap();
        let files: Vec<&Path> = set.iter().collect();
        assert_eq!(files, vec![file.as_path()]);
    }

    #[test]
    fn test_resolve_substring_pattern() {
        let dir = tempdir().unwrap();
        let parser = touch(dir.path(), "parser_spec.lua");
        touch(dir.path(), "lexer_spec.lua");

        let set = FileSet::resolve(Some("pars"), dir.path()).unwrap();
        let files: Vec<&Path> = set.iter().collect();
        assert_eq!(files, vec![parser.as_path()]);
    }

    #[test]
    fn test_resolve_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");

        let err = FileSet::resolve(None, &missing).unwrap_err();
        assert_eq!(err, DiscoveryError::MissingDir(missing));
    }

    #[test]
    fn test_resolve_empty_dir() {
        let dir = tempdir().unwrap();

        let err = FileSet::resolve(None, dir.path()).unwrap_err();
        assert_eq!(err, DiscoveryError::NoFiles(dir.path().to_path_buf()));
    }

    #[test]
    fn test_resolve_unmatched_pattern() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "lexer_spec.lua");

        let err = FileSet::resolve(Some("zzz"), dir.path()).unwrap_err();
        assert_eq!(err, DiscoveryError::NoMatches("zzz".to_string()));
    }

    #[test]
    fn test_pattern_ignores_non_spec_files() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "parser_helper.lua");
        let spec = touch(dir.path(), "parser_spec.lua");

        let set = FileSet::resolve(Some("parser"), dir.path()).unwrap();
        let files: Vec<&Path> = set.iter().collect();
        assert_eq!(files, vec![spec.as_path()]);
    }
}
