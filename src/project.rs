use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{Result, WavTextError};

const ROOT_MARKER: &str = ".git";
const RESOURCES_DIR: &str = "resources";

/// Default file names under `<root>/resources`.
pub const EXPORT_INPUT: &str = "train_short.wav";
pub const EXPORT_OUTPUT: &str = "data_array.txt";
pub const IMPORT_INPUT: &str = "new_data_array.txt";
pub const IMPORT_OUTPUT: &str = "new_data_array.wav";

/// Walk upward from `start` until a directory holding a `.git` entry is found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(ROOT_MARKER).exists())
        .map(Path::to_path_buf)
}

/// Where the default input and output files live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        ProjectPaths { root }
    }

    /// An explicit root wins; otherwise look upward from the working directory.
    pub fn resolve(explicit_root: Option<PathBuf>) -> Result<Self> {
        match explicit_root {
            Some(root) => Ok(ProjectPaths::new(root)),
            None => Self::discover(&env::current_dir()?),
        }
    }

    pub fn discover(start: &Path) -> Result<Self> {
        find_project_root(start)
            .map(ProjectPaths::new)
            .ok_or_else(|| WavTextError::ProjectRootNotFound {
                start: start.to_path_buf(),
            })
    }

    pub fn resource(&self, file_name: &str) -> PathBuf {
        self.root.join(RESOURCES_DIR).join(file_name)
    }
}

/// Use `explicit` when given, otherwise the named resource under the project
/// root. The root is only looked up when it is actually needed.
pub fn path_or_resource(
    explicit: Option<PathBuf>,
    root: &Option<PathBuf>,
    file_name: &str,
) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(ProjectPaths::resolve(root.clone())?.resource(file_name)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_root_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_find_root_accepts_git_file() {
        // worktrees and submodules use a `.git` file instead of a directory
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".git"), "gitdir: elsewhere").unwrap();
        assert_eq!(find_project_root(dir.path()), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_find_root_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner");
        fs::create_dir_all(inner.join(".git")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert_eq!(find_project_root(&inner), Some(inner.clone()));
    }

    #[test]
    fn test_explicit_root_skips_discovery() {
        let paths = ProjectPaths::resolve(Some(PathBuf::from("/some/where"))).unwrap();
        assert_eq!(
            paths.resource(EXPORT_OUTPUT),
            PathBuf::from("/some/where/resources/data_array.txt")
        );
    }

    #[test]
    fn test_explicit_path_wins_over_root() {
        let path =
            path_or_resource(Some(PathBuf::from("x.wav")), &None, IMPORT_OUTPUT).unwrap();
        assert_eq!(path, PathBuf::from("x.wav"));
    }

    #[test]
    fn test_resource_under_explicit_root() {
        let path = path_or_resource(None, &Some(PathBuf::from("proj")), IMPORT_INPUT).unwrap();
        assert_eq!(path, PathBuf::from("proj/resources/new_data_array.txt"));
    }
}
