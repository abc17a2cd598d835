//! Git working-tree discovery.
//!
//! Walks up the directory tree looking for the `.git` marker directory.

use std::path::{Path, PathBuf};

use crate::error::{LaunchError, Result};

/// Name of the metadata directory that marks a working-tree root.
const GIT_DIR_NAME: &str = ".git";

/// Walk up the directory tree from `start` looking for a directory that
/// contains `.git`.
///
/// A `start` that refers to an existing file begins the search at its
/// parent directory. A directory that itself contains `.git` is returned
/// unchanged, not its parent. Returns `None` once the walk empties out or
/// runs out of parents without a match.
///
/// Only a `.git` *directory* counts; a `.git` file (as written into
/// linked worktrees) does not mark a root here.
///
/// The walk issues nothing but read-only existence checks, so it is safe
/// to call repeatedly and from multiple threads. Paths are not
/// canonicalized: the result is an ancestor of `start` exactly as the
/// caller spelled it.
///
/// # Examples
///
/// ```no_run
/// use gitshim_launch::repo_root::find_root;
/// use std::path::Path;
///
/// if let Some(root) = find_root(Path::new(".")) {
///     println!("working tree at {}", root.display());
/// }
/// ```
pub fn find_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    if current.is_file() {
        current = current.parent()?;
    }

    loop {
        if current.join(GIT_DIR_NAME).is_dir() {
            return Some(current.to_path_buf());
        }

        if current.as_os_str().is_empty() {
            return None;
        }

        current = current.parent()?;
    }
}

/// Like [`find_root`], but a missing working tree is a typed error.
///
/// # Errors
///
/// Returns [`LaunchError::RepoRootNotFound`] when no `.git` directory
/// exists at `start` or any of its ancestors.
pub fn find_root_or_error(start: &Path) -> Result<PathBuf> {
    find_root(start).ok_or_else(|| LaunchError::RepoRootNotFound {
        path: start.display().to_string(),
    })
}
