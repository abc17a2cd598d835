//! Launch error types.

/// Errors that can occur while preparing a git launch.
///
/// Expected absences — an unknown install root, a missing proxy variable —
/// are not errors anywhere in this crate; they degrade to partial
/// configuration instead.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// No `.git` directory was found at the starting path or any ancestor.
    #[error("no git working tree found at or above {path}")]
    RepoRootNotFound {
        /// The path the search started from.
        path: String,
    },
}

/// Convenience alias used throughout the launch crate.
pub type Result<T> = std::result::Result<T, LaunchError>;
