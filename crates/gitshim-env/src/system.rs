//! The live process environment.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::host::HostEnvironment;

/// [`HostEnvironment`] backed by the real process environment.
///
/// The git install root is supplied by the caller at construction time:
/// locating a git distribution (user setting, registry probe, download)
/// is the surrounding application's job, not this crate's.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    git_install_root: Option<PathBuf>,
}

impl SystemEnvironment {
    /// Environment with no known git install root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment with a known git install root.
    pub fn with_git_install_root(root: impl Into<PathBuf>) -> Self {
        Self {
            git_install_root: Some(root.into()),
        }
    }
}

impl HostEnvironment for SystemEnvironment {
    fn git_install_root(&self) -> Option<PathBuf> {
        self.git_install_root.clone()
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn search_path(&self) -> String {
        env::var("PATH").unwrap_or_default()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn home_dir(&self) -> PathBuf {
        match raw_home_dir() {
            Some(home) => home,
            None => {
                warn!("home directory variable unset, using empty path");
                PathBuf::new()
            }
        }
    }

    fn temp_dir(&self) -> PathBuf {
        env::temp_dir()
    }
}

/// The platform's home directory variable, if set.
fn raw_home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("HOME").map(PathBuf::from)
    }
}
