//! The host environment trait.
//!
//! Consumers depend on [`HostEnvironment`] rather than on a concrete
//! environment so that launch configuration can be tested against stub
//! hosts with scripted install locations and variables.

use std::path::PathBuf;

/// Read-only view of the machine a git process will be launched on.
///
/// Implementations are expected to be cheap to query and safe to share
/// across threads; nothing in this workspace ever writes back through
/// this trait.
pub trait HostEnvironment {
    /// Install root of the bundled git distribution, if one is known.
    ///
    /// `None` means git has not been located yet. Launch configuration
    /// then degrades to the baseline variables; it is not an error.
    fn git_install_root(&self) -> Option<PathBuf>;

    /// Whether this is a Windows-family host.
    ///
    /// This is a capability flag rather than a compile-time property so
    /// that both search-path layouts can be exercised from any build host.
    fn is_windows(&self) -> bool;

    /// Current value of the process search path (`PATH`), or the empty
    /// string when the variable is unset.
    fn search_path(&self) -> String;

    /// Look up an arbitrary named environment variable.
    fn env_var(&self, name: &str) -> Option<String>;

    /// The user's home directory.
    fn home_dir(&self) -> PathBuf;

    /// The system temporary directory.
    fn temp_dir(&self) -> PathBuf;
}
