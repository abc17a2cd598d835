//! Launch-environment assembly for a bundled git distribution.
//!
//! [`configure`] fills a [`LaunchDescriptor`] with everything the bundled
//! git's own shell wrapper (`git-cmd`) would set up: working directory,
//! `HOME`/`TMP`/`TEMP`, a search path covering the distribution's command
//! and helper directories, `GIT_EXEC_PATH`, the SSH and terminal shims,
//! and proxy passthrough.

use std::path::{Path, PathBuf};

use tracing::debug;

use gitshim_env::host::HostEnvironment;

use crate::descriptor::LaunchDescriptor;

/// Fixed system directories appended on Windows-family hosts.
const WINDOWS_SYSTEM_PATH: &str = r"C:\windows\system32;C:\windows";

/// Prepare `descriptor` so that the process it describes runs the bundled
/// git correctly from `working_dir`.
///
/// Always sets the working directory plus `HOME`, `TMP` and `TEMP`. When
/// the host knows where git is installed, additionally composes the
/// search path and `GIT_EXEC_PATH`, enables LFS file locking, sets the
/// `PLINK_PROTOCOL`/`TERM` shims, and copies non-empty `HTTP_PROXY` and
/// `HTTPS_PROXY` values through. When it does not, the baseline above is
/// all that happens. This function never fails; pre-existing descriptor
/// entries are only touched where a variable named here overwrites them.
///
/// Everything read from `host` and the filesystem is read-only. Each
/// concurrent call needs its own descriptor, which the `&mut` enforces.
///
/// # Panics
///
/// Panics if `working_dir` is empty. A caller without a working directory
/// has nothing to configure yet.
pub fn configure(
    descriptor: &mut LaunchDescriptor,
    working_dir: &Path,
    host: &dyn HostEnvironment,
) {
    assert!(
        !working_dir.as_os_str().is_empty(),
        "configure requires a working directory"
    );

    descriptor.set_working_dir(working_dir);
    descriptor.set_env("HOME", host.home_dir().display().to_string());
    let temp = host.temp_dir().display().to_string();
    descriptor.set_env("TMP", temp.clone());
    descriptor.set_env("TEMP", temp);

    // If we don't know where git is, there is nothing else to configure.
    let Some(install_root) = host.git_install_root() else {
        debug!("git install root unknown, baseline environment only");
        return;
    };

    // TODO: drop once LFS file locking no longer needs the opt-in.
    descriptor.set_env("GITLFSLOCKSENABLED", "1");

    let family = PlatformFamily::of(host);
    let paths = GitPaths::derive(family, &install_root, host);
    debug!(?family, search_path = %paths.search_path, "composed git search path");

    descriptor.set_env("GIT_EXEC_PATH", paths.exec_path.display().to_string());
    descriptor.set_env("PATH", paths.search_path);

    descriptor.set_env("PLINK_PROTOCOL", "ssh");
    descriptor.set_env("TERM", "msys");

    for name in ["HTTP_PROXY", "HTTPS_PROXY"] {
        if let Some(value) = host.env_var(name) {
            if !value.is_empty() {
                descriptor.set_env(name, value);
            }
        }
    }
}

/// Platform family of the host, as reported by the host environment.
///
/// Selected once per configure call; each variant owns its own
/// search-path layout so the two assemblies stay independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformFamily {
    Windows,
    Unix,
}

impl PlatformFamily {
    fn of(host: &dyn HostEnvironment) -> Self {
        if host.is_windows() {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Unix
        }
    }
}

/// Derived locations for one git distribution.
#[derive(Debug)]
struct GitPaths {
    /// Directory git searches for its own helper programs.
    exec_path: PathBuf,
    /// Full search-path value for the child process.
    search_path: String,
}

impl GitPaths {
    fn derive(family: PlatformFamily, install_root: &Path, host: &dyn HostEnvironment) -> Self {
        match family {
            PlatformFamily::Windows => Self::windows(install_root),
            PlatformFamily::Unix => Self::unix(install_root, &host.search_path()),
        }
    }

    /// Windows-family layout: commands under `cmd` and `usr/bin`, binaries
    /// under the bundled mingw tree, helpers under its `libexec/git-core`.
    /// A 32-bit distribution carries `mingw32`; anything else is assumed
    /// to be `mingw64`.
    fn windows(install_root: &Path) -> Self {
        let base_exec = if install_root.join("mingw32").is_dir() {
            install_root.join("mingw32")
        } else {
            install_root.join("mingw64")
        };
        let bin_path = base_exec.join("bin");
        let exec_path = base_exec.join("libexec").join("git-core");
        let lfs_path = install_root;

        let search_path = format!(
            "{cmd};{usr_bin};{exec};{bin};{git_tfs};{lfs};{system}",
            cmd = install_root.join("cmd").display(),
            usr_bin = install_root.join("usr").join("bin").display(),
            exec = exec_path.display(),
            bin = bin_path.display(),
            git_tfs = install_root.join("usr").join("share").join("git-tfs").display(),
            lfs = lfs_path.display(),
            system = WINDOWS_SYSTEM_PATH,
        );

        Self {
            exec_path,
            search_path,
        }
    }

    /// Non-Windows layout: the install root doubles as the binary and LFS
    /// directory, with helpers under `libexec/git-core`. The host's
    /// pre-existing search path keeps its place at the end.
    fn unix(install_root: &Path, host_path: &str) -> Self {
        let exec_path = install_root.join("libexec").join("git-core");

        let search_path = format!(
            "{bin}:{exec}:{lfs}:{host_path}",
            bin = install_root.display(),
            exec = exec_path.display(),
            lfs = install_root.display(),
        );

        Self {
            exec_path,
            search_path,
        }
    }
}
