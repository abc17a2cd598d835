//! Launch preparation for a bundled git distribution.
//!
//! Two independent utilities, composed by the surrounding application:
//!
//! - [`repo_root::find_root`] walks parent directories to locate the root
//!   of a git working tree.
//! - [`configure::configure`] fills a [`descriptor::LaunchDescriptor`]
//!   with the working directory and environment a bundled git expects —
//!   what its own `git-cmd` shell wrapper would otherwise set up.
//!
//! Neither utility starts a process. The configured descriptor is handed
//! to a process runner elsewhere; this crate only decides what the child
//! environment should look like.

pub mod configure;
pub mod descriptor;
pub mod error;
pub mod repo_root;
