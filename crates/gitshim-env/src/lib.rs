//! Host environment abstraction for gitshim.
//!
//! This crate defines what the surrounding application must know about the
//! machine before a bundled git can be launched: where (and whether) git is
//! installed, the platform family, and the current process environment. The
//! [`host::HostEnvironment`] trait is the capability boundary; the
//! [`system::SystemEnvironment`] implementation reads the live process.

pub mod host;
pub mod system;
