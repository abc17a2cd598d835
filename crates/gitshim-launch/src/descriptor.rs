//! The launch descriptor: working directory plus environment for a
//! process that has not been spawned yet.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mutable description of an external process about to be started.
///
/// Created by the caller, filled in by [`crate::configure::configure`],
/// and consumed by whatever runner actually spawns the process.
/// Environment keys are case-sensitive and later writes to the same key
/// win. The `&mut` receivers rule out two configure calls sharing one
/// descriptor; give each call its own instance.
#[derive(Debug, Clone, Default)]
pub struct LaunchDescriptor {
    working_dir: Option<PathBuf>,
    env: HashMap<String, String>,
}

impl LaunchDescriptor {
    /// Empty descriptor: no working directory, no environment entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured working directory, if one has been set.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Set the directory the process will start in.
    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = Some(dir.into());
    }

    /// The value of an environment entry, if present.
    pub fn env(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Insert or overwrite an environment entry.
    pub fn set_env(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.env.insert(name.into(), value.into());
    }

    /// Iterate over all environment entries, in no particular order.
    pub fn env_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of environment entries.
    pub fn env_len(&self) -> usize {
        self.env.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let desc = LaunchDescriptor::new();
        assert!(desc.working_dir().is_none());
        assert_eq!(desc.env_len(), 0);
    }

    #[test]
    fn test_working_dir_roundtrip() {
        let mut desc = LaunchDescriptor::new();
        desc.set_working_dir("/repo");
        assert_eq!(desc.working_dir(), Some(Path::new("/repo")));
    }

    #[test]
    fn test_last_write_wins() {
        let mut desc = LaunchDescriptor::new();
        desc.set_env("TERM", "xterm");
        desc.set_env("TERM", "msys");
        assert_eq!(desc.env("TERM"), Some("msys"));
        assert_eq!(desc.env_len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut desc = LaunchDescriptor::new();
        desc.set_env("Path", "a");
        desc.set_env("PATH", "b");
        assert_eq!(desc.env("Path"), Some("a"));
        assert_eq!(desc.env("PATH"), Some("b"));
        assert_eq!(desc.env_len(), 2);
    }

    #[test]
    fn test_env_vars_yields_all_entries() {
        let mut desc = LaunchDescriptor::new();
        desc.set_env("A", "1");
        desc.set_env("B", "2");
        let mut entries: Vec<_> = desc.env_vars().collect();
        entries.sort();
        assert_eq!(entries, vec![("A", "1"), ("B", "2")]);
    }
}
