//! Allow-list of base commands permitted to run.

use std::collections::HashSet;

/// Set of permitted base command names.
///
/// Matching is exact and case-sensitive; there is no globbing and no
/// path resolution, so `/usr/bin/grep` and `grep` are different names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    commands: HashSet<String>,
}

impl AllowList {
    /// Create an allow-list from command names.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if `command` may run.
    pub fn permits(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    /// Number of permitted commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing is permitted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
