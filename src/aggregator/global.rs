//! Union of flag configurations across processes.

use super::process::ProcessAggregate;
use std::collections::BTreeSet;

/// Every distinct bitmask observed in any process.
///
/// Carries no counts; only distinctness matters globally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlagSet {
    flags: BTreeSet<u64>,
}

impl GlobalFlagSet {
    /// Union the key sets of all aggregates
    pub fn from_processes<'a, I>(processes: I) -> Self
    where
        I: IntoIterator<Item = &'a ProcessAggregate>,
    {
        let flags = processes
            .into_iter()
            .flat_map(|p| p.counts.keys().copied())
            .collect();
        Self { flags }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn contains(&self, flags: u64) -> bool {
        self.flags.contains(&flags)
    }

    /// Bitmasks in ascending numeric order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.flags.iter().copied()
    }
}
