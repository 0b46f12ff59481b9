//! Per-process merge of sample files.
//!
//! Kernel counters are cumulative for the lifetime of a tracing session, so a
//! later sample's count for a bitmask supersedes an earlier one. Taking the
//! maximum instead of trusting file order keeps the result correct when files
//! are discovered out of order.
//!
//! This assumes counters never reset between samples. If they do, summing
//! deltas would be the right merge; nothing in the dumps lets us detect that.

use crate::parser::FlagCounts;
use log::debug;
use std::collections::BTreeMap;

/// Merge `sample` into `into`, keeping the larger count per bitmask.
pub fn merge_max(into: &mut BTreeMap<u64, u64>, sample: &FlagCounts) {
    for (&flags, &count) in sample {
        let slot = into.entry(flags).or_insert(0);
        *slot = (*slot).max(count);
    }
}

/// All samples of one process, merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessAggregate {
    pub pid: u64,

    /// Bitmask -> maximum count seen across samples, ascending by bitmask
    pub counts: BTreeMap<u64, u64>,

    /// Number of sample files that contributed, including unreadable ones
    pub sample_files: usize,
}

impl ProcessAggregate {
    /// Build the aggregate for `pid` from its parsed samples.
    ///
    /// **Public** - main entry point for per-process aggregation
    ///
    /// The result does not depend on the order of `samples`.
    pub fn from_samples<'a, I>(pid: u64, samples: I) -> Self
    where
        I: IntoIterator<Item = &'a FlagCounts>,
    {
        let mut counts = BTreeMap::new();
        let mut sample_files = 0;

        for sample in samples {
            merge_max(&mut counts, sample);
            sample_files += 1;
        }

        debug!(
            "PID {}: {} configurations from {} samples",
            pid,
            counts.len(),
            sample_files
        );

        Self {
            pid,
            counts,
            sample_files,
        }
    }

    /// Number of distinct flag bitmasks seen for this process
    pub fn unique_configurations(&self) -> usize {
        self.counts.len()
    }

    /// Sum of the merged counts
    pub fn total_events(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(u64, u64)]) -> FlagCounts {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_merge_keeps_maximum() {
        let a = counts(&[(0x1, 10)]);
        let b = counts(&[(0x1, 3), (0x5, 7)]);

        let agg = ProcessAggregate::from_samples(200, [&a, &b]);

        assert_eq!(agg.counts.get(&0x1), Some(&10));
        assert_eq!(agg.counts.get(&0x5), Some(&7));
        assert_eq!(agg.unique_configurations(), 2);
        assert_eq!(agg.total_events(), 17);
        assert_eq!(agg.sample_files, 2);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = counts(&[(0x1, 10), (0x2, 1)]);
        let b = counts(&[(0x1, 3), (0x5, 7)]);

        let ab = ProcessAggregate::from_samples(1, [&a, &b]);
        let ba = ProcessAggregate::from_samples(1, [&b, &a]);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_empty_samples() {
        let empty = FlagCounts::new();
        let agg = ProcessAggregate::from_samples(9, [&empty]);

        assert_eq!(agg.unique_configurations(), 0);
        assert_eq!(agg.total_events(), 0);
        assert_eq!(agg.sample_files, 1);
    }

    #[test]
    fn test_total_events_saturates() {
        let a = counts(&[(0x1, u64::MAX), (0x2, 1)]);
        let agg = ProcessAggregate::from_samples(1, [&a]);
        assert_eq!(agg.total_events(), u64::MAX);
    }
}
