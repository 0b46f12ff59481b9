//! In-memory shape of one parsed sample.

use std::collections::HashMap;

/// Observed occurrence count per PTE flag bitmask, scoped to one sample file
pub type FlagCounts = HashMap<u64, u64>;
