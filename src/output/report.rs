//! Tables for the per-process and global views.

use super::table::{Cell, Table};
use crate::aggregator::{GlobalFlagSet, ProcessAggregate};
use crate::decoder::{decode, PteFlag};
use crate::utils::config::{HEX_COLUMN, PROCESS_COLUMNS};

/// Order processes by unique configurations, descending.
///
/// Stable: ties keep their input order.
pub fn rank_processes(processes: &[ProcessAggregate]) -> Vec<&ProcessAggregate> {
    let mut ranked: Vec<&ProcessAggregate> = processes.iter().collect();
    ranked.sort_by(|a, b| b.unique_configurations().cmp(&a.unique_configurations()));
    ranked
}

/// One row per process: PID, unique configurations, total events, sample files
pub fn process_table(processes: &[ProcessAggregate]) -> Table {
    let mut table = Table::new(PROCESS_COLUMNS.iter().copied());
    for p in rank_processes(processes) {
        table.push_row(vec![
            Cell::from(p.pid),
            Cell::from(p.unique_configurations()),
            Cell::from(p.total_events()),
            Cell::from(p.sample_files),
        ]);
    }
    table
}

/// One row per distinct bitmask, ascending: hex followed by each decoded field
pub fn global_flags_table(global: &GlobalFlagSet) -> Table {
    let headers = std::iter::once(HEX_COLUMN).chain(PteFlag::ALL.iter().map(|f| f.label()));
    let mut table = Table::new(headers);

    for raw in global.iter() {
        let decoded = decode(raw);
        let mut row = Vec::with_capacity(PteFlag::ALL.len() + 1);
        row.push(Cell::Text(decoded.hex()));
        row.extend(decoded.fields().map(|(_, v)| Cell::from(v)));
        table.push_row(row);
    }

    table
}
