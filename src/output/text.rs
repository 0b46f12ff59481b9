//! Aligned plain-text rendering for the console.

use super::table::Table;
use crate::utils::config::COLUMN_GAP;

/// Render a table with space-aligned columns.
///
/// Numeric cells are right-aligned, text cells left-aligned. Headers follow
/// the alignment of the column's first row. No trailing whitespace.
pub fn render_text(table: &Table) -> String {
    let widths = table.column_widths();
    let numeric: Vec<bool> = (0..table.headers.len())
        .map(|i| {
            table
                .rows
                .first()
                .and_then(|r| r.get(i))
                .is_some_and(|c| c.is_numeric())
        })
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(format_line(
        table.headers.iter().map(String::as_str),
        &widths,
        &numeric,
    ));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        let aligned: Vec<bool> = row.iter().map(|c| c.is_numeric()).collect();
        lines.push(format_line(cells.iter().map(String::as_str), &widths, &aligned));
    }

    lines.join("\n")
}

fn format_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_align: &[bool],
) -> String {
    let parts: Vec<String> = cells
        .zip(widths)
        .zip(right_align)
        .map(|((cell, &w), &right)| {
            if right {
                format!("{:>w$}", cell, w = w)
            } else {
                format!("{:<w$}", cell, w = w)
            }
        })
        .collect();
    parts.join(COLUMN_GAP).trim_end().to_string()
}
