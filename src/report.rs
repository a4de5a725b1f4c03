use crate::table::Table;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub column: String,
    pub original_distinct: usize,
    pub anonymized_distinct: usize,
    /// original minus anonymized distinct count. Negative when a transform
    /// introduced more distinct values than it removed (synthetic
    /// replacement can do that).
    pub privacy_gain: i64,
}

/// One entry per original column still present in the anonymized table, in
/// original column order. Distinct counts are computed independently per
/// side; no attempt is made to match up individual values.
pub fn anonymization_report(original: &Table, anonymized: &Table) -> Vec<ReportEntry> {
    original
        .columns()
        .iter()
        .filter_map(|column| {
            anonymized.column(column.name()).map(|after| {
                let original_distinct = column.distinct_count();
                let anonymized_distinct = after.distinct_count();

                ReportEntry {
                    column: column.name().to_string(),
                    original_distinct,
                    anonymized_distinct,
                    privacy_gain: original_distinct as i64 - anonymized_distinct as i64,
                }
            })
        })
        .collect()
}

pub fn render_report(entries: &[ReportEntry]) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<20} {:<20} {:<20} {}",
        "Column", "Original Unique", "Anonymized Unique", "Privacy Gain"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(75)).unwrap();
    for entry in entries {
        writeln!(
            out,
            "{:<20} {:<20} {:<20} {}",
            entry.column, entry.original_distinct, entry.anonymized_distinct, entry.privacy_gain
        )
        .unwrap();
    }
    writeln!(out, "{}", "-".repeat(75)).unwrap();

    out
}
