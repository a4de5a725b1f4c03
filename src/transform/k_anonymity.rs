use super::grouping::equivalence_classes;
use crate::error::AnonymizeError;
use crate::synthetic;
use crate::table::{Column, ColumnData, Table};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Suppression,
    Generalization,
    Synthetic,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Suppression => "suppression",
            Strategy::Generalization => "generalization",
            Strategy::Synthetic => "synthetic",
        }
    }
}

impl FromStr for Strategy {
    type Err = AnonymizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suppression" => Ok(Strategy::Suppression),
            "generalization" => Ok(Strategy::Generalization),
            "synthetic" => Ok(Strategy::Synthetic),
            other => Err(AnonymizeError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Rewrites the quasi-identifier cells of every row whose equivalence class
/// has fewer than `k` members. Grouping runs once up front; every column in
/// `columns` is rewritten against that single set of classes, even though
/// rewriting an earlier column would have merged classes. Rewritten columns
/// come back as text columns; classes of size >= k keep their string
/// representation untouched.
pub fn apply_k_anonymity<R: Rng>(
    table: &Table,
    columns: &[String],
    k: usize,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Table, AnonymizeError> {
    let classes = equivalence_classes(table, columns)?;

    let mut small_rows: HashSet<usize> = HashSet::new();
    for rows in classes.values() {
        if rows.len() < k {
            small_rows.extend(rows.iter().copied());
        }
    }

    let quasi_identifiers: HashSet<&str> = columns.iter().map(String::as_str).collect();

    let mut rewritten = Vec::with_capacity(table.num_columns());
    for column in table.columns() {
        if !quasi_identifiers.contains(column.name()) {
            rewritten.push(column.clone());
            continue;
        }

        let values = (0..column.len())
            .map(|row| match column.text_value(row) {
                Some(text) if small_rows.contains(&row) => {
                    Some(rewrite(&text, column.name(), strategy, rng))
                }
                other => other,
            })
            .collect();

        rewritten.push(Column::new(column.name(), ColumnData::Text(values)));
    }

    info!(
        k,
        strategy = strategy.as_str(),
        rewritten_rows = small_rows.len(),
        "k-anonymity applied"
    );

    Table::new(rewritten)
}

fn rewrite<R: Rng>(text: &str, column_name: &str, strategy: Strategy, rng: &mut R) -> String {
    match strategy {
        Strategy::Suppression => "*".repeat(text.chars().count()),
        Strategy::Generalization => {
            let prefix: String = text.chars().take(2).collect();
            let hidden = text.chars().count().saturating_sub(2);
            format!("{}{}", prefix, "*".repeat(hidden))
        }
        Strategy::Synthetic => synthetic_value(column_name, rng),
    }
}

fn synthetic_value<R: Rng>(column_name: &str, rng: &mut R) -> String {
    let name = column_name.to_lowercase();

    if name.contains("zip") {
        synthetic::postal_code(rng)
    } else if name.contains("gender") {
        ["Male", "Female"].choose(rng).unwrap().to_string()
    } else if name.contains("occupation") || name.contains("job") {
        synthetic::job_title(rng)
    } else {
        synthetic::generic_word(rng)
    }
}
