use crate::error::AnonymizeError;
use itertools::Itertools;

/// Column values are statically tagged. A missing cell is `None` in either
/// variant, which keeps the string-conversion path total for the
/// k-anonymity rewrites.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Number(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Number(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// String representation of a cell, `None` for missing cells. Numbers
    /// render through f64's `Display` (shortest round-trip, so `34.0`
    /// becomes `"34"`).
    pub fn text_value(&self, row: usize) -> Option<String> {
        match &self.data {
            ColumnData::Number(values) => values[row].map(|value| format!("{}", value)),
            ColumnData::Text(values) => values[row].clone(),
        }
    }

    /// Like `text_value`, with missing cells as the empty string. This is
    /// the serialization format for csv output.
    pub fn display_value(&self, row: usize) -> String {
        self.text_value(row).unwrap_or_default()
    }

    /// Number of distinct present values. Missing cells do not count.
    pub fn distinct_count(&self) -> usize {
        (0..self.len())
            .filter_map(|row| self.text_value(row))
            .unique()
            .count()
    }
}

/// The tabular store: named columns aligned by row index. Construction
/// validates the row-count invariant and column-name uniqueness; transforms
/// take a `&Table` and return a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self, AnonymizeError> {
        if let Some(first) = columns.first() {
            if columns.iter().any(|column| column.len() != first.len()) {
                return Err(AnonymizeError::MismatchedColumnLengths);
            }
        }

        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|c| c.name() == column.name()) {
                return Err(AnonymizeError::DuplicateColumn(column.name().to_string()));
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
