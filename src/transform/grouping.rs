use crate::error::AnonymizeError;
use crate::table::Table;
use std::collections::HashMap;

/// One grouping key component per quasi-identifier column. `None` marks a
/// missing cell, which is a valid, distinct key of its own.
pub type GroupKey = Vec<Option<String>>;

/// Partitions the row set by the joint value of the given columns. Row
/// indices within a class keep their ascending original order. The result
/// reflects the table as passed in; callers chaining transforms must
/// regroup against the latest table.
pub fn equivalence_classes(
    table: &Table,
    columns: &[String],
) -> Result<HashMap<GroupKey, Vec<usize>>, AnonymizeError> {
    let mut selected = Vec::with_capacity(columns.len());
    for name in columns {
        let column = table
            .column(name)
            .ok_or_else(|| AnonymizeError::ColumnNotFound(name.clone()))?;
        selected.push(column);
    }

    let mut classes: HashMap<GroupKey, Vec<usize>> = HashMap::new();
    for row in 0..table.num_rows() {
        let key: GroupKey = selected.iter().map(|column| column.text_value(row)).collect();
        classes.entry(key).or_default().push(row);
    }

    Ok(classes)
}
