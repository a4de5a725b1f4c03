use crate::error::AnonymizeError;
use crate::table::{Column, ColumnData, Table};
use std::path::Path;
use tracing::info;

/// Loads a comma-separated file with a header row into a table. A column
/// whose every non-empty cell parses as f64 loads as numeric; anything else
/// loads as text. Empty cells load as missing.
pub fn load_dataset(path: &Path) -> Result<Table, AnonymizeError> {
    if !path.exists() {
        return Err(AnonymizeError::DatasetNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![vec![]; headers.len()];
    for record in reader.records() {
        let record = record?;
        for (index, field) in record.iter().enumerate() {
            cells[index].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column::new(name, infer_column(raw)))
        .collect();

    let table = Table::new(columns)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "dataset loaded"
    );

    Ok(table)
}

fn infer_column(raw: Vec<String>) -> ColumnData {
    let has_values = raw.iter().any(|cell| !cell.is_empty());
    let numeric = has_values
        && raw
            .iter()
            .all(|cell| cell.is_empty() || cell.trim().parse::<f64>().is_ok());

    if numeric {
        ColumnData::Number(
            raw.into_iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        cell.trim().parse().ok()
                    }
                })
                .collect(),
        )
    } else {
        ColumnData::Text(
            raw.into_iter()
                .map(|cell| if cell.is_empty() { None } else { Some(cell) })
                .collect(),
        )
    }
}

/// Serializes a table back to comma-separated text: header row, no index
/// column, missing cells as empty fields.
pub fn save_dataset(table: &Table, path: &Path) -> Result<(), AnonymizeError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.column_names())?;
    for row in 0..table.num_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.display_value(row))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), "anonymized dataset saved");

    Ok(())
}
