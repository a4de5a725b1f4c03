use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnonymizeError {
    #[error("dataset '{}' not found. Please check the path.", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("invalid strategy '{0}'. Choose from: suppression, generalization, synthetic")]
    InvalidStrategy(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("epsilon must be strictly positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("columns have mismatched row counts")]
    MismatchedColumnLengths,

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
