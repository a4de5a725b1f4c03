use crate::error::AnonymizeError;
use serde::Deserialize;
use std::path::Path;

/// Declared role of a column, per run. Roles are caller-supplied, never
/// inferred from the data.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ColumnConfiguration {
    Numeric { name: String },
    QuasiIdentifier { name: String },
}

#[derive(Debug, Deserialize)]
pub struct ApplicationConfig {
    pub input: Option<String>,
    pub output: String,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfiguration>,
}

fn default_epsilon() -> f64 {
    1.0
}

fn default_k() -> usize {
    2
}

fn default_strategy() -> String {
    "generalization".to_string()
}

pub fn load_config(path: &Path) -> Result<ApplicationConfig, AnonymizeError> {
    let mut s = config::Config::default();
    s.merge(config::File::from(path))?;
    Ok(s.try_into()?)
}
