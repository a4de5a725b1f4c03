mod config;
mod dataset;
mod error;
mod report;
pub mod synthetic;
mod table;
mod transform;

pub use self::config::load_config;
pub use self::config::ApplicationConfig;
pub use self::config::ColumnConfiguration;
pub use dataset::load_dataset;
pub use dataset::save_dataset;
pub use error::AnonymizeError;
pub use report::anonymization_report;
pub use report::render_report;
pub use report::ReportEntry;
pub use table::Column;
pub use table::ColumnData;
pub use table::Table;
pub use transform::apply_differential_privacy;
pub use transform::apply_k_anonymity;
pub use transform::equivalence_classes;
pub use transform::GroupKey;
pub use transform::Strategy;
