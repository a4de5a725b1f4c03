mod differential_privacy;
mod grouping;
mod k_anonymity;

pub use differential_privacy::apply_differential_privacy;
pub use grouping::{equivalence_classes, GroupKey};
pub use k_anonymity::{apply_k_anonymity, Strategy};
