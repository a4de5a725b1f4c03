use crate::error::AnonymizeError;
use crate::table::{Column, ColumnData, Table};
use rand::Rng;
use std::collections::HashSet;
use tracing::{info, warn};

/// Perturbs the requested numeric columns with Laplace noise calibrated to
/// `sensitivity / epsilon`, where sensitivity is the column's current
/// max − min. Results are rounded to 2 decimal places. Requested columns
/// that are absent or not numeric are skipped with a warning. Applying the
/// transform twice compounds the noise.
pub fn apply_differential_privacy<R: Rng>(
    table: &Table,
    columns: &[String],
    epsilon: f64,
    rng: &mut R,
) -> Result<Table, AnonymizeError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(AnonymizeError::InvalidEpsilon(epsilon));
    }

    for name in columns {
        if table.column(name).is_none() {
            warn!(column = %name, "column not found in dataset");
        }
    }

    let requested: HashSet<&str> = columns.iter().map(String::as_str).collect();

    let mut perturbed = Vec::with_capacity(table.num_columns());
    for column in table.columns() {
        if !requested.contains(column.name()) {
            perturbed.push(column.clone());
            continue;
        }

        match column.data() {
            ColumnData::Text(_) => {
                warn!(column = %column.name(), "column is not numeric, skipping");
                perturbed.push(column.clone());
            }
            ColumnData::Number(values) => {
                let scale = sensitivity(values) / epsilon;
                let noised = values
                    .iter()
                    .map(|value| value.map(|v| round2(v + sample_laplace(rng, scale))))
                    .collect();

                info!(column = %column.name(), epsilon, "differential privacy applied");
                perturbed.push(Column::new(column.name(), ColumnData::Number(noised)));
            }
        }
    }

    Table::new(perturbed)
}

/// Global sensitivity approximation: the spread of the column's present
/// values. Empty and constant columns have sensitivity 0.
fn sensitivity(values: &[Option<f64>]) -> f64 {
    let (min, max) = values
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(*value), max.max(*value))
        });

    if min > max {
        0.0
    } else {
        max - min
    }
}

// Inverse-CDF sampling: X = -b * sgn(U) * ln(1 - 2|U|), U ~ Uniform(-0.5, 0.5).
// The clamp keeps ln away from 0.
fn sample_laplace<R: Rng>(rng: &mut R, scale: f64) -> f64 {
    let u: f64 = rng.gen::<f64>() - 0.5;
    let clamped = (1.0 - 2.0 * u.abs()).clamp(f64::EPSILON, 1.0);
    -scale * u.signum() * clamped.ln()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
