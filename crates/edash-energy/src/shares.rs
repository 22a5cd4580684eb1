//! Renewable / non-renewable share derivation.
//!
//! Turns the raw generation table (one row per country and year, TWh per
//! source) into the derived table every view reads from:
//!
//! 1. `total` = sum of the nine source columns
//! 2. rows whose total is not strictly positive are dropped
//! 3. `<source>_perc` = 100 * source / total, for all nine sources
//! 4. `renewable_share` / `non_renewable_share` = sum of the four member
//!    percentages of each category
//!
//! `other_renewable_electricity` contributes to `total` but to neither
//! category, so the two category shares only partition 100% when it is zero.

use edash_core::{EnergySource, SourceCategory, COUNTRY_COLUMN, TOTAL_COLUMN, YEAR_COLUMN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::schema::validate_raw;

/// How a missing or non-numeric source value affects its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingValuePolicy {
    /// The row total becomes undefined and the row is dropped.
    #[default]
    #[serde(rename = "exclude")]
    ExcludeRow,
    /// The value counts as zero generation.
    #[serde(rename = "zero")]
    TreatAsZero,
}

/// Stateless share derivation; see the module docs for the steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareCalculator {
    missing_values: MissingValuePolicy,
}

impl ShareCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    pub fn missing_values(&self) -> MissingValuePolicy {
        self.missing_values
    }

    /// Derive totals and shares from a raw table. The input is not modified.
    pub fn compute(&self, raw: &DataFrame) -> Result<DataFrame> {
        validate_raw(raw)?;

        let mut normalized = vec![
            col(COUNTRY_COLUMN).cast(DataType::Utf8),
            col(YEAR_COLUMN).cast(DataType::Int32),
        ];
        normalized.extend(EnergySource::ALL.iter().map(|src| {
            let value = col(src.column()).cast(DataType::Float64);
            match self.missing_values {
                MissingValuePolicy::ExcludeRow => value,
                MissingValuePolicy::TreatAsZero => {
                    value.fill_nan(lit(0.0)).fill_null(lit(0.0))
                }
            }
            .alias(src.column())
        }));

        // null + x stays null, NaN + x stays NaN: either way the row fails the
        // positivity filter below.
        let total = EnergySource::ALL
            .iter()
            .fold(lit(0.0), |acc, src| acc + col(src.column()))
            .alias(TOTAL_COLUMN);

        let percentages: Vec<Expr> = EnergySource::ALL
            .iter()
            .map(|src| {
                (lit(100.0) * col(src.column()) / col(TOTAL_COLUMN)).alias(src.share_column())
            })
            .collect();

        let category_shares: Vec<Expr> = SourceCategory::ALL
            .iter()
            .map(|cat| {
                cat.members()
                    .iter()
                    .fold(lit(0.0), |acc, src| acc + col(src.share_column()))
                    .alias(cat.share_column())
            })
            .collect();

        let derived = raw
            .clone()
            .lazy()
            .with_columns(normalized)
            .with_column(total)
            .filter(
                col(TOTAL_COLUMN)
                    .is_not_null()
                    .and(col(TOTAL_COLUMN).is_not_nan())
                    .and(col(TOTAL_COLUMN).gt(lit(0.0))),
            )
            .with_columns(percentages)
            .with_columns(category_shares)
            .collect()?;

        debug!(
            rows_in = raw.height(),
            rows_out = derived.height(),
            policy = ?self.missing_values,
            "derived energy shares"
        );
        Ok(derived)
    }
}

/// [`ShareCalculator::compute`] with the default policy (rows with missing
/// source values are excluded).
pub fn compute(raw: &DataFrame) -> Result<DataFrame> {
    ShareCalculator::default().compute(raw)
}
