//! Column contracts for the raw and derived tables.

use edash_core::{EnergySource, SourceCategory, COUNTRY_COLUMN, TOTAL_COLUMN, YEAR_COLUMN};
use polars::prelude::*;

use crate::error::{Error, Result};

/// Columns a raw table must carry: identifiers, then the nine sources.
pub fn raw_columns() -> Vec<&'static str> {
    let mut cols = vec![COUNTRY_COLUMN, YEAR_COLUMN];
    cols.extend(EnergySource::ALL.iter().map(|src| src.column()));
    cols
}

/// Columns added by the derivation on top of [`raw_columns`].
pub fn derived_columns() -> Vec<&'static str> {
    let mut cols = vec![TOTAL_COLUMN];
    cols.extend(EnergySource::ALL.iter().map(|src| src.share_column()));
    cols.extend(SourceCategory::ALL.iter().map(|cat| cat.share_column()));
    cols
}

pub fn validate_raw(df: &DataFrame) -> Result<()> {
    require(df, raw_columns())
}

/// Projections accept any table carrying the derived columns; the raw
/// source columns are not needed once shares exist.
pub fn validate_derived(df: &DataFrame) -> Result<()> {
    let mut cols = vec![COUNTRY_COLUMN, YEAR_COLUMN];
    cols.extend(derived_columns());
    require(df, cols)
}

fn require(df: &DataFrame, columns: Vec<&'static str>) -> Result<()> {
    let present = df.get_column_names();
    let missing: Vec<String> = columns
        .into_iter()
        .filter(|name| !present.iter().any(|p| p == name))
        .map(String::from)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns { missing })
    }
}
