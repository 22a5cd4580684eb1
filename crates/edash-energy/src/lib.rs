//! # edash-energy: electricity share pipeline
//!
//! Derives renewable / non-renewable shares from per-country, per-year
//! generation tables and builds the views the energy page renders.
//!
//! ```text
//! raw table ──► compute ──► derived table ──┬─► time_series
//!                                           ├─► yearly_composition
//!                 Selection (years, ───────►├─► ranking
//!                 countries)                ├─► summary_metrics
//!                                           └─► filtered_table
//! ```
//!
//! All operations are pure functions over `polars` frames. Tables with
//! missing columns are rejected with [`Error::MissingColumns`]; empty
//! selections give empty tables and NaN metrics.
//!
//! ```ignore
//! use edash_energy::{compute, ranking, Selection, DEFAULT_TOP_N};
//!
//! let derived = compute(&raw)?;
//! let top = ranking(&derived, &Selection::default(), DEFAULT_TOP_N)?;
//! ```

mod columns;
pub mod error;
pub mod schema;
pub mod selection;
pub mod shares;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use selection::{available_countries, available_years, filter, Selection};
pub use shares::{compute, MissingValuePolicy, ShareCalculator};
pub use views::{
    filtered_table, ranking, ranking_rows, summary_metrics, time_series, yearly_composition,
    CountryDependence, SummaryMetrics, DEFAULT_TOP_N,
};
