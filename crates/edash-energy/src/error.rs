//! Errors raised by the share pipeline.

use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Only malformed input is an error. Degenerate data (zero totals, empty
/// selections) yields empty tables or NaN metrics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The input table lacks columns the pipeline needs.
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A dataframe operation failed, e.g. a column could not be cast.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
