//! Reading the raw input table from disk.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
#[cfg(feature = "parquet")]
use polars::prelude::ParquetReader;
use tracing::info;

/// Supported on-disk table formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "parquet" => Ok(TableFormat::Parquet),
            _ => Err(anyhow!(
                "unsupported file extension '{}'; use .csv or .parquet",
                extension
            )),
        }
    }
}

/// Read a whole table into memory.
///
/// CSV schema inference scans every row: the consumption dataset has source
/// columns that are empty for decades before their first value, so a short
/// inference window guesses the wrong type.
pub fn read_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let format = TableFormat::from_path(path)?;
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let df = match format {
        TableFormat::Csv => CsvReader::new(&mut file)
            .has_header(true)
            .infer_schema(None)
            .finish()
            .with_context(|| format!("reading CSV file {}", path.display()))?,
        #[cfg(feature = "parquet")]
        TableFormat::Parquet => ParquetReader::new(&mut file)
            .finish()
            .with_context(|| format!("reading Parquet file {}", path.display()))?,
        #[cfg(not(feature = "parquet"))]
        TableFormat::Parquet => {
            return Err(anyhow!(
                "parquet support is disabled; rebuild with the 'parquet' feature"
            ))
        }
    };

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}
