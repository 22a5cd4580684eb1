//! Builders for small raw tables used across the unit tests.

use edash_core::{EnergySource, COUNTRY_COLUMN, YEAR_COLUMN};
use polars::prelude::*;

/// One raw record; every source starts at zero generation.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub country: String,
    pub year: i32,
    pub values: [Option<f64>; 9],
}

impl SourceRow {
    pub fn new(country: &str, year: i32) -> Self {
        Self {
            country: country.to_string(),
            year,
            values: [Some(0.0); 9],
        }
    }

    pub fn uniform(country: &str, year: i32, value: f64) -> Self {
        Self {
            values: [Some(value); 9],
            ..Self::new(country, year)
        }
    }

    pub fn with(mut self, source: EnergySource, value: f64) -> Self {
        self.values[index_of(source)] = Some(value);
        self
    }

    pub fn missing(mut self, source: EnergySource) -> Self {
        self.values[index_of(source)] = None;
        self
    }
}

fn index_of(source: EnergySource) -> usize {
    EnergySource::ALL
        .iter()
        .position(|s| *s == source)
        .expect("source listed in ALL")
}

pub fn raw_table(rows: &[SourceRow]) -> DataFrame {
    let countries: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    let mut columns = vec![
        Series::new(COUNTRY_COLUMN, countries),
        Series::new(YEAR_COLUMN, years),
    ];
    for (i, source) in EnergySource::ALL.iter().enumerate() {
        let values: Vec<Option<f64>> = rows.iter().map(|r| r.values[i]).collect();
        columns.push(Series::new(source.column(), values));
    }
    DataFrame::new(columns).expect("valid raw table")
}

/// Value of a float column at `row`; null reads as NaN.
pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> f64 {
    df.column(column)
        .expect("column present")
        .f64()
        .expect("float column")
        .get(row)
        .unwrap_or(f64::NAN)
}

pub fn str_column(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .expect("column present")
        .utf8()
        .expect("string column")
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

pub fn i32_column(df: &DataFrame, column: &str) -> Vec<i32> {
    df.column(column)
        .expect("column present")
        .i32()
        .expect("i32 column")
        .into_iter()
        .map(|v| v.unwrap_or_default())
        .collect()
}
