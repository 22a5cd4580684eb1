//! Year / country selections and the filtered projection they define.

use std::collections::BTreeSet;

use edash_core::{COUNTRY_COLUMN, YEAR_COLUMN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::columns;
use crate::error::Result;
use crate::schema::validate_derived;

/// Years and countries picked by the caller. A row is selected when both its
/// year and its country are in the sets; empty sets select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub years: BTreeSet<i32>,
    pub countries: BTreeSet<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new([2020, 2021], ["World"])
    }
}

impl Selection {
    pub fn new<Y, C, S>(years: Y, countries: C) -> Self
    where
        Y: IntoIterator<Item = i32>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            years: years.into_iter().collect(),
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Selects nothing.
    pub fn empty() -> Self {
        Self {
            years: BTreeSet::new(),
            countries: BTreeSet::new(),
        }
    }

    pub fn contains(&self, country: &str, year: i32) -> bool {
        self.years.contains(&year) && self.countries.contains(country)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() || self.countries.is_empty()
    }
}

/// Rows of the derived table matched by `selection`, in input order.
pub fn filter(derived: &DataFrame, selection: &Selection) -> Result<DataFrame> {
    validate_derived(derived)?;
    let countries = columns::strings(derived, COUNTRY_COLUMN)?;
    let years = columns::years(derived, YEAR_COLUMN)?;

    let mask: BooleanChunked = countries
        .iter()
        .zip(years.iter())
        .map(|(country, year)| match (country, year) {
            (Some(country), Some(year)) => selection.contains(country, *year),
            _ => false,
        })
        .collect();

    let filtered = derived.filter(&mask)?;
    debug!(
        rows = filtered.height(),
        years = selection.years.len(),
        countries = selection.countries.len(),
        "filtered derived table"
    );
    Ok(filtered)
}

/// Distinct years present, ascending. These are the options offered to the
/// year selector.
pub fn available_years(derived: &DataFrame) -> Result<Vec<i32>> {
    let years: BTreeSet<i32> = columns::years(derived, YEAR_COLUMN)?
        .into_iter()
        .flatten()
        .collect();
    Ok(years.into_iter().collect())
}

/// Distinct country names present, sorted.
pub fn available_countries(derived: &DataFrame) -> Result<Vec<String>> {
    let countries: BTreeSet<String> = columns::strings(derived, COUNTRY_COLUMN)?
        .into_iter()
        .flatten()
        .collect();
    Ok(countries.into_iter().collect())
}
