//! Summary views over the derived table.
//!
//! Every view filters the derived table with a [`Selection`] first and never
//! mutates its input. An empty selection produces empty tables and NaN
//! metrics rather than an error.

use edash_core::{
    EnergySource, Percent, SourceCategory, TerawattHours, COUNTRY_COLUMN, TOTAL_COLUMN,
    YEAR_COLUMN,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::Result;
use crate::selection::{filter, Selection};

/// Ranking length used by the dashboard.
pub const DEFAULT_TOP_N: usize = 10;

pub const CATEGORY_COLUMN: &str = "category";
pub const PERCENTAGE_COLUMN: &str = "percentage";
pub const SOURCE_COLUMN: &str = "source";
pub const MEAN_PERCENTAGE_COLUMN: &str = "mean_percentage";

// melt output names
const MELT_VARIABLE: &str = "variable";
const MELT_VALUE: &str = "value";

/// Long-form category shares: `country, year, category, percentage`.
///
/// Laid out the way a melt lays it out: every selected row's renewable share,
/// then every selected row's non-renewable share.
pub fn time_series(derived: &DataFrame, selection: &Selection) -> Result<DataFrame> {
    let wide = filter(derived, selection)?
        .lazy()
        .select(
            [col(COUNTRY_COLUMN), col(YEAR_COLUMN)]
                .into_iter()
                .chain(
                    SourceCategory::ALL
                        .iter()
                        .map(|cat| col(cat.share_column()).alias(cat.label())),
                )
                .collect::<Vec<_>>(),
        )
        .collect()?;

    let categories: Vec<&str> = SourceCategory::ALL.iter().map(|c| c.label()).collect();
    let mut long = wide.melt([COUNTRY_COLUMN, YEAR_COLUMN], categories)?;
    long.rename(MELT_VARIABLE, CATEGORY_COLUMN)?;
    long.rename(MELT_VALUE, PERCENTAGE_COLUMN)?;
    Ok(long)
}

/// Stacked yearly composition: `year, source, mean_percentage`.
///
/// For each selected year present (ascending), the mean of each categorized
/// source's percentage across the selected countries. Sources are listed
/// renewable members first, then non-renewable members; `other_perc` is not
/// part of the composition.
pub fn yearly_composition(derived: &DataFrame, selection: &Selection) -> Result<DataFrame> {
    let sources: Vec<&str> = EnergySource::CATEGORIZED
        .iter()
        .map(|src| src.share_column())
        .collect();

    let means = filter(derived, selection)?
        .lazy()
        .group_by([col(YEAR_COLUMN)])
        .agg(sources.iter().map(|name| col(name).mean()).collect::<Vec<_>>())
        .collect()?;

    // melt lists source-major; a stable sort by year makes it year-major and
    // keeps the source order within each year
    let mut long = means.melt([YEAR_COLUMN], sources)?;
    long.rename(MELT_VARIABLE, SOURCE_COLUMN)?;
    long.rename(MELT_VALUE, MEAN_PERCENTAGE_COLUMN)?;
    Ok(long
        .lazy()
        .sort(
            YEAR_COLUMN,
            SortOptions {
                maintain_order: true,
                ..Default::default()
            },
        )
        .collect()?)
}

/// Per-country means used by [`ranking`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDependence {
    pub country: String,
    pub renewable_share: Percent,
    pub non_renewable_share: Percent,
    pub total: TerawattHours,
}

/// Countries most dependent on non-renewable sources, as a table:
/// `country, renewable_share, non_renewable_share, total`.
///
/// Selected rows are grouped by country and the group means of both shares
/// and of the total are sorted by mean non-renewable share, descending. Groups
/// enter the sort in country-name order and the sort is stable, so tied
/// countries rank alphabetically.
pub fn ranking(derived: &DataFrame, selection: &Selection, top_n: usize) -> Result<DataFrame> {
    let renewable = SourceCategory::Renewable.share_column();
    let non_renewable = SourceCategory::NonRenewable.share_column();

    let ranked = filter(derived, selection)?
        .lazy()
        .group_by([col(COUNTRY_COLUMN)])
        .agg([
            col(renewable).mean(),
            col(non_renewable).mean(),
            col(TOTAL_COLUMN).mean(),
        ])
        .sort(COUNTRY_COLUMN, SortOptions::default())
        .sort(
            non_renewable,
            SortOptions {
                descending: true,
                nulls_last: true,
                maintain_order: true,
                ..Default::default()
            },
        )
        .limit(top_n as IdxSize)
        .collect()?;
    Ok(ranked)
}

/// [`ranking`] as typed rows.
pub fn ranking_rows(
    derived: &DataFrame,
    selection: &Selection,
    top_n: usize,
) -> Result<Vec<CountryDependence>> {
    let ranked = ranking(derived, selection, top_n)?;
    let countries = columns::strings(&ranked, COUNTRY_COLUMN)?;
    let renewable = columns::floats(&ranked, SourceCategory::Renewable.share_column())?;
    let non_renewable = columns::floats(&ranked, SourceCategory::NonRenewable.share_column())?;
    let totals = columns::floats(&ranked, TOTAL_COLUMN)?;

    Ok(countries
        .into_iter()
        .zip(renewable)
        .zip(non_renewable)
        .zip(totals)
        .filter_map(|(((country, renewable), non_renewable), total)| {
            Some(CountryDependence {
                country: country?,
                renewable_share: Percent(renewable),
                non_renewable_share: Percent(non_renewable),
                total: TerawattHours(total),
            })
        })
        .collect())
}

/// Headline averages over the selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of selected rows the means were taken over.
    pub rows: usize,
    pub mean_total: TerawattHours,
    pub mean_renewable_share: Percent,
    pub mean_non_renewable_share: Percent,
}

impl SummaryMetrics {
    /// True when nothing was selected; all means are NaN in that case.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

pub fn summary_metrics(derived: &DataFrame, selection: &Selection) -> Result<SummaryMetrics> {
    let rows = filter(derived, selection)?;
    let mean = |name: &str| -> Result<f64> {
        Ok(rows.column(name)?.mean().unwrap_or(f64::NAN))
    };
    Ok(SummaryMetrics {
        rows: rows.height(),
        mean_total: TerawattHours(mean(TOTAL_COLUMN)?),
        mean_renewable_share: Percent(mean(SourceCategory::Renewable.share_column())?),
        mean_non_renewable_share: Percent(mean(SourceCategory::NonRenewable.share_column())?),
    })
}

/// The selected rows as a browsable table: `country, year, renewable_share,
/// non_renewable_share, total`, largest total first (stable).
pub fn filtered_table(derived: &DataFrame, selection: &Selection) -> Result<DataFrame> {
    let table = filter(derived, selection)?
        .lazy()
        .select([
            col(COUNTRY_COLUMN),
            col(YEAR_COLUMN),
            col(SourceCategory::Renewable.share_column()),
            col(SourceCategory::NonRenewable.share_column()),
            col(TOTAL_COLUMN),
        ])
        .sort(
            TOTAL_COLUMN,
            SortOptions {
                descending: true,
                nulls_last: true,
                maintain_order: true,
                ..Default::default()
            },
        )
        .collect()?;
    Ok(table)
}
