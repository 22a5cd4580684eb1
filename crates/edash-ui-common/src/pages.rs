//! Everything a front end needs to draw each dashboard page.

use edash_energy::{
    available_countries, available_years, filtered_table, ranking, summary_metrics, time_series,
    yearly_composition, Selection, SummaryMetrics,
};
use edash_thermal::{simulate, CoolingRun, SimulationParams, Surface};
use polars::prelude::DataFrame;

use crate::config::{DisplayConfig, EnergyConfig};
use crate::error::{Error, Result};
use crate::metrics::MetricValue;

/// The three headline metrics of the energy page.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMetrics {
    pub summary: SummaryMetrics,
    pub mean_total: MetricValue,
    pub mean_renewable_share: MetricValue,
    pub mean_non_renewable_share: MetricValue,
}

impl EnergyMetrics {
    pub fn new(summary: SummaryMetrics, display: &DisplayConfig) -> Self {
        Self {
            mean_total: MetricValue::new(
                "Average total consumption (TWh)",
                summary.mean_total.value(),
                "",
            )
            .with_display(display),
            mean_renewable_share: MetricValue::new(
                "Average renewable share",
                summary.mean_renewable_share.value(),
                "%",
            )
            .with_display(display),
            mean_non_renewable_share: MetricValue::new(
                "Average non-renewable share",
                summary.mean_non_renewable_share.value(),
                "%",
            )
            .with_display(display),
            summary,
        }
    }

    pub fn as_array(&self) -> [&MetricValue; 3] {
        [
            &self.mean_total,
            &self.mean_renewable_share,
            &self.mean_non_renewable_share,
        ]
    }
}

/// Selector options, metrics and tables of the energy page.
#[derive(Debug, Clone)]
pub struct EnergyPage {
    /// Years offered by the year selector.
    pub year_options: Vec<i32>,
    /// Countries offered by the country selector.
    pub country_options: Vec<String>,
    pub selection: Selection,
    pub metrics: EnergyMetrics,
    /// Long-form shares for the per-country line chart.
    pub time_series: DataFrame,
    /// Mean per-source percentages for the stacked bar chart.
    pub composition: DataFrame,
    /// Top-N non-renewable dependence.
    pub ranking: DataFrame,
    /// Selected rows, largest total first.
    pub table: DataFrame,
}

impl EnergyPage {
    pub fn build(
        derived: &DataFrame,
        selection: &Selection,
        energy: &EnergyConfig,
        display: &DisplayConfig,
    ) -> Result<Self> {
        Ok(Self {
            year_options: available_years(derived)?,
            country_options: available_countries(derived)?,
            selection: selection.clone(),
            metrics: EnergyMetrics::new(summary_metrics(derived, selection)?, display),
            time_series: time_series(derived, selection)?,
            composition: yearly_composition(derived, selection)?,
            ranking: ranking(derived, selection, energy.top_n)?,
            table: filtered_table(derived, selection)?,
        })
    }

    /// True when the selection matched no rows; charts should show an empty
    /// state.
    pub fn is_empty(&self) -> bool {
        self.metrics.summary.is_empty()
    }
}

/// Series, chart table and final temperatures of the cooling page.
#[derive(Debug, Clone)]
pub struct CoolingPage {
    pub run: CoolingRun,
    /// `minute, concrete, grass`.
    pub frame: DataFrame,
    pub final_concrete: MetricValue,
    pub final_grass: MetricValue,
}

impl CoolingPage {
    pub fn build(params: &SimulationParams, display: &DisplayConfig) -> Result<Self> {
        let run = simulate(params);
        let frame = run.to_frame().map_err(|e| Error::Table(e.to_string()))?;
        let finals = run.final_temperatures();
        let metric = |surface: Surface, value: f64| {
            MetricValue::new(
                format!("Final temperature - {}", surface.label()),
                value,
                " °C",
            )
            .with_display(display)
        };
        Ok(Self {
            final_concrete: metric(Surface::Concrete, finals.concrete.value()),
            final_grass: metric(Surface::Grass, finals.grass.value()),
            frame,
            run,
        })
    }
}
