//! Main dashboard service entry point.
//!
//! [`DashboardService`] is pull-based: a front end calls it again whenever a
//! selector or slider changes. The raw table comes from the shared
//! [`TableCache`], so repeated calls only re-run the (cheap, pure) derivation.

use std::path::PathBuf;
use std::sync::Arc;

use edash_energy::{Selection, ShareCalculator};
use edash_io::TableCache;
use edash_thermal::SimulationParams;
use parking_lot::RwLock;
use polars::prelude::DataFrame;
use tracing::info;

use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::pages::{CoolingPage, EnergyPage};

/// Builds page models from the configured dataset and parameters.
pub struct DashboardService {
    config: Arc<RwLock<DashboardConfig>>,
    tables: Arc<TableCache>,
}

impl DashboardService {
    /// Service with configuration from `~/.edash/config.toml`, or defaults.
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(DashboardConfig::load()?))
    }

    /// Service with the given configuration and a private table cache.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self::with_cache(config, TableCache::shared())
    }

    /// Service sharing an existing table cache.
    pub fn with_cache(config: DashboardConfig, tables: Arc<TableCache>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            tables,
        }
    }

    /// Shared configuration; writes apply to the next page built.
    pub fn config(&self) -> &Arc<RwLock<DashboardConfig>> {
        &self.config
    }

    /// Table cache the raw dataset is read through.
    pub fn tables(&self) -> &Arc<TableCache> {
        &self.tables
    }

    /// Selection the energy page starts with.
    pub fn default_selection(&self) -> Selection {
        self.config.read().energy.selection()
    }

    /// Slider values the cooling page starts with.
    pub fn default_params(&self) -> SimulationParams {
        self.config.read().cooling
    }

    /// Configured dataset location.
    pub fn data_path(&self) -> PathBuf {
        self.config.read().data.path.clone()
    }

    /// Raw table through the cache, then the share derivation.
    pub fn derived_table(&self) -> Result<DataFrame> {
        let (path, policy) = {
            let config = self.config.read();
            (config.data.path.clone(), config.data.missing_values)
        };
        let raw = self
            .tables
            .get_or_load(&path)
            .map_err(|source| Error::LoadFailed {
                path: path.clone(),
                source,
            })?;
        let derived = ShareCalculator::new()
            .with_missing_values(policy)
            .compute(&raw)?;
        Ok(derived)
    }

    /// Options, metrics and tables of the energy page for `selection`.
    pub fn energy_page(&self, selection: &Selection) -> Result<EnergyPage> {
        let derived = self.derived_table()?;
        let (energy, display) = {
            let config = self.config.read();
            (config.energy.clone(), config.display.clone())
        };
        let page = EnergyPage::build(&derived, selection, &energy, &display)?;
        info!(
            rows = page.metrics.summary.rows,
            years = selection.years.len(),
            countries = selection.countries.len(),
            "built energy page"
        );
        Ok(page)
    }

    /// Both cooling curves and their final temperatures for `params`.
    pub fn cooling_page(&self, params: &SimulationParams) -> Result<CoolingPage> {
        let display = self.config.read().display.clone();
        let page = CoolingPage::build(params, &display)?;
        info!(
            minutes = params.duration_minutes,
            concrete = %page.final_concrete,
            grass = %page.final_grass,
            "built cooling page"
        );
        Ok(page)
    }
}
