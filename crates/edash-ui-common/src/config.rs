//! Dashboard configuration.
//!
//! [`DashboardConfig`] is stored in `~/.edash/config.toml`. Every section and
//! field has a default, so partial files are fine.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use edash_energy::{MissingValuePolicy, Selection, DEFAULT_TOP_N};
use edash_thermal::SimulationParams;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub energy: EnergyConfig,
    /// Initial slider values of the cooling page.
    pub cooling: SimulationParams,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Where the raw consumption table lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    pub missing_values: MissingValuePolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("World_Energy_Consumption.csv"),
            missing_values: MissingValuePolicy::default(),
        }
    }
}

/// Defaults for the energy page selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    pub default_years: BTreeSet<i32>,
    pub default_countries: BTreeSet<String>,
    /// Length of the non-renewable dependence ranking.
    pub top_n: usize,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        let selection = Selection::default();
        Self {
            default_years: selection.years,
            default_countries: selection.countries,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl EnergyConfig {
    pub fn selection(&self) -> Selection {
        Selection {
            years: self.default_years.clone(),
            countries: self.default_countries.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals shown on metric values.
    pub decimal_places: usize,
    /// Shown instead of a metric that has no value.
    pub na_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: 1,
            na_label: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".edash"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save_to(&path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edash_core::Celsius;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.energy.selection(), Selection::default());
        assert_eq!(config.energy.top_n, 10);
        assert_eq!(config.cooling.duration_minutes, 180);
        assert_eq!(config.cooling.initial_temp, Celsius(50.0));
        assert_eq!(config.display.na_label, "N/A");
        assert_eq!(config.data.missing_values, MissingValuePolicy::ExcludeRow);
    }

    #[test]
    fn partial_config_parsing() {
        let toml = r#"
            [data]
            path = "data/energy.csv"
            missing_values = "zero"

            [energy]
            default_countries = ["Brazil", "Chile"]

            [cooling]
            coefficient_grass = 0.03
        "#;
        let config: DashboardConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.data.path, PathBuf::from("data/energy.csv"));
        assert_eq!(config.data.missing_values, MissingValuePolicy::TreatAsZero);
        let selection = config.energy.selection();
        assert!(selection.contains("Chile", 2021));
        assert!(!selection.contains("World", 2021));
        assert_eq!(config.cooling.coefficient_grass, 0.03);
        assert_eq!(config.cooling.coefficient_concrete, 0.005);
        assert_eq!(config.display.decimal_places, 1);
    }

    #[test]
    fn save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let mut config = DashboardConfig::default();
        config.energy.top_n = 5;
        config.cooling.ambient_temp = Celsius(30.0);
        config.save_to(file.path()).unwrap();

        let loaded = DashboardConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[energy]\ntop_n = \"many\"\n").unwrap();
        assert!(matches!(
            DashboardConfig::load_from(file.path()),
            Err(Error::Serialization(_))
        ));
    }
}
