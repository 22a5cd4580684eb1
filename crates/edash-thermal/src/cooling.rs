//! Surface cooling under Newton's law.
//!
//! Each surface relaxes toward ambient temperature following
//! `dT/dt = -k (T - T_amb)`. The exact solution
//!
//! ```text
//! T(t) = T_amb + (T_0 - T_amb) * exp(-k t)
//! ```
//!
//! is evaluated directly at every whole minute, so the series carries no
//! step-size error however long the run is.

use anyhow::Result;
use edash_core::Celsius;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs of one simulation run. Values are not range-checked: bounding them
/// is up to whoever collects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Surface temperature at minute zero.
    pub initial_temp: Celsius,
    /// Air temperature both surfaces relax toward.
    pub ambient_temp: Celsius,
    /// Length of the run in minutes; the series has `duration_minutes + 1` points.
    pub duration_minutes: u32,
    /// Decay rate of concrete, per minute.
    pub coefficient_concrete: f64,
    /// Decay rate of grass, per minute.
    pub coefficient_grass: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_temp: Celsius(50.0),
            ambient_temp: Celsius(25.0),
            duration_minutes: 180,
            coefficient_concrete: 0.005,
            coefficient_grass: 0.02,
        }
    }
}

/// Surfaces compared by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Concrete,
    Grass,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Concrete, Surface::Grass];

    pub fn coefficient(self, params: &SimulationParams) -> f64 {
        match self {
            Surface::Concrete => params.coefficient_concrete,
            Surface::Grass => params.coefficient_grass,
        }
    }

    /// Column name in [`CoolingRun::to_frame`].
    pub fn column(self) -> &'static str {
        match self {
            Surface::Concrete => "concrete",
            Surface::Grass => "grass",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Surface::Concrete => "Concrete",
            Surface::Grass => "Grass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    pub minute: u32,
    pub temperature: Celsius,
}

/// Temperatures of one surface at every whole minute of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    surface: Surface,
    points: Vec<TemperaturePoint>,
}

impl TemperatureSeries {
    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn points(&self) -> &[TemperaturePoint] {
        &self.points
    }

    pub fn temperatures(&self) -> impl Iterator<Item = Celsius> + '_ {
        self.points.iter().map(|p| p.temperature)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&TemperaturePoint> {
        self.points.last()
    }
}

/// `T(t)` for a single surface.
#[inline]
pub fn temperature_at(initial: Celsius, ambient: Celsius, coefficient: f64, minute: f64) -> Celsius {
    ambient + (initial - ambient) * (-coefficient * minute).exp()
}

/// Final temperature of each surface, labelled for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalTemperatures {
    pub concrete: Celsius,
    pub grass: Celsius,
}

impl FinalTemperatures {
    pub fn labelled(&self) -> [(&'static str, Celsius); 2] {
        [
            (Surface::Concrete.label(), self.concrete),
            (Surface::Grass.label(), self.grass),
        ]
    }
}

/// Both series of one run, sharing the same time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingRun {
    params: SimulationParams,
    concrete: TemperatureSeries,
    grass: TemperatureSeries,
}

impl CoolingRun {
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn concrete(&self) -> &TemperatureSeries {
        &self.concrete
    }

    pub fn grass(&self) -> &TemperatureSeries {
        &self.grass
    }

    pub fn series(&self, surface: Surface) -> &TemperatureSeries {
        match surface {
            Surface::Concrete => &self.concrete,
            Surface::Grass => &self.grass,
        }
    }

    pub fn final_temperatures(&self) -> FinalTemperatures {
        let last = |series: &TemperatureSeries| {
            series
                .last()
                .map(|p| p.temperature)
                .unwrap_or(self.params.initial_temp)
        };
        FinalTemperatures {
            concrete: last(&self.concrete),
            grass: last(&self.grass),
        }
    }

    /// Wide table `minute, concrete, grass`, one row per minute.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let minutes: Vec<u32> = self.concrete.points.iter().map(|p| p.minute).collect();
        let mut columns = vec![Series::new("minute", minutes)];
        for surface in Surface::ALL {
            let temps: Vec<f64> = self.series(surface).temperatures().map(|t| t.0).collect();
            columns.push(Series::new(surface.column(), temps));
        }
        Ok(DataFrame::new(columns)?)
    }
}

/// Run the model for both surfaces over `0..=duration_minutes`.
pub fn simulate(params: &SimulationParams) -> CoolingRun {
    let series = |surface: Surface| {
        let k = surface.coefficient(params);
        let points = (0..=params.duration_minutes)
            .map(|minute| TemperaturePoint {
                minute,
                temperature: temperature_at(
                    params.initial_temp,
                    params.ambient_temp,
                    k,
                    f64::from(minute),
                ),
            })
            .collect();
        TemperatureSeries { surface, points }
    };

    let run = CoolingRun {
        params: *params,
        concrete: series(Surface::Concrete),
        grass: series(Surface::Grass),
    };
    debug!(
        minutes = params.duration_minutes,
        k_concrete = params.coefficient_concrete,
        k_grass = params.coefficient_grass,
        "simulated surface cooling"
    );
    run
}
