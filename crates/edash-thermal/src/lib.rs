//! # edash-thermal: urban heat island cooling model
//!
//! Compares how fast a concrete and a grass surface shed heat toward ambient
//! temperature, using the closed-form solution of Newton's law of cooling.
//! See [`cooling`] for the model.

pub mod cooling;

pub use cooling::{
    simulate, temperature_at, CoolingRun, FinalTemperatures, SimulationParams, Surface,
    TemperaturePoint, TemperatureSeries,
};
