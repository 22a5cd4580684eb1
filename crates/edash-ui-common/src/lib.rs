//! # edash UI common
//!
//! Page models and services shared by dashboard front ends.
//!
//! ```text
//! front end ──► DashboardService ──┬─► TableCache (edash-io)
//!                                  ├─► share pipeline (edash-energy)
//!                                  └─► cooling model (edash-thermal)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use edash_ui_common::DashboardService;
//!
//! let service = DashboardService::new()?;
//!
//! let energy = service.energy_page(&service.default_selection())?;
//! for metric in energy.metrics.as_array() {
//!     println!("{}: {}", metric.label, metric);
//! }
//!
//! let cooling = service.cooling_page(&service.default_params())?;
//! println!("{}", cooling.final_concrete);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pages;
pub mod service;

pub use config::{DashboardConfig, DataConfig, DisplayConfig, EnergyConfig, LoggingConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use metrics::MetricValue;
pub use pages::{CoolingPage, EnergyMetrics, EnergyPage};
pub use service::DashboardService;
