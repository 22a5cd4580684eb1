//! # edash-core: shared vocabulary
//!
//! Types shared by the dashboard pipelines:
//!
//! - [`EnergySource`] / [`SourceCategory`]: the nine generation columns of the
//!   consumption dataset and the renewable / non-renewable partition over them
//! - [`units`]: `#[repr(transparent)]` newtypes for TWh, percent and °C
//!
//! The energy and cooling pipelines both build on this crate but never on
//! each other.

pub mod source;
pub mod units;

pub use source::{EnergySource, SourceCategory};
pub use units::{Celsius, Percent, TerawattHours};

/// Identifier column of the raw table.
pub const COUNTRY_COLUMN: &str = "country";
/// Year column of the raw table.
pub const YEAR_COLUMN: &str = "year";
/// Row-wise generation total added by the derivation.
pub const TOTAL_COLUMN: &str = "total";
