//! Headline numbers ready for a metric widget.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// A labelled scalar with its display formatting.
///
/// Non-finite values (an average over an empty selection, for instance)
/// render as the configured NA label instead of `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub label: String,
    pub value: f64,
    /// Appended after the number, e.g. `"%"` or `" °C"`.
    pub suffix: String,
    pub decimals: usize,
    pub na_label: String,
}

impl MetricValue {
    pub fn new(label: impl Into<String>, value: f64, suffix: impl Into<String>) -> Self {
        let display = DisplayConfig::default();
        Self {
            label: label.into(),
            value,
            suffix: suffix.into(),
            decimals: display.decimal_places,
            na_label: display.na_label,
        }
    }

    pub fn with_display(mut self, display: &DisplayConfig) -> Self {
        self.decimals = display.decimal_places;
        self.na_label = display.na_label.clone();
        self
    }

    pub fn is_available(&self) -> bool {
        self.value.is_finite()
    }

    /// The value as shown, e.g. `"27.4%"` or `"N/A"`.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_available() {
            write!(f, "{:.*}{}", self.decimals, self.value, self.suffix)
        } else {
            f.write_str(&self.na_label)
        }
    }
}
