//! Electricity sources tracked by the consumption dataset and their
//! renewable / non-renewable classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine generation columns of the raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Biofuel,
    Hydro,
    Nuclear,
    Solar,
    Wind,
    /// Counted in the row total but in neither category, so the two category
    /// shares only add up to 100% when this source is zero.
    OtherRenewable,
    Coal,
    Gas,
    Oil,
}

impl EnergySource {
    /// All sources, in raw column order.
    pub const ALL: [EnergySource; 9] = [
        EnergySource::Biofuel,
        EnergySource::Hydro,
        EnergySource::Nuclear,
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::OtherRenewable,
        EnergySource::Coal,
        EnergySource::Gas,
        EnergySource::Oil,
    ];

    /// Sources that belong to a category: renewable members first, then
    /// non-renewable members.
    pub const CATEGORIZED: [EnergySource; 8] = [
        EnergySource::Biofuel,
        EnergySource::Hydro,
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Nuclear,
        EnergySource::Coal,
        EnergySource::Gas,
        EnergySource::Oil,
    ];

    /// Generation column name in the raw table (TWh).
    pub fn column(self) -> &'static str {
        match self {
            EnergySource::Biofuel => "biofuel_electricity",
            EnergySource::Hydro => "hydro_electricity",
            EnergySource::Nuclear => "nuclear_electricity",
            EnergySource::Solar => "solar_electricity",
            EnergySource::Wind => "wind_electricity",
            EnergySource::OtherRenewable => "other_renewable_electricity",
            EnergySource::Coal => "coal_electricity",
            EnergySource::Gas => "gas_electricity",
            EnergySource::Oil => "oil_electricity",
        }
    }

    /// Percentage-of-total column name in the derived table.
    pub fn share_column(self) -> &'static str {
        match self {
            EnergySource::Biofuel => "biofuel_perc",
            EnergySource::Hydro => "hydro_perc",
            EnergySource::Nuclear => "nuclear_perc",
            EnergySource::Solar => "solar_perc",
            EnergySource::Wind => "wind_perc",
            EnergySource::OtherRenewable => "other_perc",
            EnergySource::Coal => "coal_perc",
            EnergySource::Gas => "gas_perc",
            EnergySource::Oil => "oil_perc",
        }
    }

    /// Category the source counts toward. `None` for
    /// [`EnergySource::OtherRenewable`], which only contributes to the total.
    pub fn category(self) -> Option<SourceCategory> {
        match self {
            EnergySource::Biofuel
            | EnergySource::Hydro
            | EnergySource::Solar
            | EnergySource::Wind => Some(SourceCategory::Renewable),
            EnergySource::Nuclear
            | EnergySource::Coal
            | EnergySource::Gas
            | EnergySource::Oil => Some(SourceCategory::NonRenewable),
            EnergySource::OtherRenewable => None,
        }
    }

    /// Short lowercase name, e.g. `"coal"`.
    pub fn label(self) -> &'static str {
        match self {
            EnergySource::Biofuel => "biofuel",
            EnergySource::Hydro => "hydro",
            EnergySource::Nuclear => "nuclear",
            EnergySource::Solar => "solar",
            EnergySource::Wind => "wind",
            EnergySource::OtherRenewable => "other_renewable",
            EnergySource::Coal => "coal",
            EnergySource::Gas => "gas",
            EnergySource::Oil => "oil",
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renewable / non-renewable partition used for the share metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Renewable,
    NonRenewable,
}

impl SourceCategory {
    pub const ALL: [SourceCategory; 2] = [SourceCategory::Renewable, SourceCategory::NonRenewable];

    /// The four fixed members of the category.
    pub fn members(self) -> [EnergySource; 4] {
        match self {
            SourceCategory::Renewable => [
                EnergySource::Biofuel,
                EnergySource::Hydro,
                EnergySource::Solar,
                EnergySource::Wind,
            ],
            SourceCategory::NonRenewable => [
                EnergySource::Nuclear,
                EnergySource::Coal,
                EnergySource::Gas,
                EnergySource::Oil,
            ],
        }
    }

    /// Derived-table column holding the summed member percentages.
    pub fn share_column(self) -> &'static str {
        match self {
            SourceCategory::Renewable => "renewable_share",
            SourceCategory::NonRenewable => "non_renewable_share",
        }
    }

    /// Value of the `category` column in long-form views.
    pub fn label(self) -> &'static str {
        match self {
            SourceCategory::Renewable => "renewable",
            SourceCategory::NonRenewable => "non_renewable",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categories_partition_eight_sources() {
        let mut seen = HashSet::new();
        for category in SourceCategory::ALL {
            for member in category.members() {
                assert_eq!(member.category(), Some(category));
                assert!(seen.insert(member));
            }
        }
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&EnergySource::OtherRenewable));
        assert_eq!(EnergySource::OtherRenewable.category(), None);
    }

    #[test]
    fn categorized_order_is_renewable_first() {
        let renewable = SourceCategory::Renewable.members();
        let non_renewable = SourceCategory::NonRenewable.members();
        assert_eq!(&EnergySource::CATEGORIZED[..4], &renewable);
        assert_eq!(&EnergySource::CATEGORIZED[4..], &non_renewable);
    }

    #[test]
    fn share_column_uses_leading_word() {
        for src in EnergySource::ALL {
            let head = src.column().split('_').next().unwrap();
            assert_eq!(src.share_column(), format!("{head}_perc"));
        }
    }
}
