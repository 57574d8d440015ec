use crate::record::EmissionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which per-country measure drives the heatmap color encoding.
///
/// Cell size always encodes total emissions; the metric changes color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Population,
    Gdp,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Population, Metric::Gdp];

    /// Human-facing label for dropdowns and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Population => "Population",
            Metric::Gdp => "GDP (billion USD)",
        }
    }

    pub fn value_of(&self, record: &EmissionRecord) -> f64 {
        match self {
            Metric::Population => record.population,
            Metric::Gdp => record.gdp,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Metric::Population => "population",
            Metric::Gdp => "gdp",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "population" => Ok(Metric::Population),
            "gdp" => Ok(Metric::Gdp),
            other => Err(format!("unknown metric: {}", other)),
        }
    }
}
