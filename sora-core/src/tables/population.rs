//! Population density categories for operational and adjacent areas

use serde::{Deserialize, Serialize};
use std::fmt;

/// Population density category
///
/// Ordered from least to most densely populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationCategory {
    Controlled,
    Remote,
    Lightly,
    Sparsely,
    Suburban,
    HighDensity,
    Assembly,
}

impl PopulationCategory {
    pub const ALL: [PopulationCategory; 7] = [
        PopulationCategory::Controlled,
        PopulationCategory::Remote,
        PopulationCategory::Lightly,
        PopulationCategory::Sparsely,
        PopulationCategory::Suburban,
        PopulationCategory::HighDensity,
        PopulationCategory::Assembly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PopulationCategory::Controlled => "controlled",
            PopulationCategory::Remote => "remote",
            PopulationCategory::Lightly => "lightly",
            PopulationCategory::Sparsely => "sparsely",
            PopulationCategory::Suburban => "suburban",
            PopulationCategory::HighDensity => "highdensity",
            PopulationCategory::Assembly => "assembly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopulationCategory::Controlled => "Controlled ground area",
            PopulationCategory::Remote => "Remote",
            PopulationCategory::Lightly => "Lightly populated",
            PopulationCategory::Sparsely => "Sparsely populated",
            PopulationCategory::Suburban => "Suburban / low density metropolitan",
            PopulationCategory::HighDensity => "High density metropolitan",
            PopulationCategory::Assembly => "Assemblies of people",
        }
    }

    /// Approximate density ceiling in people per km² (`None` = unbounded)
    pub fn density_ceiling(&self) -> Option<u32> {
        match self {
            PopulationCategory::Controlled => Some(0),
            PopulationCategory::Remote => Some(5),
            PopulationCategory::Lightly => Some(50),
            PopulationCategory::Sparsely => Some(500),
            PopulationCategory::Suburban => Some(5_000),
            PopulationCategory::HighDensity => Some(50_000),
            PopulationCategory::Assembly => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PopulationCategory::Controlled => {
                "Only involved persons are present; access is controlled by the operator"
            }
            PopulationCategory::Remote => "Wilderness or open water, fewer than 5 people per km²",
            PopulationCategory::Lightly => "Farmland and scattered dwellings, fewer than 50 people per km²",
            PopulationCategory::Sparsely => "Rural villages and small settlements, fewer than 500 people per km²",
            PopulationCategory::Suburban => "Residential suburbs, fewer than 5,000 people per km²",
            PopulationCategory::HighDensity => "City centres and commercial districts, fewer than 50,000 people per km²",
            PopulationCategory::Assembly => "Open-air gatherings such as concerts, sports events or festivals",
        }
    }
}

impl fmt::Display for PopulationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_ceilings_increase() {
        let ceilings: Vec<u32> = PopulationCategory::ALL
            .iter()
            .filter_map(|p| p.density_ceiling())
            .collect();
        assert!(ceilings.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PopulationCategory::Assembly.density_ceiling(), None);
    }

    #[test]
    fn test_serde_keys_match_as_str() {
        for population in PopulationCategory::ALL {
            let json = serde_json::to_string(&population).unwrap();
            assert_eq!(json, format!("\"{}\"", population.as_str()));
        }
    }
}
