//! Ordered classification levels: robustness, requirement letters, ARC and SAIL

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level claimed for a mitigation or compliance measure
///
/// Totally ordered: `none < low < medium < high`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RobustnessLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl RobustnessLevel {
    pub const ALL: [RobustnessLevel; 4] = [
        RobustnessLevel::None,
        RobustnessLevel::Low,
        RobustnessLevel::Medium,
        RobustnessLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RobustnessLevel::None => "none",
            RobustnessLevel::Low => "low",
            RobustnessLevel::Medium => "medium",
            RobustnessLevel::High => "high",
        }
    }

    /// Ordinal on the shared 0-3 compliance scale
    pub fn ordinal(&self) -> u8 {
        match self {
            RobustnessLevel::None => 0,
            RobustnessLevel::Low => 1,
            RobustnessLevel::Medium => 2,
            RobustnessLevel::High => 3,
        }
    }
}

impl fmt::Display for RobustnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Required robustness letter in an OSO requirement table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequirementLevel {
    /// Optional: no robustness required
    #[serde(rename = "O")]
    Optional,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    High,
}

impl RequirementLevel {
    pub fn letter(&self) -> char {
        match self {
            RequirementLevel::Optional => 'O',
            RequirementLevel::Low => 'L',
            RequirementLevel::Medium => 'M',
            RequirementLevel::High => 'H',
        }
    }

    /// Ordinal on the shared 0-3 compliance scale
    pub fn ordinal(&self) -> u8 {
        match self {
            RequirementLevel::Optional => 0,
            RequirementLevel::Low => 1,
            RequirementLevel::Medium => 2,
            RequirementLevel::High => 3,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, RequirementLevel::Optional)
    }
}

/// Air Risk Class, ordered by increasing encounter risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArcLevel {
    #[serde(rename = "ARC-a")]
    A,
    #[serde(rename = "ARC-b")]
    B,
    #[serde(rename = "ARC-c")]
    C,
    #[serde(rename = "ARC-d")]
    D,
}

impl ArcLevel {
    pub const ALL: [ArcLevel; 4] = [ArcLevel::A, ArcLevel::B, ArcLevel::C, ArcLevel::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArcLevel::A => "ARC-a",
            ArcLevel::B => "ARC-b",
            ArcLevel::C => "ARC-c",
            ArcLevel::D => "ARC-d",
        }
    }

    /// Position on the ARC scale (ARC-a = 0)
    pub fn index(&self) -> usize {
        match self {
            ArcLevel::A => 0,
            ArcLevel::B => 1,
            ArcLevel::C => 2,
            ArcLevel::D => 3,
        }
    }

    /// Move `steps` classes toward ARC-a, stopping at ARC-a
    pub fn step_down(self, steps: u8) -> ArcLevel {
        let target = self.index().saturating_sub(steps as usize);
        ArcLevel::ALL[target]
    }
}

impl fmt::Display for ArcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Safety Assurance and Integrity Level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SailLevel {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl SailLevel {
    pub const ALL: [SailLevel; 6] = [
        SailLevel::I,
        SailLevel::II,
        SailLevel::III,
        SailLevel::IV,
        SailLevel::V,
        SailLevel::VI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SailLevel::I => "I",
            SailLevel::II => "II",
            SailLevel::III => "III",
            SailLevel::IV => "IV",
            SailLevel::V => "V",
            SailLevel::VI => "VI",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SailLevel::I => 0,
            SailLevel::II => 1,
            SailLevel::III => 2,
            SailLevel::IV => 3,
            SailLevel::V => 4,
            SailLevel::VI => 5,
        }
    }
}

impl fmt::Display for SailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
