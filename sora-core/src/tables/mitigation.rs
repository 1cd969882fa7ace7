//! Ground risk mitigations (M1A, M1B, M1C, M2)

use super::levels::RobustnessLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ground mitigation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroundMitigationId {
    /// Strategic mitigation: sheltering
    M1A,
    /// Strategic mitigation: operational restrictions
    M1B,
    /// Tactical mitigation: ground observation
    M1C,
    /// Effects of ground impact are reduced
    M2,
}

impl GroundMitigationId {
    pub const ALL: [GroundMitigationId; 4] = [
        GroundMitigationId::M1A,
        GroundMitigationId::M1B,
        GroundMitigationId::M1C,
        GroundMitigationId::M2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroundMitigationId::M1A => "M1A",
            GroundMitigationId::M1B => "M1B",
            GroundMitigationId::M1C => "M1C",
            GroundMitigationId::M2 => "M2",
        }
    }
}

impl fmt::Display for GroundMitigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One defined robustness level of a mitigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MitigationLevel {
    pub robustness: RobustnessLevel,
    /// GRC steps removed when claimed at this robustness
    pub reduction: u8,
    pub criteria: &'static str,
}

/// A mitigation that, when claimed at `at`, rules out `excluded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub at: RobustnessLevel,
    pub excluded: GroundMitigationId,
}

/// Ground mitigation definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundMitigation {
    pub id: GroundMitigationId,
    pub name: &'static str,
    pub description: &'static str,
    /// Defined levels in ascending robustness. Levels not listed are undefined.
    pub levels: &'static [MitigationLevel],
    pub exclusions: &'static [Exclusion],
}

impl GroundMitigation {
    /// Reduction for a robustness level, or `None` if the level is undefined
    pub fn reduction(&self, robustness: RobustnessLevel) -> Option<u8> {
        self.level(robustness).map(|l| l.reduction)
    }

    pub fn level(&self, robustness: RobustnessLevel) -> Option<&'static MitigationLevel> {
        self.levels.iter().find(|l| l.robustness == robustness)
    }

    pub fn supports(&self, robustness: RobustnessLevel) -> bool {
        self.level(robustness).is_some()
    }

    /// Mitigations ruled out when this one is claimed at `robustness`
    pub fn excluded_at(
        &self,
        robustness: RobustnessLevel,
    ) -> impl Iterator<Item = GroundMitigationId> + '_ {
        self.exclusions
            .iter()
            .filter(move |e| e.at == robustness)
            .map(|e| e.excluded)
    }
}

const NOT_CLAIMED: MitigationLevel = MitigationLevel {
    robustness: RobustnessLevel::None,
    reduction: 0,
    criteria: "Mitigation not claimed",
};

static M1A: GroundMitigation = GroundMitigation {
    id: GroundMitigationId::M1A,
    name: "Sheltering",
    description: "People at risk are assumed to be sheltered by buildings or vehicles",
    levels: &[
        NOT_CLAIMED,
        MitigationLevel {
            robustness: RobustnessLevel::Low,
            reduction: 1,
            criteria: "Operation over areas where the majority of people are sheltered; UA below 25 kg",
        },
        MitigationLevel {
            robustness: RobustnessLevel::Medium,
            reduction: 2,
            criteria: "Sheltering validated by evidence of building density and UA impact energy",
        },
    ],
    exclusions: &[Exclusion {
        at: RobustnessLevel::Medium,
        excluded: GroundMitigationId::M1B,
    }],
};

static M1B: GroundMitigation = GroundMitigation {
    id: GroundMitigationId::M1B,
    name: "Operational restrictions",
    description: "Time or location restrictions reduce the number of people at risk",
    levels: &[
        NOT_CLAIMED,
        MitigationLevel {
            robustness: RobustnessLevel::Medium,
            reduction: 1,
            criteria: "Restrictions reduce people at risk by a factor of 10, supported by density data",
        },
        MitigationLevel {
            robustness: RobustnessLevel::High,
            reduction: 2,
            criteria: "Restrictions reduce people at risk by a factor of 100, validated by the authority",
        },
    ],
    exclusions: &[],
};

static M1C: GroundMitigation = GroundMitigation {
    id: GroundMitigationId::M1C,
    name: "Ground observation",
    description: "Ground observers or on-board cameras detect people and adjust the flight path",
    levels: &[
        NOT_CLAIMED,
        MitigationLevel {
            robustness: RobustnessLevel::Low,
            reduction: 1,
            criteria: "Procedures to observe overflown areas and redirect the UA away from people",
        },
    ],
    exclusions: &[],
};

static M2: GroundMitigation = GroundMitigation {
    id: GroundMitigationId::M2,
    name: "Impact dynamics reduced",
    description: "Parachute, frangible structure or similar reduces the effect of ground impact",
    levels: &[
        NOT_CLAIMED,
        MitigationLevel {
            robustness: RobustnessLevel::Medium,
            reduction: 1,
            criteria: "Impact energy or area reduced, demonstrated by test or analysis",
        },
        MitigationLevel {
            robustness: RobustnessLevel::High,
            reduction: 2,
            criteria: "Impact effects reduced, verified by a competent third party",
        },
    ],
    exclusions: &[],
};

/// Definition for a ground mitigation id
pub fn ground_mitigation(id: GroundMitigationId) -> &'static GroundMitigation {
    match id {
        GroundMitigationId::M1A => &M1A,
        GroundMitigationId::M1B => &M1B,
        GroundMitigationId::M1C => &M1C,
        GroundMitigationId::M2 => &M2,
    }
}
