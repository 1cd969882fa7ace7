//! Tactical mitigation performance requirements (TMPR)

use super::levels::{ArcLevel, RobustnessLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tactical mitigation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TmprMethod {
    /// Visual line of sight
    Vlos,
    /// Extended visual line of sight (airspace observers)
    Evlos,
    /// Detect and avoid
    Daa,
}

impl TmprMethod {
    pub const ALL: [TmprMethod; 3] = [TmprMethod::Vlos, TmprMethod::Evlos, TmprMethod::Daa];

    pub fn as_str(&self) -> &'static str {
        match self {
            TmprMethod::Vlos => "VLOS",
            TmprMethod::Evlos => "EVLOS",
            TmprMethod::Daa => "DAA",
        }
    }
}

impl fmt::Display for TmprMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Tactical mitigation definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticalMitigation {
    pub method: TmprMethod,
    pub name: &'static str,
    /// Maximum number of ARC steps removed
    pub arc_reduction: u8,
    /// Minimum achieved robustness before any reduction is granted
    pub min_robustness: RobustnessLevel,
    /// Lowest residual ARC this method can reach
    pub best_arc: ArcLevel,
}

static VLOS: TacticalMitigation = TacticalMitigation {
    method: TmprMethod::Vlos,
    name: "Visual line of sight",
    arc_reduction: 1,
    min_robustness: RobustnessLevel::Low,
    best_arc: ArcLevel::A,
};

static EVLOS: TacticalMitigation = TacticalMitigation {
    method: TmprMethod::Evlos,
    name: "Extended visual line of sight",
    arc_reduction: 1,
    min_robustness: RobustnessLevel::Medium,
    best_arc: ArcLevel::A,
};

static DAA: TacticalMitigation = TacticalMitigation {
    method: TmprMethod::Daa,
    name: "Detect and avoid",
    arc_reduction: 2,
    min_robustness: RobustnessLevel::High,
    best_arc: ArcLevel::B,
};

pub fn tactical_mitigation(method: TmprMethod) -> &'static TacticalMitigation {
    match method {
        TmprMethod::Vlos => &VLOS,
        TmprMethod::Evlos => &EVLOS,
        TmprMethod::Daa => &DAA,
    }
}
