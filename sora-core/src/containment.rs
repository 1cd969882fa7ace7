//! Adjacent area and containment robustness
//!
//! The adjacent area extends three minutes of flight at maximum speed beyond
//! the operational volume, bounded by regulatory minimum and maximum widths.

use crate::tables::{containment_entry, PopulationCategory, RobustnessLevel, SailLevel};
use serde::{Deserialize, Serialize};

/// Flight time that sizes the adjacent area, in seconds
pub const ADJACENT_AREA_FLIGHT_TIME_S: f64 = 180.0;
/// Minimum adjacent area width in metres
pub const MIN_ADJACENT_AREA_M: f64 = 5_000.0;
/// Maximum adjacent area width in metres
pub const MAX_ADJACENT_AREA_M: f64 = 35_000.0;

/// Robustness used when the (population, SAIL) pair is not in the table
pub const FALLBACK_CONTAINMENT: RobustnessLevel = RobustnessLevel::Low;

/// Required containment robustness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainmentRequirement {
    pub robustness: RobustnessLevel,
    /// True when `robustness` is the fallback rather than a table value
    pub fallback: bool,
}

/// Adjacent area width in metres for a UA maximum speed in m/s
///
/// A negative or NaN speed yields the minimum width.
pub fn adjacent_area_distance(max_speed_mps: f64) -> f64 {
    if max_speed_mps.is_nan() || max_speed_mps < 0.0 {
        return MIN_ADJACENT_AREA_M;
    }
    (max_speed_mps * ADJACENT_AREA_FLIGHT_TIME_S).clamp(MIN_ADJACENT_AREA_M, MAX_ADJACENT_AREA_M)
}

/// Containment robustness for an adjacent area population at a SAIL
pub fn containment_requirement(
    adjacent: PopulationCategory,
    sail: SailLevel,
) -> ContainmentRequirement {
    match containment_entry(adjacent, sail) {
        Some(robustness) => ContainmentRequirement {
            robustness,
            fallback: false,
        },
        None => {
            tracing::debug!(
                adjacent = %adjacent,
                %sail,
                "no containment table entry, using fallback"
            );
            ContainmentRequirement {
                robustness: FALLBACK_CONTAINMENT,
                fallback: true,
            }
        }
    }
}
