//! Ground Risk Class (GRC) calculation
//!
//! Global invariants enforced:
//! - An out-of-scope intrinsic GRC propagates as `None`, never a default
//! - Final GRC is floored at 1 and never raised above the intrinsic GRC
//! - Conflicting strategic mitigations are rejected, not summed

use crate::tables::{
    ground_mitigation, intrinsic_grc_entry, GroundMitigationId, PopulationCategory,
    RobustnessLevel, UaClass,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest GRC the methodology defines
pub const MIN_GRC: u8 = 1;

/// A caller's selection for one ground mitigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationSelection {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub robustness: RobustnessLevel,
}

impl MitigationSelection {
    pub fn at(robustness: RobustnessLevel) -> Self {
        MitigationSelection {
            enabled: true,
            robustness,
        }
    }
}

/// Ground mitigation selections keyed by mitigation id
pub type GroundMitigations = BTreeMap<GroundMitigationId, MitigationSelection>;

/// Two ground mitigations were claimed together that may not be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{mitigation} at {robustness} robustness cannot be combined with {excluded}")]
pub struct MitigationConflict {
    pub mitigation: GroundMitigationId,
    pub robustness: RobustnessLevel,
    pub excluded: GroundMitigationId,
}

/// An enabled mitigation claimed at a robustness it does not define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoredClaim {
    pub mitigation: GroundMitigationId,
    pub robustness: RobustnessLevel,
}

impl fmt::Display for IgnoredClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} does not define {} robustness; no reduction applied",
            self.mitigation, self.robustness
        )
    }
}

/// Intrinsic GRC for a population / UA class pair, `None` if outside scope
pub fn intrinsic_grc(population: PopulationCategory, ua_class: UaClass) -> Option<u8> {
    intrinsic_grc_entry(population, ua_class)
}

/// The GRC the same UA would score over a controlled ground area
///
/// Mitigations can never take an operation below this value.
pub fn controlled_ground_floor(ua_class: UaClass) -> u8 {
    intrinsic_grc_entry(PopulationCategory::Controlled, ua_class).unwrap_or(MIN_GRC)
}

/// Final GRC after ground mitigations, floored at 1
///
/// This does not know the UA class, so it cannot apply the controlled ground
/// floor. Use [`final_grc_with_floor`] with [`controlled_ground_floor`] for
/// that; [`crate::assessment::evaluate`] does.
pub fn final_grc(
    intrinsic: Option<u8>,
    mitigations: &GroundMitigations,
) -> Result<Option<u8>, MitigationConflict> {
    final_grc_with_floor(intrinsic, mitigations, MIN_GRC)
}

/// Final GRC after ground mitigations, floored at `floor` (and at least 1)
///
/// The floor never lifts the result above the intrinsic GRC.
pub fn final_grc_with_floor(
    intrinsic: Option<u8>,
    mitigations: &GroundMitigations,
    floor: u8,
) -> Result<Option<u8>, MitigationConflict> {
    let Some(igrc) = intrinsic else {
        return Ok(None);
    };

    check_exclusivity(mitigations)?;

    let reduction: u8 = active(mitigations)
        .map(|(id, robustness)| {
            // Undefined levels contribute nothing
            ground_mitigation(id).reduction(robustness).unwrap_or(0)
        })
        .fold(0u8, u8::saturating_add);

    let floor = floor.max(MIN_GRC).min(igrc.max(MIN_GRC));
    Ok(Some(igrc.saturating_sub(reduction).max(floor)))
}

/// Reject mitigation combinations the methodology treats as alternatives
pub fn check_exclusivity(mitigations: &GroundMitigations) -> Result<(), MitigationConflict> {
    for (id, robustness) in active(mitigations) {
        for excluded in ground_mitigation(id).excluded_at(robustness) {
            if reduces(mitigations, excluded) {
                tracing::warn!(
                    mitigation = %id,
                    %robustness,
                    %excluded,
                    "conflicting ground mitigations"
                );
                return Err(MitigationConflict {
                    mitigation: id,
                    robustness,
                    excluded,
                });
            }
        }
    }
    Ok(())
}

/// Enabled mitigations claimed at a robustness level they do not define
pub fn ignored_claims(mitigations: &GroundMitigations) -> Vec<IgnoredClaim> {
    active(mitigations)
        .filter(|&(id, robustness)| !ground_mitigation(id).supports(robustness))
        .map(|(mitigation, robustness)| IgnoredClaim {
            mitigation,
            robustness,
        })
        .collect()
}

/// Enabled mitigations with their chosen robustness
fn active(
    mitigations: &GroundMitigations,
) -> impl Iterator<Item = (GroundMitigationId, RobustnessLevel)> + '_ {
    mitigations
        .iter()
        .filter(|(_, sel)| sel.enabled)
        .map(|(id, sel)| (*id, sel.robustness))
}

/// Whether a mitigation is enabled at a level that actually reduces GRC
fn reduces(mitigations: &GroundMitigations, id: GroundMitigationId) -> bool {
    mitigations
        .get(&id)
        .filter(|sel| sel.enabled)
        .and_then(|sel| ground_mitigation(id).reduction(sel.robustness))
        .is_some_and(|r| r > 0)
}
