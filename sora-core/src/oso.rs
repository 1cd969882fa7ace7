//! OSO compliance checking
//!
//! Compares the robustness a caller has achieved for each Operational Safety
//! Objective against the robustness its requirement table demands at a SAIL.
//! Required letters (O/L/M/H) and achieved levels (none/low/medium/high) are
//! compared on a shared 0-3 ordinal scale.

use crate::tables::{OsoDefinition, RequirementLevel, RobustnessLevel, SailLevel, OSO_DEFINITIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Achieved robustness and supporting evidence for one objective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsoStatus {
    #[serde(default)]
    pub robustness: RobustnessLevel,
    #[serde(default)]
    pub evidence: String,
}

/// Caller-supplied statuses keyed by OSO id (e.g. `OSO#01`)
pub type OsoStatuses = BTreeMap<String, OsoStatus>;

/// Compliance verdict for one objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsoCompliance {
    pub id: String,
    pub required: RequirementLevel,
    pub achieved: RobustnessLevel,
    pub compliant: bool,
    /// Ordinal shortfall, zero when compliant
    pub gap: u8,
}

/// Aggregate compliance over every objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsoComplianceSummary {
    pub sail: SailLevel,
    pub results: Vec<OsoCompliance>,
    pub total: usize,
    pub compliant: usize,
    /// Objectives in gap, excluding those whose requirement is optional
    pub non_compliant: usize,
    pub overall_compliant: bool,
}

impl OsoComplianceSummary {
    /// Results with a shortfall
    pub fn gaps(&self) -> impl Iterator<Item = &OsoCompliance> {
        self.results.iter().filter(|r| !r.compliant)
    }
}

/// Check one objective at a SAIL
pub fn check_oso_compliance(
    oso: &OsoDefinition,
    sail: SailLevel,
    achieved: RobustnessLevel,
) -> OsoCompliance {
    let required = oso.requirements.for_sail(sail);
    let gap = required.ordinal().saturating_sub(achieved.ordinal());
    OsoCompliance {
        id: oso.id.to_string(),
        required,
        achieved,
        compliant: gap == 0,
        gap,
    }
}

/// Check every built-in objective at a SAIL
///
/// Objectives without a status count as achieved robustness `none`.
pub fn check_all_oso_compliance(sail: SailLevel, statuses: &OsoStatuses) -> OsoComplianceSummary {
    check_all_with(OSO_DEFINITIONS, sail, statuses)
}

/// Check a given set of objective definitions at a SAIL
pub fn check_all_with(
    definitions: &[OsoDefinition],
    sail: SailLevel,
    statuses: &OsoStatuses,
) -> OsoComplianceSummary {
    for id in statuses.keys() {
        if !definitions.iter().any(|d| d.id == id) {
            tracing::warn!(oso = %id, "status for unknown OSO ignored");
        }
    }

    let results: Vec<OsoCompliance> = definitions
        .iter()
        .map(|def| {
            let achieved = statuses
                .get(def.id)
                .map(|s| s.robustness)
                .unwrap_or_default();
            check_oso_compliance(def, sail, achieved)
        })
        .collect();

    let compliant = results.iter().filter(|r| r.compliant).count();
    let non_compliant = results
        .iter()
        .filter(|r| !r.required.is_optional() && !r.compliant)
        .count();

    OsoComplianceSummary {
        sail,
        total: results.len(),
        compliant,
        non_compliant,
        overall_compliant: non_compliant == 0,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{OsoCategory, OsoRequirements, Responsibility};
    use crate::tables::RequirementLevel::{High as H, Low as L, Medium as M, Optional as O};

    fn compressed_oso() -> OsoDefinition {
        // I:O, II:L, IV:M, VI:H with intermediate SAILs following the lower column
        OsoDefinition {
            id: "OSO#TEST",
            category: OsoCategory::TechnicalIssue,
            name: "Test objective",
            requirements: OsoRequirements([O, L, L, M, M, H]),
            responsibility: Responsibility::Operator,
        }
    }

    fn status(robustness: RobustnessLevel) -> OsoStatus {
        OsoStatus {
            robustness,
            evidence: "documented".to_string(),
        }
    }

    #[test]
    fn test_optional_requirement_always_compliant() {
        let oso = compressed_oso();
        for achieved in RobustnessLevel::ALL {
            let result = check_oso_compliance(&oso, SailLevel::I, achieved);
            assert!(result.compliant);
            assert_eq!(result.required, RequirementLevel::Optional);
            assert_eq!(result.gap, 0);
        }
    }

    #[test]
    fn test_gap_is_ordinal_shortfall() {
        let oso = compressed_oso();
        let result = check_oso_compliance(&oso, SailLevel::VI, RobustnessLevel::Low);
        assert!(!result.compliant);
        assert_eq!(result.gap, 2);

        let result = check_oso_compliance(&oso, SailLevel::IV, RobustnessLevel::High);
        assert!(result.compliant);
        assert_eq!(result.gap, 0);
    }

    #[test]
    fn test_exact_match_is_compliant() {
        let oso = compressed_oso();
        let result = check_oso_compliance(&oso, SailLevel::II, RobustnessLevel::Low);
        assert!(result.compliant);
    }

    #[test]
    fn test_all_missing_statuses_at_sail_i() {
        let summary = check_all_oso_compliance(SailLevel::I, &OsoStatuses::new());
        assert_eq!(summary.total, OSO_DEFINITIONS.len());
        let optional = OSO_DEFINITIONS
            .iter()
            .filter(|d| d.requirements.for_sail(SailLevel::I).is_optional())
            .count();
        assert_eq!(summary.compliant, optional);
        assert_eq!(summary.non_compliant, summary.total - optional);
        assert!(!summary.overall_compliant);
    }

    #[test]
    fn test_all_high_is_overall_compliant() {
        let statuses: OsoStatuses = OSO_DEFINITIONS
            .iter()
            .map(|d| (d.id.to_string(), status(RobustnessLevel::High)))
            .collect();
        for sail in SailLevel::ALL {
            let summary = check_all_oso_compliance(sail, &statuses);
            assert!(summary.overall_compliant);
            assert_eq!(summary.compliant, summary.total);
            assert_eq!(summary.non_compliant, 0);
            assert_eq!(summary.gaps().count(), 0);
        }
    }

    #[test]
    fn test_single_gap_breaks_overall() {
        let mut statuses: OsoStatuses = OSO_DEFINITIONS
            .iter()
            .map(|d| (d.id.to_string(), status(RobustnessLevel::High)))
            .collect();
        statuses.insert("OSO#08".to_string(), status(RobustnessLevel::Medium));

        let summary = check_all_oso_compliance(SailLevel::III, &statuses);
        assert!(!summary.overall_compliant);
        assert_eq!(summary.non_compliant, 1);
        let gaps: Vec<&str> = summary.gaps().map(|g| g.id.as_str()).collect();
        assert_eq!(gaps, vec!["OSO#08"]);
    }

    #[test]
    fn test_overall_false_iff_non_optional_gap() {
        let definitions = [compressed_oso()];
        for sail in SailLevel::ALL {
            for achieved in RobustnessLevel::ALL {
                let mut statuses = OsoStatuses::new();
                statuses.insert("OSO#TEST".to_string(), status(achieved));
                let summary = check_all_with(&definitions, sail, &statuses);

                let required = definitions[0].requirements.for_sail(sail);
                let in_gap = !required.is_optional() && achieved.ordinal() < required.ordinal();
                assert_eq!(summary.overall_compliant, !in_gap);
            }
        }
    }

    #[test]
    fn test_unknown_status_ids_ignored() {
        let mut statuses = OsoStatuses::new();
        statuses.insert("OSO#99".to_string(), status(RobustnessLevel::High));
        let summary = check_all_oso_compliance(SailLevel::I, &statuses);
        assert_eq!(summary.total, OSO_DEFINITIONS.len());
        assert!(summary.results.iter().all(|r| r.id != "OSO#99"));
    }
}
