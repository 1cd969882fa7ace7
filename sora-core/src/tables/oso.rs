//! Operational Safety Objectives and their per-SAIL robustness requirements

use super::levels::{RequirementLevel, SailLevel};
use serde::{Deserialize, Serialize};

use super::levels::RequirementLevel::{High as H, Low as L, Medium as M, Optional as O};

/// Threat category an OSO addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsoCategory {
    TechnicalIssue,
    ExternalSystems,
    HumanError,
    AdverseConditions,
}

impl OsoCategory {
    pub fn label(&self) -> &'static str {
        match self {
            OsoCategory::TechnicalIssue => "Technical issue with the UAS",
            OsoCategory::ExternalSystems => "Deterioration of external systems",
            OsoCategory::HumanError => "Human error",
            OsoCategory::AdverseConditions => "Adverse operating conditions",
        }
    }
}

/// Party typically responsible for showing compliance (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Responsibility {
    Operator,
    Designer,
}

/// Required robustness per SAIL, indexed I..VI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsoRequirements(pub [RequirementLevel; 6]);

impl OsoRequirements {
    pub fn for_sail(&self, sail: SailLevel) -> RequirementLevel {
        self.0[sail.index()]
    }
}

/// Operational Safety Objective definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsoDefinition {
    pub id: &'static str,
    pub category: OsoCategory,
    pub name: &'static str,
    pub requirements: OsoRequirements,
    pub responsibility: Responsibility,
}

const fn oso(
    id: &'static str,
    category: OsoCategory,
    name: &'static str,
    requirements: [RequirementLevel; 6],
    responsibility: Responsibility,
) -> OsoDefinition {
    OsoDefinition {
        id,
        category,
        name,
        requirements: OsoRequirements(requirements),
        responsibility,
    }
}

use self::OsoCategory::{AdverseConditions, ExternalSystems, HumanError, TechnicalIssue};
use self::Responsibility::{Designer, Operator};

/// All OSO definitions in identifier order
pub static OSO_DEFINITIONS: &[OsoDefinition] = &[
    oso("OSO#01", TechnicalIssue, "Ensure the operator is competent and/or proven", [O, L, M, H, H, H], Operator),
    oso("OSO#02", TechnicalIssue, "UAS manufactured by competent and/or proven entity", [O, O, L, M, H, H], Designer),
    oso("OSO#03", TechnicalIssue, "UAS maintained by competent and/or proven entity", [L, L, M, M, H, H], Operator),
    oso("OSO#04", TechnicalIssue, "UAS developed to authority recognized design standards", [O, O, O, L, M, H], Designer),
    oso("OSO#05", TechnicalIssue, "UAS is designed considering system safety and reliability", [O, O, L, M, H, H], Designer),
    oso("OSO#06", TechnicalIssue, "C3 link performance is appropriate for the operation", [O, L, L, M, H, H], Designer),
    oso("OSO#07", TechnicalIssue, "Inspection of the UAS to ensure consistency with the ConOps", [L, L, M, M, H, H], Operator),
    oso("OSO#08", TechnicalIssue, "Operational procedures are defined, validated and adhered to", [L, M, H, H, H, H], Operator),
    oso("OSO#09", TechnicalIssue, "Remote crew trained and current and able to control the abnormal situation", [L, L, M, M, H, H], Operator),
    oso("OSO#10", TechnicalIssue, "Safe recovery from technical issue", [L, L, M, M, H, H], Designer),
    oso("OSO#11", ExternalSystems, "Procedures are in-place to handle the deterioration of external systems", [L, M, H, H, H, H], Operator),
    oso("OSO#12", ExternalSystems, "The UAS is designed to manage the deterioration of external systems", [L, L, M, M, H, H], Designer),
    oso("OSO#13", ExternalSystems, "External services supporting UAS operations are adequate to the operation", [L, L, M, H, H, H], Operator),
    oso("OSO#14", HumanError, "Operational procedures are defined, validated and adhered to", [L, M, H, H, H, H], Operator),
    oso("OSO#15", HumanError, "Remote crew trained and current and able to control the abnormal situation", [L, L, M, M, H, H], Operator),
    oso("OSO#16", HumanError, "Multi crew coordination", [L, L, M, M, H, H], Operator),
    oso("OSO#17", HumanError, "Remote crew is fit to operate", [L, L, M, M, H, H], Operator),
    oso("OSO#18", HumanError, "Automatic protection of the flight envelope from human errors", [O, O, L, M, H, H], Designer),
    oso("OSO#19", HumanError, "Safe recovery from human error", [O, O, L, M, M, H], Designer),
    oso("OSO#20", HumanError, "A human factors evaluation has been performed and the HMI found appropriate", [O, L, L, M, M, H], Designer),
    oso("OSO#21", AdverseConditions, "Operational procedures are defined, validated and adhered to", [L, M, H, H, H, H], Operator),
    oso("OSO#22", AdverseConditions, "The remote crew is trained to identify critical environmental conditions", [L, L, M, M, M, H], Operator),
    oso("OSO#23", AdverseConditions, "Environmental conditions for safe operations are defined, measurable and adhered to", [L, L, M, M, H, H], Operator),
    oso("OSO#24", AdverseConditions, "UAS designed and qualified for adverse environmental conditions", [O, O, M, H, H, H], Designer),
];

/// Find an OSO definition by identifier
pub fn find_oso(id: &str) -> Option<&'static OsoDefinition> {
    OSO_DEFINITIONS.iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_four_objectives() {
        assert_eq!(OSO_DEFINITIONS.len(), 24);
    }

    #[test]
    fn test_ids_unique_and_sorted() {
        let ids: Vec<&str> = OSO_DEFINITIONS.iter().map(|o| o.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_requirements_non_decreasing_with_sail() {
        for def in OSO_DEFINITIONS {
            assert!(
                def.requirements.0.windows(2).all(|w| w[0] <= w[1]),
                "{} requirement decreases with SAIL",
                def.id
            );
        }
    }

    #[test]
    fn test_sail_vi_requires_high_everywhere() {
        for def in OSO_DEFINITIONS {
            assert_eq!(def.requirements.for_sail(SailLevel::VI), RequirementLevel::High);
        }
    }

    #[test]
    fn test_find_oso() {
        let def = find_oso("OSO#08").unwrap();
        assert_eq!(def.requirements.for_sail(SailLevel::II), RequirementLevel::Medium);
        assert!(find_oso("OSO#99").is_none());
    }
}
