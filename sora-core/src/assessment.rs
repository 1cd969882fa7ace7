//! Risk assessment input and the end-to-end classification pipeline
//!
//! Data flow: selections -> ground -> air -> SAIL -> {containment, OSO}.
//! The pipeline holds no state; identical assessments give identical summaries.

use crate::air::{residual_arc, TmprSelection};
use crate::containment::{adjacent_area_distance, containment_requirement};
use crate::ground::{
    controlled_ground_floor, final_grc_with_floor, intrinsic_grc, GroundMitigations,
    MitigationConflict,
};
use crate::oso::{check_all_oso_compliance, OsoComplianceSummary, OsoStatuses};
use crate::sail::sail;
use crate::tables::{ArcLevel, PopulationCategory, RobustnessLevel, SailLevel, UaClass};
use serde::{Deserialize, Serialize};

/// The selections a caller has made for one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub population_category: PopulationCategory,
    pub ua_class: UaClass,
    #[serde(default)]
    pub ground_mitigations: GroundMitigations,
    #[serde(rename = "initialARC")]
    pub initial_arc: ArcLevel,
    #[serde(default)]
    pub tmpr: Option<TmprSelection>,
    pub adjacent_area_population: PopulationCategory,
    #[serde(default)]
    pub oso_statuses: OsoStatuses,
}

impl RiskAssessment {
    /// Start an assessment with no mitigations or OSO statuses
    pub fn new(
        population_category: PopulationCategory,
        ua_class: UaClass,
        initial_arc: ArcLevel,
        adjacent_area_population: PopulationCategory,
    ) -> Self {
        RiskAssessment {
            population_category,
            ua_class,
            ground_mitigations: GroundMitigations::new(),
            initial_arc,
            tmpr: None,
            adjacent_area_population,
            oso_statuses: OsoStatuses::new(),
        }
    }
}

/// Classification output for one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    #[serde(rename = "intrinsicGRC")]
    pub intrinsic_grc: Option<u8>,
    #[serde(rename = "finalGRC")]
    pub final_grc: Option<u8>,
    #[serde(rename = "residualARC")]
    pub residual_arc: ArcLevel,
    pub sail: Option<SailLevel>,
    /// False when the certified category applies
    pub within_scope: bool,
    pub adjacent_area_distance_meters: f64,
    /// `None` when outside scope
    pub required_containment_robustness: Option<RobustnessLevel>,
    /// True when the containment robustness is the table fallback
    pub containment_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub oso: Option<OsoComplianceSummary>,
}

/// Assessment rejected before classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid mitigation combination: {0}")]
    InvalidCombination(#[from] MitigationConflict),
}

/// Run the full classification pipeline
pub fn evaluate(assessment: &RiskAssessment) -> Result<AssessmentSummary, AssessmentError> {
    let igrc = intrinsic_grc(assessment.population_category, assessment.ua_class);
    let floor = controlled_ground_floor(assessment.ua_class);
    let fgrc = final_grc_with_floor(igrc, &assessment.ground_mitigations, floor)?;
    tracing::debug!(
        population = %assessment.population_category,
        ua_class = %assessment.ua_class,
        intrinsic = ?igrc,
        final_grc = ?fgrc,
        "ground risk resolved"
    );

    let arc = residual_arc(assessment.initial_arc, assessment.tmpr.as_ref());
    tracing::debug!(initial = %assessment.initial_arc, residual = %arc, "air risk resolved");

    let sail_level = sail(fgrc, arc);
    let distance = adjacent_area_distance(assessment.ua_class.max_speed_mps());

    let (containment, oso) = match sail_level {
        Some(level) => {
            let req = containment_requirement(assessment.adjacent_area_population, level);
            let oso = check_all_oso_compliance(level, &assessment.oso_statuses);
            (Some(req), Some(oso))
        }
        None => {
            tracing::warn!(
                population = %assessment.population_category,
                ua_class = %assessment.ua_class,
                "operation outside SORA scope, certified category required"
            );
            (None, None)
        }
    };

    Ok(AssessmentSummary {
        intrinsic_grc: igrc,
        final_grc: fgrc,
        residual_arc: arc,
        sail: sail_level,
        within_scope: sail_level.is_some(),
        adjacent_area_distance_meters: distance,
        required_containment_robustness: containment.map(|c| c.robustness),
        containment_fallback: containment.is_some_and(|c| c.fallback),
        oso,
    })
}
