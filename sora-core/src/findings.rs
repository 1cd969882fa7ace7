//! Findings engine for submission gating
//!
//! Turns an assessment outcome into blocking failures and warnings so a
//! caller can stop an operation from being submitted.
//!
//! Global invariants enforced:
//! - Findings are deterministic (same input = same output)
//! - Findings operate on assessment data only (no IO, no CLI logic)
//! - An out-of-scope result is always blocking, never hidden

use crate::assessment::{AssessmentError, AssessmentSummary, RiskAssessment};
use crate::config::ResolvedConfig;
use crate::ground::ignored_claims;
use crate::tables::RobustnessLevel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Finding identifier, declared in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingId {
    MitigationConflict,
    OutOfScope,
    OsoGap,
    // Warning findings
    ContainmentFallback,
    IgnoredRobustness,
    MissingEvidence,
}

impl FindingId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingId::MitigationConflict => "mitigation-conflict",
            FindingId::OutOfScope => "out-of-scope",
            FindingId::OsoGap => "oso-gap",
            FindingId::ContainmentFallback => "containment-fallback",
            FindingId::IgnoredRobustness => "ignored-robustness",
            FindingId::MissingEvidence => "missing-evidence",
        }
    }
}

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Blocking,
    Warning,
}

/// A single finding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Finding {
    pub id: FindingId,
    pub severity: FindingSeverity,
    /// What the finding is about (OSO id, mitigation id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Findings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Findings {
    pub failed: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any blocking failures
    pub fn has_blocking_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    fn push(&mut self, finding: Finding) {
        match finding.severity {
            FindingSeverity::Blocking => self.failed.push(finding),
            FindingSeverity::Warning => self.warnings.push(finding),
        }
    }

    /// Sort results deterministically
    ///
    /// Primary sort: by id (declaration order)
    /// Secondary sort: by subject ASCII (None last)
    pub fn sort(&mut self) {
        self.failed.sort_by(compare_findings);
        self.warnings.sort_by(compare_findings);
    }
}

fn compare_findings(a: &Finding, b: &Finding) -> Ordering {
    a.id.cmp(&b.id).then_with(|| match (&a.subject, &b.subject) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_subject), Some(b_subject)) => a_subject.cmp(b_subject),
    })
}

/// Evaluate all findings for an assessment outcome
pub fn evaluate_findings(
    assessment: &RiskAssessment,
    outcome: &Result<AssessmentSummary, AssessmentError>,
    config: &ResolvedConfig,
) -> Findings {
    let mut findings = Findings::new();

    match outcome {
        Err(AssessmentError::InvalidCombination(conflict)) => {
            findings.push(Finding {
                id: FindingId::MitigationConflict,
                severity: FindingSeverity::Blocking,
                subject: Some(conflict.mitigation.to_string()),
                message: conflict.to_string(),
            });
        }
        Ok(summary) => {
            evaluate_scope(summary, &mut findings);
            evaluate_oso_gaps(summary, config, &mut findings);
            evaluate_containment(summary, &mut findings);
        }
    }

    // Input-level warnings apply whether or not classification succeeded
    evaluate_ignored_robustness(assessment, &mut findings);
    if config.require_evidence {
        evaluate_missing_evidence(assessment, config.evidence_min_length, &mut findings);
    }

    findings.sort();
    findings
}

fn evaluate_scope(summary: &AssessmentSummary, findings: &mut Findings) {
    if summary.within_scope {
        return;
    }
    let detail = match (summary.intrinsic_grc, summary.final_grc) {
        (None, _) => "population and UA class combination is not covered".to_string(),
        (Some(_), Some(grc)) => format!("final GRC {} exceeds 7", grc),
        (Some(_), None) => "final GRC could not be determined".to_string(),
    };
    findings.push(Finding {
        id: FindingId::OutOfScope,
        severity: FindingSeverity::Blocking,
        subject: None,
        message: format!("outside SORA scope - certified category required ({})", detail),
    });
}

fn evaluate_oso_gaps(summary: &AssessmentSummary, config: &ResolvedConfig, findings: &mut Findings) {
    let Some(oso) = &summary.oso else {
        return;
    };
    let severity = if config.oso_gaps_blocking {
        FindingSeverity::Blocking
    } else {
        FindingSeverity::Warning
    };
    for gap in oso.gaps() {
        findings.push(Finding {
            id: FindingId::OsoGap,
            severity,
            subject: Some(gap.id.clone()),
            message: format!(
                "requires {} robustness at SAIL {}, achieved {}",
                gap.required.letter(),
                oso.sail,
                gap.achieved
            ),
        });
    }
}

fn evaluate_containment(summary: &AssessmentSummary, findings: &mut Findings) {
    if !summary.containment_fallback {
        return;
    }
    findings.push(Finding {
        id: FindingId::ContainmentFallback,
        severity: FindingSeverity::Warning,
        subject: None,
        message: "adjacent area not in containment table; low robustness assumed".to_string(),
    });
}

fn evaluate_ignored_robustness(assessment: &RiskAssessment, findings: &mut Findings) {
    for claim in ignored_claims(&assessment.ground_mitigations) {
        findings.push(Finding {
            id: FindingId::IgnoredRobustness,
            severity: FindingSeverity::Warning,
            subject: Some(claim.mitigation.to_string()),
            message: claim.to_string(),
        });
    }
}

fn evaluate_missing_evidence(
    assessment: &RiskAssessment,
    min_length: usize,
    findings: &mut Findings,
) {
    for (id, status) in &assessment.oso_statuses {
        if status.robustness == RobustnessLevel::None {
            continue;
        }
        if status.evidence.trim().chars().count() < min_length {
            findings.push(Finding {
                id: FindingId::MissingEvidence,
                severity: FindingSeverity::Warning,
                subject: Some(id.clone()),
                message: format!("{} robustness claimed without evidence", status.robustness),
            });
        }
    }
}
