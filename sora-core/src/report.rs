//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Out-of-scope results are rendered explicitly, never as a default level

use crate::assessment::AssessmentSummary;
use crate::findings::{Finding, Findings};
use crate::tables::{
    intrinsic_grc_entry, sail_matrix_entry, ArcLevel, PopulationCategory, SailLevel, UaClass,
    OSO_DEFINITIONS,
};
use serde::{Deserialize, Serialize};

/// Text shown wherever a GRC or SAIL has no defined value
pub const OUT_OF_SCOPE_LABEL: &str = "outside SORA scope - certified category required";

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render an assessment summary as text
pub fn render_text(summary: &AssessmentSummary, show_optional_osos: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<24} {}\n",
        "Intrinsic GRC",
        opt_or_scope(summary.intrinsic_grc)
    ));
    output.push_str(&format!(
        "{:<24} {}\n",
        "Final GRC",
        opt_or_scope(summary.final_grc)
    ));
    output.push_str(&format!("{:<24} {}\n", "Residual ARC", summary.residual_arc));
    output.push_str(&format!("{:<24} {}\n", "SAIL", opt_or_scope(summary.sail)));
    output.push_str(&format!(
        "{:<24} {:.0} m\n",
        "Adjacent area", summary.adjacent_area_distance_meters
    ));

    let containment = match summary.required_containment_robustness {
        Some(level) if summary.containment_fallback => format!("{} (fallback)", level),
        Some(level) => level.to_string(),
        None => "n/a".to_string(),
    };
    output.push_str(&format!("{:<24} {}\n", "Containment", containment));

    if let Some(ref oso) = summary.oso {
        output.push('\n');
        output.push_str(&format!(
            "OSO compliance (SAIL {}): {}/{} compliant, {} in gap\n",
            oso.sail, oso.compliant, oso.total, oso.non_compliant
        ));
        output.push_str(&format!(
            "{:<8} {:<9} {:<9} {}\n",
            "OSO", "REQUIRED", "ACHIEVED", "STATUS"
        ));
        for result in &oso.results {
            if result.required.is_optional() && !show_optional_osos {
                continue;
            }
            let status = if result.compliant {
                "ok".to_string()
            } else {
                format!("gap {}", result.gap)
            };
            output.push_str(&format!(
                "{:<8} {:<9} {:<9} {}\n",
                result.id,
                result.required.letter(),
                result.achieved,
                status
            ));
        }
    }

    output
}

/// Render an assessment summary as JSON
pub fn render_json(summary: &AssessmentSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

/// Render findings as text
pub fn render_findings_text(findings: &Findings) -> String {
    let mut output = String::new();
    for finding in &findings.failed {
        output.push_str(&format_finding("FAIL", finding));
    }
    for finding in &findings.warnings {
        output.push_str(&format_finding("WARN", finding));
    }
    if output.is_empty() {
        output.push_str("No findings\n");
    }
    output
}

fn format_finding(tag: &str, finding: &Finding) -> String {
    match finding.subject {
        Some(ref subject) => format!(
            "{} {:<22} {:<8} {}\n",
            tag,
            finding.id.as_str(),
            subject,
            finding.message
        ),
        None => format!("{} {:<22} {}\n", tag, finding.id.as_str(), finding.message),
    }
}

/// Render the intrinsic GRC matrix
pub fn render_grc_table() -> String {
    let mut output = format!("{:<13}", "POPULATION");
    for class in UaClass::ALL {
        output.push_str(&format!(" {:>10}", class.as_str()));
    }
    output.push('\n');

    for population in PopulationCategory::ALL {
        output.push_str(&format!("{:<13}", population.as_str()));
        for class in UaClass::ALL {
            let cell = intrinsic_grc_entry(population, class)
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(" {:>10}", cell));
        }
        output.push('\n');
    }
    output
}

/// Render the SAIL matrix
pub fn render_sail_table() -> String {
    let mut output = format!("{:<5}", "GRC");
    for arc in ArcLevel::ALL {
        output.push_str(&format!(" {:>6}", arc.as_str()));
    }
    output.push('\n');

    for grc in 1..=7u8 {
        output.push_str(&format!("{:<5}", grc));
        for arc in ArcLevel::ALL {
            let cell = sail_matrix_entry(grc, arc)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(" {:>6}", cell));
        }
        output.push('\n');
    }
    output
}

/// Render OSO requirement letters per SAIL
pub fn render_oso_table() -> String {
    let mut output = format!("{:<8}", "OSO");
    for sail in SailLevel::ALL {
        output.push_str(&format!(" {:>3}", sail.as_str()));
    }
    output.push_str("  NAME\n");

    for def in OSO_DEFINITIONS {
        output.push_str(&format!("{:<8}", def.id));
        for sail in SailLevel::ALL {
            output.push_str(&format!(" {:>3}", def.requirements.for_sail(sail).letter()));
        }
        output.push_str(&format!("  {}\n", def.name));
    }
    output
}

fn opt_or_scope<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| OUT_OF_SCOPE_LABEL.to_string())
}
