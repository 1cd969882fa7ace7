//! SORA core library - JARUS SORA 2.5 ground/air risk classification

// Global invariants enforced in this crate:
// - Reference tables are immutable and consulted only through lookup functions
// - No global mutable state, IO, clocks, or randomness in classification
// - Out-of-scope results propagate as `None`; they are never coerced into a level
// - Identical input yields byte-for-byte identical output

pub mod air;
pub mod assessment;
pub mod config;
pub mod containment;
pub mod findings;
pub mod ground;
pub mod oso;
pub mod report;
pub mod sail;
pub mod tables;

pub use assessment::{evaluate, AssessmentError, AssessmentSummary, RiskAssessment};
pub use config::ResolvedConfig;
pub use findings::{evaluate_findings, Findings};
pub use report::{render_json, render_text, ReportFormat};

use anyhow::{Context, Result};
use std::path::Path;

/// Parse an assessment from its JSON form
pub fn parse_assessment(json: &str) -> Result<RiskAssessment> {
    serde_json::from_str(json).context("failed to parse assessment JSON")
}

/// Load an assessment from a JSON file
pub fn load_assessment(path: &Path) -> Result<RiskAssessment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read assessment: {}", path.display()))?;
    parse_assessment(&content)
        .with_context(|| format!("invalid assessment file: {}", path.display()))
}
