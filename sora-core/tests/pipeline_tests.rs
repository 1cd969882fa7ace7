//! End-to-end classification tests over assessment fixtures

use sora_core::config::ResolvedConfig;
use sora_core::findings::{FindingId, FindingSeverity};
use sora_core::tables::{ArcLevel, RobustnessLevel, SailLevel};
use sora_core::{
    evaluate, evaluate_findings, load_assessment, parse_assessment, render_json, render_text,
    AssessmentError,
};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("sora")
        .join(name)
}

fn config() -> ResolvedConfig {
    ResolvedConfig::defaults().unwrap()
}

#[test]
fn test_rural_vlos_operation() {
    let assessment = load_assessment(&fixture_path("rural_vlos.json")).unwrap();
    let summary = evaluate(&assessment).unwrap();

    assert_eq!(summary.intrinsic_grc, Some(4));
    assert_eq!(summary.final_grc, Some(2));
    assert_eq!(summary.residual_arc, ArcLevel::A);
    assert_eq!(summary.sail, Some(SailLevel::I));
    assert!(summary.within_scope);
    assert_eq!(summary.adjacent_area_distance_meters, 5_000.0);
    assert_eq!(
        summary.required_containment_robustness,
        Some(RobustnessLevel::Low)
    );

    let oso = summary.oso.as_ref().unwrap();
    let oso01 = oso.results.iter().find(|r| r.id == "OSO#01").unwrap();
    assert!(oso01.compliant);
    // OSO#08 requires L at SAIL I and is claimed at low
    let oso08 = oso.results.iter().find(|r| r.id == "OSO#08").unwrap();
    assert!(oso08.compliant);
    // OSO#03 requires L at SAIL I but has no status
    let oso03 = oso.results.iter().find(|r| r.id == "OSO#03").unwrap();
    assert!(!oso03.compliant);
    assert_eq!(oso03.gap, 1);
    assert!(!oso.overall_compliant);
}

#[test]
fn test_rural_vlos_findings() {
    let assessment = load_assessment(&fixture_path("rural_vlos.json")).unwrap();
    let outcome = evaluate(&assessment);
    let findings = evaluate_findings(&assessment, &outcome, &config());

    assert!(findings.has_blocking_failures());
    assert!(findings.failed.iter().all(|f| f.id == FindingId::OsoGap));
    let evidence: Vec<_> = findings
        .warnings
        .iter()
        .filter(|f| f.id == FindingId::MissingEvidence)
        .map(|f| f.subject.as_deref().unwrap())
        .collect();
    assert_eq!(evidence, vec!["OSO#08"]);
}

#[test]
fn test_urban_evlos_without_partial_credit() {
    let assessment = load_assessment(&fixture_path("urban_evlos.json")).unwrap();
    let summary = evaluate(&assessment).unwrap();

    assert_eq!(summary.intrinsic_grc, Some(7));
    // M1B high (-2) and M2 medium (-1); disabled M1C contributes nothing
    assert_eq!(summary.final_grc, Some(4));
    // EVLOS claimed at low does not meet its medium minimum
    assert_eq!(summary.residual_arc, ArcLevel::C);
    assert_eq!(summary.sail, Some(SailLevel::IV));
    assert_eq!(summary.adjacent_area_distance_meters, 13_500.0);
    assert_eq!(
        summary.required_containment_robustness,
        Some(RobustnessLevel::High)
    );
    assert!(!summary.containment_fallback);
}

#[test]
fn test_assembly_large_ua_is_out_of_scope() {
    let assessment = load_assessment(&fixture_path("assembly_large_ua.json")).unwrap();
    let summary = evaluate(&assessment).unwrap();

    assert_eq!(summary.intrinsic_grc, None);
    assert_eq!(summary.final_grc, None);
    assert_eq!(summary.sail, None);
    assert!(!summary.within_scope);
    assert_eq!(summary.required_containment_robustness, None);
    assert!(summary.oso.is_none());
    // Air risk is still computed for reference
    assert_eq!(summary.residual_arc, ArcLevel::B);
    assert_eq!(summary.adjacent_area_distance_meters, 21_600.0);

    let text = render_text(&summary, false);
    assert!(text.contains("certified category required"));

    let findings = evaluate_findings(&assessment, &Ok(summary), &config());
    assert_eq!(findings.failed.len(), 1);
    assert_eq!(findings.failed[0].id, FindingId::OutOfScope);
    assert_eq!(findings.failed[0].severity, FindingSeverity::Blocking);
}

#[test]
fn test_conflicting_mitigations_rejected() {
    let assessment = load_assessment(&fixture_path("conflicting_mitigations.json")).unwrap();
    let outcome = evaluate(&assessment);

    match outcome {
        Err(AssessmentError::InvalidCombination(ref conflict)) => {
            assert_eq!(conflict.mitigation.as_str(), "M1A");
            assert_eq!(conflict.excluded.as_str(), "M1B");
        }
        ref other => panic!("expected mitigation conflict, got {:?}", other),
    }

    let findings = evaluate_findings(&assessment, &outcome, &config());
    assert_eq!(findings.failed[0].id, FindingId::MitigationConflict);
}

#[test]
fn test_json_output_is_deterministic() {
    for name in ["rural_vlos.json", "urban_evlos.json", "assembly_large_ua.json"] {
        let assessment = load_assessment(&fixture_path(name)).unwrap();
        let first = render_json(&evaluate(&assessment).unwrap());
        let second = render_json(&evaluate(&assessment).unwrap());
        assert_eq!(first, second, "non-deterministic output for {}", name);
    }
}

#[test]
fn test_json_output_uses_null_for_out_of_scope() {
    let assessment = load_assessment(&fixture_path("assembly_large_ua.json")).unwrap();
    let json = render_json(&evaluate(&assessment).unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["intrinsicGRC"].is_null());
    assert!(value["sail"].is_null());
    assert_eq!(value["withinScope"], false);
    assert!(value.get("oso").is_none());
}

#[test]
fn test_contract_keys_round_trip_through_pipeline() {
    let input = r#"{
        "populationCategory": "sparsely",
        "uaClass": "1m_25ms",
        "groundMitigations": {
            "M1A": { "enabled": true, "robustness": "medium" }
        },
        "initialARC": "ARC-b",
        "tmpr": { "enabled": true, "type": "VLOS", "robustness": "low" },
        "adjacentAreaPopulation": "lightly"
    }"#;
    let assessment = parse_assessment(input).unwrap();
    assert_eq!(assessment.initial_arc, ArcLevel::B);

    let value = serde_json::to_value(evaluate(&assessment).unwrap()).unwrap();
    assert_eq!(value["intrinsicGRC"], 4);
    assert_eq!(value["finalGRC"], 2);
    assert_eq!(value["residualARC"], "ARC-a");
    assert_eq!(value["sail"], "I");
    assert_eq!(value["withinScope"], true);
    assert_eq!(value["adjacentAreaDistanceMeters"], 5000.0);
    assert_eq!(value["requiredContainmentRobustness"], "low");
    for camel in ["initialArc", "intrinsicGrc", "finalGrc", "residualArc"] {
        assert!(value.get(camel).is_none(), "unexpected key {}", camel);
    }
}

#[test]
fn test_disabled_tmpr_may_omit_type() {
    let input = r#"{
        "populationCategory": "remote",
        "uaClass": "3m_35ms",
        "initialARC": "ARC-c",
        "tmpr": { "enabled": false },
        "adjacentAreaPopulation": "remote"
    }"#;
    let assessment = parse_assessment(input).unwrap();
    let summary = evaluate(&assessment).unwrap();
    assert_eq!(summary.residual_arc, ArcLevel::C);
}
