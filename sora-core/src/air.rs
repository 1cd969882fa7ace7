//! Residual Air Risk Class (ARC) calculation
//!
//! Global invariants enforced:
//! - Residual ARC is never more severe than the initial ARC
//! - Residual ARC is never below ARC-a or the mitigation's best achievable class
//! - No partial credit below the minimum required robustness

use crate::tables::{tactical_mitigation, ArcLevel, RobustnessLevel, TmprMethod};
use serde::{Deserialize, Serialize};

/// A caller's tactical mitigation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmprSelection {
    #[serde(default)]
    pub enabled: bool,
    /// May be absent when the selection is disabled
    #[serde(rename = "type", default)]
    pub method: Option<TmprMethod>,
    #[serde(default)]
    pub robustness: RobustnessLevel,
}

impl TmprSelection {
    pub fn new(method: TmprMethod, robustness: RobustnessLevel) -> Self {
        TmprSelection {
            enabled: true,
            method: Some(method),
            robustness,
        }
    }
}

/// Residual ARC after an optional tactical mitigation
pub fn residual_arc(initial: ArcLevel, tmpr: Option<&TmprSelection>) -> ArcLevel {
    let Some(selection) = tmpr.filter(|t| t.enabled) else {
        return initial;
    };
    let Some(method) = selection.method else {
        tracing::warn!("enabled tactical mitigation has no type, no ARC reduction");
        return initial;
    };

    let mitigation = tactical_mitigation(method);
    if selection.robustness < mitigation.min_robustness {
        tracing::debug!(
            %method,
            achieved = %selection.robustness,
            required = %mitigation.min_robustness,
            "tactical mitigation below minimum robustness, no ARC reduction"
        );
        return initial;
    }

    initial
        .step_down(mitigation.arc_reduction)
        .max(mitigation.best_arc)
        .min(initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tmpr_returns_initial() {
        for arc in ArcLevel::ALL {
            assert_eq!(residual_arc(arc, None), arc);
        }
    }

    #[test]
    fn test_disabled_tmpr_returns_initial() {
        let tmpr = TmprSelection {
            enabled: false,
            method: Some(TmprMethod::Vlos),
            robustness: RobustnessLevel::High,
        };
        assert_eq!(residual_arc(ArcLevel::C, Some(&tmpr)), ArcLevel::C);
    }

    #[test]
    fn test_vlos_low_reduces_arc_b_to_a() {
        let tmpr = TmprSelection::new(TmprMethod::Vlos, RobustnessLevel::Low);
        assert_eq!(residual_arc(ArcLevel::B, Some(&tmpr)), ArcLevel::A);
    }

    #[test]
    fn test_below_minimum_robustness_no_credit() {
        let tmpr = TmprSelection::new(TmprMethod::Evlos, RobustnessLevel::Low);
        assert_eq!(residual_arc(ArcLevel::C, Some(&tmpr)), ArcLevel::C);

        let tmpr = TmprSelection::new(TmprMethod::Daa, RobustnessLevel::Medium);
        assert_eq!(residual_arc(ArcLevel::D, Some(&tmpr)), ArcLevel::D);
    }

    #[test]
    fn test_daa_two_steps() {
        let tmpr = TmprSelection::new(TmprMethod::Daa, RobustnessLevel::High);
        assert_eq!(residual_arc(ArcLevel::D, Some(&tmpr)), ArcLevel::B);
    }

    #[test]
    fn test_daa_capped_at_best_arc() {
        let tmpr = TmprSelection::new(TmprMethod::Daa, RobustnessLevel::High);
        assert_eq!(residual_arc(ArcLevel::C, Some(&tmpr)), ArcLevel::B);
        // Already better than the cap: never raised
        assert_eq!(residual_arc(ArcLevel::A, Some(&tmpr)), ArcLevel::A);
    }

    #[test]
    fn test_floor_at_arc_a() {
        let tmpr = TmprSelection::new(TmprMethod::Vlos, RobustnessLevel::High);
        assert_eq!(residual_arc(ArcLevel::A, Some(&tmpr)), ArcLevel::A);
    }

    #[test]
    fn test_residual_never_above_initial() {
        for method in TmprMethod::ALL {
            for robustness in RobustnessLevel::ALL {
                for arc in ArcLevel::ALL {
                    let tmpr = TmprSelection::new(method, robustness);
                    let residual = residual_arc(arc, Some(&tmpr));
                    assert!(residual <= arc);
                    assert!(residual >= ArcLevel::A);
                }
            }
        }
    }

    #[test]
    fn test_deserialize_selection() {
        let tmpr: TmprSelection =
            serde_json::from_str(r#"{"enabled": true, "type": "VLOS", "robustness": "low"}"#)
                .unwrap();
        assert_eq!(tmpr, TmprSelection::new(TmprMethod::Vlos, RobustnessLevel::Low));
    }

    #[test]
    fn test_disabled_selection_without_type() {
        let tmpr: TmprSelection = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert_eq!(tmpr.method, None);
        assert_eq!(residual_arc(ArcLevel::C, Some(&tmpr)), ArcLevel::C);
    }

    #[test]
    fn test_enabled_selection_without_type_no_credit() {
        let tmpr: TmprSelection =
            serde_json::from_str(r#"{"enabled": true, "robustness": "high"}"#).unwrap();
        assert_eq!(residual_arc(ArcLevel::D, Some(&tmpr)), ArcLevel::D);
    }
}
