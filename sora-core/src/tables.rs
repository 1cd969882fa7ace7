//! SORA 2.5 reference tables
//!
//! Immutable, enum-keyed data consumed by the calculators. Every table is an
//! exhaustive `match` over closed enums, so adding a category without filling
//! in its row is a compile error rather than a silent missing entry.
//!
//! Global invariants enforced:
//! - No table is mutable at runtime
//! - Intrinsic GRC is non-decreasing along both matrix axes
//! - Robustness, ARC and SAIL carry an explicit total order

pub mod aircraft;
pub mod airspace;
pub mod levels;
pub mod mitigation;
pub mod oso;
pub mod population;

pub use aircraft::UaClass;
pub use airspace::{tactical_mitigation, TacticalMitigation, TmprMethod};
pub use levels::{ArcLevel, RequirementLevel, RobustnessLevel, SailLevel};
pub use mitigation::{ground_mitigation, GroundMitigation, GroundMitigationId, MitigationLevel};
pub use oso::{find_oso, OsoCategory, OsoDefinition, OsoRequirements, Responsibility, OSO_DEFINITIONS};
pub use population::PopulationCategory;

/// Intrinsic GRC matrix row for a population category
///
/// Columns follow `UaClass::ALL` order. `None` marks combinations outside
/// the SORA scope (certified category).
const fn intrinsic_grc_row(population: PopulationCategory) -> [Option<u8>; 5] {
    match population {
        PopulationCategory::Controlled => [Some(1), Some(1), Some(2), Some(3), Some(3)],
        PopulationCategory::Remote => [Some(2), Some(3), Some(4), Some(5), Some(6)],
        PopulationCategory::Lightly => [Some(3), Some(4), Some(5), Some(6), Some(7)],
        PopulationCategory::Sparsely => [Some(4), Some(5), Some(6), Some(7), Some(8)],
        PopulationCategory::Suburban => [Some(5), Some(6), Some(7), Some(8), Some(9)],
        PopulationCategory::HighDensity => [Some(6), Some(7), Some(8), Some(9), Some(10)],
        PopulationCategory::Assembly => [Some(7), Some(8), None, None, None],
    }
}

/// Look up the intrinsic GRC matrix cell
pub fn intrinsic_grc_entry(population: PopulationCategory, ua_class: UaClass) -> Option<u8> {
    intrinsic_grc_row(population)[ua_class.index()]
}

/// Look up the SAIL matrix cell for a GRC row in [1, 7]
///
/// GRC 1 and 2 share a row. Any GRC outside [1, 7] has no row.
pub fn sail_matrix_entry(grc: u8, arc: ArcLevel) -> Option<SailLevel> {
    use SailLevel::*;

    let row = match grc {
        1 | 2 => [I, II, IV, VI],
        3 => [II, II, IV, VI],
        4 => [III, III, IV, VI],
        5 => [IV, IV, IV, VI],
        6 => [V, V, V, VI],
        7 => [VI, VI, VI, VI],
        _ => return None,
    };
    Some(row[arc.index()])
}

/// Look up the containment robustness table
///
/// A controlled adjacent area has no uninvolved people and is not part of
/// the table; callers get `None` and must apply their documented fallback.
pub fn containment_entry(
    adjacent: PopulationCategory,
    sail: SailLevel,
) -> Option<RobustnessLevel> {
    use RobustnessLevel::{High, Low, Medium};

    // Columns: SAIL I-II, III-IV, V-VI
    let row = match adjacent {
        PopulationCategory::Controlled => return None,
        PopulationCategory::Remote => [Low, Low, Medium],
        PopulationCategory::Lightly => [Low, Low, Medium],
        PopulationCategory::Sparsely => [Low, Medium, High],
        PopulationCategory::Suburban => [Medium, Medium, High],
        PopulationCategory::HighDensity => [Medium, High, High],
        PopulationCategory::Assembly => [High, High, High],
    };
    let column = match sail {
        SailLevel::I | SailLevel::II => 0,
        SailLevel::III | SailLevel::IV => 1,
        SailLevel::V | SailLevel::VI => 2,
    };
    Some(row[column])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_grc_monotonic_along_population() {
        for class in UaClass::ALL {
            let mut previous = 0;
            for population in PopulationCategory::ALL {
                if let Some(grc) = intrinsic_grc_entry(population, class) {
                    assert!(
                        grc >= previous,
                        "{} at {} decreased GRC",
                        population.as_str(),
                        class.as_str()
                    );
                    previous = grc;
                }
            }
        }
    }

    #[test]
    fn test_intrinsic_grc_monotonic_along_class() {
        for population in PopulationCategory::ALL {
            let mut previous = 0;
            for class in UaClass::ALL {
                if let Some(grc) = intrinsic_grc_entry(population, class) {
                    assert!(grc >= previous);
                    previous = grc;
                }
            }
        }
    }

    #[test]
    fn test_intrinsic_grc_range() {
        for population in PopulationCategory::ALL {
            for class in UaClass::ALL {
                if let Some(grc) = intrinsic_grc_entry(population, class) {
                    assert!((1..=10).contains(&grc));
                }
            }
        }
    }

    #[test]
    fn test_out_of_scope_cells() {
        assert_eq!(
            intrinsic_grc_entry(PopulationCategory::Assembly, UaClass::Class8m75ms),
            None
        );
        assert_eq!(
            intrinsic_grc_entry(PopulationCategory::Assembly, UaClass::Class40m200ms),
            None
        );
        assert_eq!(
            intrinsic_grc_entry(PopulationCategory::Assembly, UaClass::Class3m35ms),
            Some(8)
        );
    }

    #[test]
    fn test_sail_matrix_rows() {
        assert_eq!(sail_matrix_entry(1, ArcLevel::A), Some(SailLevel::I));
        assert_eq!(sail_matrix_entry(2, ArcLevel::A), Some(SailLevel::I));
        assert_eq!(sail_matrix_entry(4, ArcLevel::B), Some(SailLevel::III));
        assert_eq!(sail_matrix_entry(5, ArcLevel::C), Some(SailLevel::IV));
        assert_eq!(sail_matrix_entry(7, ArcLevel::A), Some(SailLevel::VI));
        assert_eq!(sail_matrix_entry(3, ArcLevel::D), Some(SailLevel::VI));
    }

    #[test]
    fn test_sail_matrix_has_no_row_outside_range() {
        assert_eq!(sail_matrix_entry(0, ArcLevel::A), None);
        assert_eq!(sail_matrix_entry(8, ArcLevel::A), None);
    }

    #[test]
    fn test_containment_controlled_absent() {
        for sail in SailLevel::ALL {
            assert_eq!(containment_entry(PopulationCategory::Controlled, sail), None);
        }
    }

    #[test]
    fn test_containment_monotonic_in_sail() {
        for population in PopulationCategory::ALL {
            let mut previous = RobustnessLevel::None;
            for sail in SailLevel::ALL {
                if let Some(level) = containment_entry(population, sail) {
                    assert!(level >= previous);
                    previous = level;
                }
            }
        }
    }
}
