//! SAIL resolution from final GRC and residual ARC

use crate::ground::MIN_GRC;
use crate::tables::{sail_matrix_entry, ArcLevel, SailLevel};

/// Highest final GRC the SAIL matrix covers
pub const MAX_GRC_IN_SCOPE: u8 = 7;

/// Resolve SAIL, or `None` when the operation is outside SORA scope
///
/// `None` means the certified category applies; it is never replaced by a
/// default SAIL. A final GRC above 7 is out of scope even after mitigation.
pub fn sail(final_grc: Option<u8>, residual_arc: ArcLevel) -> Option<SailLevel> {
    let grc = final_grc?;
    if grc > MAX_GRC_IN_SCOPE {
        tracing::debug!(grc, "final GRC above SAIL matrix, outside SORA scope");
        return None;
    }
    sail_matrix_entry(grc.max(MIN_GRC), residual_arc)
}
