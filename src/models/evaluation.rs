use serde::{Deserialize, Serialize};

use super::zone::ZoneKind;

/// Per-tick classification of one zone relative to the current position.
///
/// Only zones inside the warning band (inside or nearby) are materialized;
/// everything else is omitted from the tick's evaluation set, so membership
/// in the set already implies `is_nearby`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEvaluation {
    pub zone_id: String,
    pub zone_kind: ZoneKind,
    /// Signed distance from the zone boundary in meters.
    /// Negative or zero means the position is inside the zone.
    pub boundary_distance_m: f64,
    pub is_inside: bool,
    /// Capture time of the fix this evaluation was derived from
    pub timestamp_ms: i64,
}

impl ZoneEvaluation {
    /// In the warning band but not yet across the boundary.
    pub fn is_nearby_only(&self) -> bool {
        !self.is_inside
    }
}
