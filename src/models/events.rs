use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::zone::ZoneKind;

/// Which edge of the zone boundary was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransitionKind {
    Enter,
    Exit,
}

/// A discrete boundary-crossing event, emitted at most once per transition
/// edge: no duplicate Enter while continuously inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEvent {
    pub zone_id: String,
    pub zone_kind: ZoneKind,
    pub transition: TransitionKind,
    /// Signed boundary distance at the moment of the event
    pub boundary_distance_m: f64,
    pub timestamp_ms: i64,
}

/// A finalized alert record ready for persistent storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub alert_id: String, // UUID
    pub zone_id: String,
    pub zone_kind: ZoneKind,
    pub transition: TransitionKind,
    pub boundary_distance_m: f64,
    pub timestamp_ms: i64,
}

impl AlertRecord {
    pub fn from_event(event: &ZoneEvent) -> Self {
        AlertRecord {
            alert_id: uuid::Uuid::new_v4().to_string(),
            zone_id: event.zone_id.clone(),
            zone_kind: event.zone_kind,
            transition: event.transition,
            boundary_distance_m: event.boundary_distance_m,
            timestamp_ms: event.timestamp_ms,
        }
    }
}
