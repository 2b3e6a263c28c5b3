use serde::{Deserialize, Serialize};

/// A single position update from the external location provider.
/// Transient: evaluated on arrival, never persisted by this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Capture time in epoch milliseconds
    pub timestamp_ms: i64,
}

impl PositionFix {
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: i64) -> Self {
        PositionFix {
            latitude,
            longitude,
            timestamp_ms,
        }
    }

    /// Location providers occasionally deliver NaN coordinates mid-acquisition.
    /// A fix failing this check skips the evaluation tick entirely.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
