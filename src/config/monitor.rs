use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_WARNING_MARGIN_M;

/// Tunable behaviour of the zone monitor engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Meters beyond a zone boundary within which the zone still shows up
    /// in the per-tick evaluation set as a "nearby" warning.
    pub warning_margin_m: f64,
}

impl MonitorConfig {
    pub fn with_warning_margin(mut self, margin_m: f64) -> Self {
        self.warning_margin_m = margin_m;
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MONITOR
    }
}

pub const MONITOR: MonitorConfig = MonitorConfig {
    warning_margin_m: DEFAULT_WARNING_MARGIN_M,
};
