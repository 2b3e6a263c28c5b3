//! Notification port: the seam between the evaluation core and whatever
//! renders alerts. The engine decides *that* an effect fires; implementations
//! decide how (haptics, modal, log line). Keeps the core free of any device
//! or UI dependency.

use crate::models::{GeoZone, ZoneEvaluation};

pub trait Notifier: Send + Sync {
    /// Fired exactly once on an enter edge. Implementations are expected to
    /// trigger a strong haptic cue and surface a blocking alert.
    fn zone_entered(&self, zone: &GeoZone, evaluation: &ZoneEvaluation);

    /// Fired exactly once on an exit edge.
    fn zone_exited(&self, zone: &GeoZone, timestamp_ms: i64);
}

/// CLI / headless implementation: alerts become log lines.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn zone_entered(&self, zone: &GeoZone, evaluation: &ZoneEvaluation) {
        log::warn!(
            "🚨 ENTERED {} zone '{}' [{}] ({:.1} m past boundary)",
            zone.kind,
            zone.name,
            zone.id,
            -evaluation.boundary_distance_m,
        );
        if let Some(contact) = &zone.contact {
            log::warn!("   Contact: {}", contact);
        }
    }

    fn zone_exited(&self, zone: &GeoZone, _timestamp_ms: i64) {
        log::info!("Left zone '{}' [{}]", zone.name, zone.id);
    }
}

/// Swallows everything. For callers that only consume the returned events.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn zone_entered(&self, _zone: &GeoZone, _evaluation: &ZoneEvaluation) {}
    fn zone_exited(&self, _zone: &GeoZone, _timestamp_ms: i64) {}
}
