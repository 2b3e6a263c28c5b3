use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Instant;

use itertools::Itertools;
use tokio::runtime::Runtime;

use crate::config::{MonitorConfig, constants};
use crate::data::alert_log::AlertLog;
use crate::models::{AlertRecord, GeoZone, PositionFix, TransitionKind, ZoneEvaluation, ZoneEvent};
use crate::notify::Notifier;
use crate::utils::geo::boundary_distance_m;

use super::acknowledgments::AckTracker;
use super::evaluator::evaluate_zones;
use super::transitions::detect_transitions;

/// The zone monitor engine.
///
/// Single-threaded and push-driven: position fixes arrive on a channel from
/// the stream manager, `update()` drains them and re-evaluates synchronously.
/// Stopping the monitor just stops consuming fixes; nothing is in flight.
pub struct ZoneMonitorEngine {
    /// Immutable zone set, loaded once at start
    zones: Vec<GeoZone>,
    zone_index: HashMap<String, usize>,

    config: MonitorConfig,

    // Live Data Channel
    fix_rx: Receiver<PositionFix>,
    pub fix_tx: Sender<PositionFix>, // Public so the stream manager can grab it easily

    /// Previous tick's evaluation set, keyed by zone id
    previous: HashMap<String, ZoneEvaluation>,
    acks: AckTracker,

    notifier: Arc<dyn Notifier>,
    alert_log: Option<Arc<dyn AlertLog>>,

    running: bool,
    ticks: u64,
    skipped_fixes: u64,
    events_emitted: u64,
}

impl ZoneMonitorEngine {
    pub fn new(zones: Vec<GeoZone>, config: MonitorConfig, notifier: Arc<dyn Notifier>) -> Self {
        let (fix_tx, fix_rx) = channel();

        let zone_index = zones
            .iter()
            .enumerate()
            .map(|(i, z)| (z.id.clone(), i))
            .collect();

        Self {
            zones,
            zone_index,
            config,
            fix_rx,
            fix_tx,
            previous: HashMap::new(),
            acks: AckTracker::new(),
            notifier,
            alert_log: None,
            running: false,
            ticks: 0,
            skipped_fixes: 0,
            events_emitted: 0,
        }
    }

    /// Attach the persistent alert history. Records are written
    /// fire-and-forget off the engine thread.
    pub fn with_alert_log(mut self, alert_log: Arc<dyn AlertLog>) -> Self {
        self.alert_log = Some(alert_log);
        self
    }

    /// Begin consuming position fixes.
    pub fn start(&mut self) {
        self.running = true;
        log::info!(
            "Monitor started: {} zones, warning margin {} m",
            self.zones.len(),
            self.config.warning_margin_m
        );
    }

    /// Stop consuming position fixes. Queued fixes stay queued.
    pub fn stop(&mut self) {
        self.running = false;
        log::info!(
            "Monitor stopped after {} ticks ({} events, {} fixes skipped)",
            self.ticks,
            self.events_emitted,
            self.skipped_fixes
        );
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// THE HEARTBEAT. Drain the fix channel and evaluate each fix in arrival
    /// order. Returns every event emitted during this drain.
    pub fn update(&mut self) -> Vec<ZoneEvent> {
        if !self.running {
            return Vec::new();
        }

        // Drain the channel in a loop so we don't lag behind the provider
        let mut updates = Vec::new();
        while let Ok(fix) = self.fix_rx.try_recv() {
            updates.push(fix);
        }

        let mut events = Vec::new();
        for fix in updates {
            events.extend(self.on_fix(fix));
        }
        events
    }

    /// Evaluate a single fix: classify zones, detect boundary edges, fire the
    /// notification port, archive events. One synchronous tick.
    pub fn on_fix(&mut self, fix: PositionFix) -> Vec<ZoneEvent> {
        // Bad coordinates: skip the whole tick rather than emit spurious
        // exit events for every zone we were inside.
        if !fix.is_valid() {
            self.skipped_fixes += 1;
            log::warn!(
                "Skipping non-finite fix ({}, {}) at {}",
                fix.latitude,
                fix.longitude,
                fix.timestamp_ms
            );
            return Vec::new();
        }

        let t0 = Instant::now();

        // 1. Classify
        let evaluations = evaluate_zones(&self.zones, &fix, self.config.warning_margin_m);
        let current: HashMap<String, ZoneEvaluation> = evaluations
            .into_iter()
            .map(|e| (e.zone_id.clone(), e))
            .collect();

        // 2. Detect edges (exits first, then enters)
        let transitions = detect_transitions(&self.previous, &current);

        // 3. Materialize events and fire side effects
        let mut events = Vec::with_capacity(transitions.len());
        for (zone_id, kind) in transitions {
            let Some(zone) = self.zone_by_id(&zone_id) else {
                continue;
            };
            let zone = zone.clone();

            // A zone exited past the warning band has no current evaluation;
            // recompute its distance for the event record.
            let distance = current
                .get(&zone_id)
                .map(|e| e.boundary_distance_m)
                .unwrap_or_else(|| {
                    boundary_distance_m(
                        fix.latitude,
                        fix.longitude,
                        zone.center_lat,
                        zone.center_lon,
                        zone.radius_m,
                    )
                });

            match kind {
                TransitionKind::Exit => {
                    // Exit clears the acknowledgment so re-entry alerts again
                    self.acks.clear(&zone_id);
                    self.notifier.zone_exited(&zone, fix.timestamp_ms);
                }
                TransitionKind::Enter => {
                    // The port owns the haptic cue and the blocking alert
                    let evaluation = &current[&zone_id];
                    self.notifier.zone_entered(&zone, evaluation);
                }
            }

            events.push(ZoneEvent {
                zone_id,
                zone_kind: zone.kind,
                transition: kind,
                boundary_distance_m: distance,
                timestamp_ms: fix.timestamp_ms,
            });
        }

        // 4. Archive
        if !events.is_empty() {
            self.events_emitted += events.len() as u64;
            self.archive_events(&events);
        }

        // 5. Swap in the new evaluation set
        self.previous = current;
        self.ticks += 1;

        let elapsed = t0.elapsed().as_micros();
        if elapsed > constants::engine::SLOW_TICK_WARN_US {
            log::warn!("🐢 Slow tick: {}us for {} zones", elapsed, self.zones.len());
        }

        events
    }

    /// User dismissal of an active inside-alert. Only accepted while the
    /// user is inside the zone, which keeps the acknowledged set consistent
    /// with the per-zone state machine.
    pub fn acknowledge(&mut self, zone_id: &str) -> bool {
        let inside_now = self
            .previous
            .get(zone_id)
            .map(|e| e.is_inside)
            .unwrap_or(false);

        if !inside_now {
            log::warn!("Ignoring acknowledgment for zone '{}': not inside", zone_id);
            return false;
        }

        self.acks.acknowledge(zone_id)
    }

    /// The banner list for the current tick, most critical first:
    /// unacknowledged inside-zones plus every nearby-only warning.
    /// Nearby warnings are deliberately not acknowledgment-gated.
    pub fn active_alerts(&self) -> Vec<&ZoneEvaluation> {
        self.previous
            .values()
            .filter(|e| {
                if e.is_inside {
                    !self.acks.is_acked(&e.zone_id)
                } else {
                    true
                }
            })
            .sorted_by(|a, b| {
                a.boundary_distance_m
                    .partial_cmp(&b.boundary_distance_m)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .collect()
    }

    /// Every zone currently inside or nearby, untouched by acknowledgment.
    pub fn current_evaluations(&self) -> Vec<&ZoneEvaluation> {
        self.previous.values().collect()
    }

    pub fn zone_by_id(&self, zone_id: &str) -> Option<&GeoZone> {
        self.zone_index.get(zone_id).map(|&i| &self.zones[i])
    }

    pub fn zones(&self) -> &[GeoZone] {
        &self.zones
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn skipped_fix_count(&self) -> u64 {
        self.skipped_fixes
    }

    /// Fire-and-forget persistence of emitted events, off the engine thread.
    fn archive_events(&self, events: &[ZoneEvent]) {
        let Some(log_handle) = self.alert_log.clone() else {
            return;
        };
        let records: Vec<AlertRecord> = events.iter().map(AlertRecord::from_event).collect();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to start archive runtime: {}", e);
                    return;
                }
            };
            rt.block_on(async {
                for record in records {
                    if let Err(e) = log_handle.record_event(record).await {
                        log::error!("Failed to archive alert: {}", e);
                    }
                }
            });
        });
    }
}
