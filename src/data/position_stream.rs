use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::models::PositionFix;

/// The boundary to the external location provider.
///
/// Owns the sending half of the engine's fix channel. In production the
/// device GPS would push through here; this crate ships a track replay mode
/// that feeds recorded fixes at a configurable speed.
pub struct PositionStreamManager {
    fix_tx: Sender<PositionFix>,
    // Suspension flag - when true, fixes are dropped instead of forwarded
    suspended: Arc<Mutex<bool>>,
}

impl PositionStreamManager {
    pub fn new(fix_tx: Sender<PositionFix>) -> Self {
        Self {
            fix_tx,
            suspended: Arc::new(Mutex::new(false)),
        }
    }

    /// Suspend fix forwarding (for simulation pauses)
    pub fn suspend(&self) {
        *self.suspended.lock().unwrap() = true;
        log::info!("🔇 Position updates suspended");
    }

    pub fn resume(&self) {
        *self.suspended.lock().unwrap() = false;
        log::info!("🔊 Position updates resumed");
    }

    pub fn is_suspended(&self) -> bool {
        *self.suspended.lock().unwrap()
    }

    /// Push a single fix from an external source. Dropped while suspended.
    pub fn push(&self, fix: PositionFix) {
        if self.is_suspended() {
            return;
        }
        if self.fix_tx.send(fix).is_err() {
            log::warn!("Fix channel closed; dropping position update");
        }
    }

    /// Replay a recorded track on a background task.
    ///
    /// `speed` scales the recorded inter-fix gaps: 2.0 plays twice as fast,
    /// 0.0 (or a track without gaps) replays with no sleeping at all.
    /// Must be called from within a tokio runtime.
    pub fn replay_track(&self, track: Vec<PositionFix>, speed: f64) -> JoinHandle<()> {
        let tx = self.fix_tx.clone();
        let suspended = self.suspended.clone();

        tokio::spawn(async move {
            log::info!("▶ Replaying {} fixes (speed {})", track.len(), speed);

            let mut previous_ts: Option<i64> = None;
            for fix in track {
                if let (Some(prev), true) = (previous_ts, speed > 0.0) {
                    let gap_ms = (fix.timestamp_ms - prev).max(0) as f64 / speed;
                    sleep(Duration::from_millis(gap_ms as u64)).await;
                }
                previous_ts = Some(fix.timestamp_ms);

                if *suspended.lock().unwrap() {
                    continue;
                }
                if tx.send(fix).is_err() {
                    log::warn!("Fix channel closed mid-replay; stopping");
                    return;
                }
            }

            log::info!("⏹ Replay complete");
        })
    }
}

/// Load a recorded track: a JSON array of position fixes.
pub fn load_track(path: &Path) -> Result<Vec<PositionFix>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read track file {:?}", path))?;
    let track: Vec<PositionFix> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse track file {:?}", path))?;
    Ok(track)
}

pub fn save_track(path: &Path, track: &[PositionFix]) -> Result<()> {
    let json = serde_json::to_string_pretty(track)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write track file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn track() -> Vec<PositionFix> {
        vec![
            PositionFix::new(24.0030, 54.0, 1_000),
            PositionFix::new(24.0006, 54.0, 2_000),
            PositionFix::new(24.0030, 54.0, 3_000),
        ]
    }

    #[test]
    fn test_push_respects_suspension() {
        let (tx, rx) = channel();
        let manager = PositionStreamManager::new(tx);

        manager.push(PositionFix::new(24.0, 54.0, 1));
        manager.suspend();
        manager.push(PositionFix::new(24.0, 54.0, 2));
        manager.resume();
        manager.push(PositionFix::new(24.0, 54.0, 3));

        let received: Vec<PositionFix> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].timestamp_ms, 1);
        assert_eq!(received[1].timestamp_ms, 3);
    }

    #[tokio::test]
    async fn test_replay_delivers_all_fixes_in_order() {
        let (tx, rx) = channel();
        let manager = PositionStreamManager::new(tx);

        manager.replay_track(track(), 0.0).await.unwrap();

        let received: Vec<PositionFix> = rx.try_iter().collect();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].timestamp_ms, 1_000);
        assert_eq!(received[2].timestamp_ms, 3_000);
    }

    #[test]
    fn test_track_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.json");

        save_track(&path, &track()).unwrap();
        let loaded = load_track(&path).unwrap();
        assert_eq!(loaded, track());
    }
}
