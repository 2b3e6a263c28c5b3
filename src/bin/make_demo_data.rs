use anyhow::Result;
use std::path::PathBuf;

use zone_watch::config::PERSISTENCE;
use zone_watch::data::{save_track, save_zones};
use zone_watch::models::{GeoZone, PositionFix, ZoneKind};

// A straight walk north through the demo site, one fix per second.
// Crosses the excavation zone, brushes the crane yard's warning band.
const TRACK_STEP_DEG: f64 = 0.0002; // ~22 m per fix
const TRACK_FIXES: usize = 40;

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Demo zone set (site at 24N 54E)
    let mut excavation = GeoZone::new(
        "excavation-1",
        "Excavation Pit 1",
        ZoneKind::Danger,
        24.0040,
        54.0000,
        100.0,
    );
    excavation.description = Some("Open pit, unstable edges".to_string());
    excavation.contact = Some("Site office +971-2-0000000".to_string());

    let crane_yard = GeoZone::new(
        "crane-yard",
        "Crane Yard",
        ZoneKind::Restricted,
        24.0060,
        54.0012,
        80.0,
    );

    let substation = GeoZone::new(
        "substation",
        "HV Substation",
        ZoneKind::AuthorizedOnly,
        24.0100,
        54.0100,
        60.0,
    );

    let zones = vec![excavation, crane_yard, substation];

    // 3. Synthesize the track
    let start_ms: i64 = 1_700_000_000_000;
    let track: Vec<PositionFix> = (0..TRACK_FIXES)
        .map(|i| {
            PositionFix::new(
                24.0000 + TRACK_STEP_DEG * i as f64,
                54.0000,
                start_ms + 1_000 * i as i64,
            )
        })
        .collect();

    // 4. Write both files next to the alert history
    let zone_path = PathBuf::from(PERSISTENCE.zone_file);
    let track_path = PathBuf::from(PERSISTENCE.track_file);

    save_zones(&zone_path, &zones)?;
    log::info!("📦 Wrote {} zones to {:?}", zones.len(), zone_path);

    save_track(&track_path, &track)?;
    log::info!("📦 Wrote {} fixes to {:?}", track.len(), track_path);

    log::info!("✅ Done. Replay with: zone-watch --speed 10");
    Ok(())
}
