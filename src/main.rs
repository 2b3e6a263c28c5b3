use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tabled::{Table, Tabled};
use tokio::runtime::Runtime;

use zone_watch::config::{MONITOR, alert_log_path, constants};
use zone_watch::data::{PositionStreamManager, SqliteAlertLog, load_track, load_zones};
use zone_watch::engine::ZoneMonitorEngine;
use zone_watch::models::{TransitionKind, ZoneEvent};
use zone_watch::notify::LogNotifier;
use zone_watch::utils::epoch_ms_to_utc;
use zone_watch::Cli;

#[derive(Tabled)]
struct ZoneSummaryRow {
    #[tabled(rename = "Zone")]
    id: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Radius (m)")]
    radius_m: String,
    #[tabled(rename = "Enters")]
    enters: u64,
    #[tabled(rename = "Exits")]
    exits: u64,
}

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("zone_watch"), my_code_level)
        .init();

    let args = Cli::parse();

    // 1. Load inputs
    let zones = load_zones(&args.zones)?;
    let track = load_track(&args.track)?;
    if track.is_empty() {
        log::warn!("Track {:?} is empty; nothing to monitor", args.track);
        return Ok(());
    }

    let config = match args.warning_margin {
        Some(margin) => MONITOR.with_warning_margin(margin),
        None => MONITOR,
    };

    // 2. Build the engine
    let mut engine = ZoneMonitorEngine::new(zones, config, Arc::new(LogNotifier));

    let rt = Runtime::new().context("Failed to start tokio runtime")?;

    if !args.no_alert_log {
        let path = alert_log_path();
        std::fs::create_dir_all(zone_watch::PERSISTENCE.alert_log.directory)?;
        let alert_log = rt
            .block_on(SqliteAlertLog::new(&path))
            .with_context(|| format!("Failed to open alert log {}", path))?;
        engine = engine.with_alert_log(Arc::new(alert_log));
        log::info!("Alert history: {}", path);
    }

    // 3. Start the replay feed
    let stream = PositionStreamManager::new(engine.fix_tx.clone());
    let _guard = rt.enter();
    let replay = stream.replay_track(track, args.speed);

    // 4. Run the monitor loop until the feed finishes and the channel drains
    engine.start();
    let mut all_events: Vec<ZoneEvent> = Vec::new();
    loop {
        all_events.extend(engine.update());

        if replay.is_finished() {
            // One final drain for fixes sent just before completion
            all_events.extend(engine.update());
            break;
        }
        std::thread::sleep(Duration::from_millis(constants::replay::DRAIN_INTERVAL_MS));
    }
    engine.stop();

    // 5. Summarize
    println!();
    for event in &all_events {
        println!(
            "{}  {:5}  {}  ({:+.1} m)",
            epoch_ms_to_utc(event.timestamp_ms),
            event.transition.to_string(),
            event.zone_id,
            event.boundary_distance_m,
        );
    }

    let rows: Vec<ZoneSummaryRow> = engine
        .zones()
        .iter()
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .map(|zone| {
            let enters = all_events
                .iter()
                .filter(|e| e.zone_id == zone.id && e.transition == TransitionKind::Enter)
                .count() as u64;
            let exits = all_events
                .iter()
                .filter(|e| e.zone_id == zone.id && e.transition == TransitionKind::Exit)
                .count() as u64;
            ZoneSummaryRow {
                id: zone.id.clone(),
                kind: zone.kind.to_string(),
                radius_m: format!("{:.0}", zone.radius_m),
                enters,
                exits,
            }
        })
        .collect();

    println!();
    println!("{}", Table::new(rows));
    println!(
        "\n{} ticks, {} events, {} fixes skipped",
        engine.tick_count(),
        all_events.len(),
        engine.skipped_fix_count()
    );

    Ok(())
}
