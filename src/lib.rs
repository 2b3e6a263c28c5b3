#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod notify;
pub mod utils;

// Re-export commonly used types outside of crate (for the bins)
pub use config::{MONITOR, MonitorConfig, PERSISTENCE};
pub use data::{PositionStreamManager, SqliteAlertLog, load_track, load_zones};
pub use engine::ZoneMonitorEngine;
pub use models::{GeoZone, PositionFix, TransitionKind, ZoneEvent, ZoneKind};
pub use notify::{LogNotifier, Notifier};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Zone definition file
    #[arg(long, default_value = config::PERSISTENCE.zone_file)]
    pub zones: PathBuf,

    /// Recorded track to replay through the monitor
    #[arg(long, default_value = config::PERSISTENCE.track_file)]
    pub track: PathBuf,

    /// Warning margin in meters (overrides the built-in default)
    #[arg(long)]
    pub warning_margin: Option<f64>,

    /// Replay speed multiplier; 0 replays as fast as possible
    #[arg(long, default_value_t = config::constants::replay::DEFAULT_SPEED)]
    pub speed: f64,

    /// Skip writing the sqlite alert history
    #[arg(long, default_value_t = false)]
    pub no_alert_log: bool,
}
