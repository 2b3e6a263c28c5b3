//! File persistence configuration

/// Configuration for the alert history database
pub struct AlertLogConfig {
    /// Directory path for monitor data files
    pub directory: &'static str,
    /// Filename of the sqlite alert history
    pub filename: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub alert_log: AlertLogConfig,
    /// Default zone definition file consumed at monitor start
    pub zone_file: &'static str,
    /// Default recorded track for replay runs
    pub track_file: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    alert_log: AlertLogConfig {
        directory: "zone_data",
        filename: "alerts.sqlite",
    },
    zone_file: "zone_data/zones.json",
    track_file: "zone_data/demo_track.json",
};

/// Full path of the alert history database.
/// Example: "zone_data/alerts.sqlite"
pub fn alert_log_path() -> String {
    format!(
        "{}/{}",
        PERSISTENCE.alert_log.directory, PERSISTENCE.alert_log.filename
    )
}
