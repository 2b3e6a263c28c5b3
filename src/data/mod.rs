pub mod alert_log;
mod position_stream;
mod zones;

pub use {
    position_stream::{PositionStreamManager, load_track, save_track},
    zones::{ZoneFile, load_zones, save_zones},
};

pub use alert_log::{AlertLog, SqliteAlertLog};
