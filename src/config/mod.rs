//! Configuration module for the zone monitor.

// Can all be private because we have a public re-export.
mod monitor;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use monitor::{MONITOR, MonitorConfig};
pub use persistence::{PERSISTENCE, alert_log_path};
