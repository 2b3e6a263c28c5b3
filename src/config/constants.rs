// Top Level Constants

/// Mean Earth radius used by the haversine distance (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Extra distance beyond a zone boundary inside which a pre-entry
/// "nearby" warning is surfaced (meters).
pub const DEFAULT_WARNING_MARGIN_M: f64 = 50.0;

pub mod engine {
    /// A single tick (drain + evaluate + transitions) above this budget gets
    /// a warn log. Evaluation is a handful of haversines, so anything slower
    /// points at a misbehaving notifier or archive hook.
    pub const SLOW_TICK_WARN_US: u128 = 100_000;
}

pub mod replay {
    /// Default playback speed multiplier. 0.0 means "no sleeping between
    /// fixes" (replay as fast as the engine drains them).
    pub const DEFAULT_SPEED: f64 = 0.0;

    /// Engine polling cadence while a replay is running.
    pub const DRAIN_INTERVAL_MS: u64 = 10;
}
