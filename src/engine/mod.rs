mod acknowledgments;
mod core;
mod evaluator;
mod transitions;

pub use self::core::ZoneMonitorEngine;
