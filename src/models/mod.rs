mod evaluation;
mod events;
mod position;
mod zone;

pub use {
    evaluation::ZoneEvaluation,
    events::{AlertRecord, TransitionKind, ZoneEvent},
    position::PositionFix,
    zone::{GeoZone, ZoneKind},
};
