use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Hazard severity of a geofenced area.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZoneKind {
    Restricted,
    Danger,
    HighRisk,
    AuthorizedOnly,
}

/// A circular geofenced area. Loaded once from configuration at monitor
/// start and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoZone {
    /// Stable zone identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional localized display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localized: Option<String>,
    pub kind: ZoneKind,
    /// Center latitude in degrees
    pub center_lat: f64,
    /// Center longitude in degrees
    pub center_lon: f64,
    /// Radius in meters
    pub radius_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Who to call when an alert fires (site office, safety officer, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl GeoZone {
    /// Minimal constructor for the common case; optional fields stay empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ZoneKind,
        center_lat: f64,
        center_lon: f64,
        radius_m: f64,
    ) -> Self {
        GeoZone {
            id: id.into(),
            name: name.into(),
            name_localized: None,
            kind,
            center_lat,
            center_lon,
            radius_m,
            description: None,
            contact: None,
        }
    }

    /// A zone definition the evaluator can trust: finite center, positive radius.
    pub fn is_well_formed(&self) -> bool {
        self.center_lat.is_finite() && self.center_lon.is_finite() && self.radius_m > 0.0
    }
}
