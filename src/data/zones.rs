use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::GeoZone;

/// Versioned zone definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneFile {
    pub version: u32,
    pub zones: Vec<GeoZone>,
}

impl ZoneFile {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(zones: Vec<GeoZone>) -> Self {
        ZoneFile {
            version: Self::CURRENT_VERSION,
            zones,
        }
    }
}

/// Load and validate the zone set the monitor will run against.
///
/// Validation happens here so the evaluator hot path never has to re-check:
/// non-finite centers, non-positive radii and duplicate ids are all rejected
/// at startup.
pub fn load_zones(path: &Path) -> Result<Vec<GeoZone>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read zone file {:?}", path))?;

    let file: ZoneFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse zone file {:?}", path))?;

    if file.version != ZoneFile::CURRENT_VERSION {
        bail!(
            "Unsupported zone file version {} (expected {})",
            file.version,
            ZoneFile::CURRENT_VERSION
        );
    }

    validate_zones(&file.zones)?;

    log::info!("Loaded {} zones from {:?}", file.zones.len(), path);
    Ok(file.zones)
}

pub fn save_zones(path: &Path, zones: &[GeoZone]) -> Result<()> {
    let file = ZoneFile::new(zones.to_vec());
    let json = serde_json::to_string_pretty(&file)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write zone file {:?}", path))
}

fn validate_zones(zones: &[GeoZone]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for zone in zones {
        if !zone.is_well_formed() {
            bail!(
                "Zone '{}' is malformed (center {}, {} / radius {} m)",
                zone.id,
                zone.center_lat,
                zone.center_lon,
                zone.radius_m
            );
        }
        if !seen.insert(zone.id.as_str()) {
            bail!("Duplicate zone id '{}'", zone.id);
        }
    }
    Ok(())
}
