use crate::models::{GeoZone, PositionFix, ZoneEvaluation};
use crate::utils::geo::boundary_distance_m;

/// Classify every zone against the current fix.
///
/// Returns only zones within the inside-or-warning band; everything further
/// out is omitted so the per-tick output stays bounded no matter how large
/// the zone list is. The caller guarantees the fix has finite coordinates.
pub(crate) fn evaluate_zones(
    zones: &[GeoZone],
    fix: &PositionFix,
    warning_margin_m: f64,
) -> Vec<ZoneEvaluation> {
    let mut evaluations = Vec::new();

    for zone in zones {
        let distance = boundary_distance_m(
            fix.latitude,
            fix.longitude,
            zone.center_lat,
            zone.center_lon,
            zone.radius_m,
        );

        // Both bounds inclusive: sitting exactly on the boundary is inside,
        // sitting exactly on the margin line is nearby.
        if distance <= warning_margin_m {
            evaluations.push(ZoneEvaluation {
                zone_id: zone.id.clone(),
                zone_kind: zone.kind,
                boundary_distance_m: distance,
                is_inside: distance <= 0.0,
                timestamp_ms: fix.timestamp_ms,
            });
        }
    }

    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZoneKind;

    fn zone_at(id: &str, lat: f64, lon: f64, radius_m: f64) -> GeoZone {
        GeoZone::new(id, id, ZoneKind::Restricted, lat, lon, radius_m)
    }

    #[test]
    fn test_empty_zone_list_yields_empty_set() {
        let fix = PositionFix::new(24.0, 54.0, 0);
        assert!(evaluate_zones(&[], &fix, 50.0).is_empty());
    }

    #[test]
    fn test_far_zone_is_omitted() {
        // ~1.1 km away from a 100 m zone: outside the 50 m warning band
        let zones = [zone_at("z1", 24.01, 54.0, 100.0)];
        let fix = PositionFix::new(24.0, 54.0, 0);
        assert!(evaluate_zones(&zones, &fix, 50.0).is_empty());
    }

    #[test]
    fn test_nearby_band_classification() {
        // ~133 m from center of a 100 m zone: +33 m, inside the 50 m band
        let zones = [zone_at("z1", 24.0012, 54.0, 100.0)];
        let fix = PositionFix::new(24.0, 54.0, 7);

        let evals = evaluate_zones(&zones, &fix, 50.0);
        assert_eq!(evals.len(), 1);
        let e = &evals[0];
        assert!(!e.is_inside);
        assert!(e.is_nearby_only());
        assert!(e.boundary_distance_m > 0.0 && e.boundary_distance_m <= 50.0);
        assert_eq!(e.timestamp_ms, 7);
    }

    #[test]
    fn test_inside_classification() {
        // ~67 m from center of a 100 m zone: ~-33 m, inside
        let zones = [zone_at("z1", 24.0006, 54.0, 100.0)];
        let fix = PositionFix::new(24.0, 54.0, 0);

        let evals = evaluate_zones(&zones, &fix, 50.0);
        assert_eq!(evals.len(), 1);
        assert!(evals[0].is_inside);
        assert!((evals[0].boundary_distance_m + 33.3).abs() < 0.5);
    }

    #[test]
    fn test_inside_implies_in_result_set_for_any_margin() {
        // Inside must survive even a zero warning margin
        let zones = [zone_at("z1", 24.0, 54.0, 100.0)];
        let fix = PositionFix::new(24.0, 54.0, 0);

        let evals = evaluate_zones(&zones, &fix, 0.0);
        assert_eq!(evals.len(), 1);
        assert!(evals[0].is_inside);
    }

    #[test]
    fn test_multiple_zones_partitioned() {
        let zones = [
            zone_at("inside", 24.0, 54.0, 100.0),
            zone_at("nearby", 24.0012, 54.0, 100.0),
            zone_at("clear", 24.1, 54.0, 100.0),
        ];
        let fix = PositionFix::new(24.0, 54.0, 0);

        let evals = evaluate_zones(&zones, &fix, 50.0);
        assert_eq!(evals.len(), 2);
        assert!(evals.iter().any(|e| e.zone_id == "inside" && e.is_inside));
        assert!(evals.iter().any(|e| e.zone_id == "nearby" && !e.is_inside));
    }
}
