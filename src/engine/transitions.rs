use std::collections::HashMap;

use crate::models::{TransitionKind, ZoneEvaluation};

/// Compare the previous tick's evaluations with the current tick's and name
/// the zones that crossed a boundary edge.
///
/// Enter: present-and-inside now, not present-and-inside before.
/// Exit: present-and-inside before, absent or no-longer-inside now.
///
/// Exits come first so acknowledgment cleanup happens before any enter is
/// surfaced on the same tick. Each group is ordered by zone id to keep event
/// streams deterministic.
pub(crate) fn detect_transitions(
    previous: &HashMap<String, ZoneEvaluation>,
    current: &HashMap<String, ZoneEvaluation>,
) -> Vec<(String, TransitionKind)> {
    let mut exits: Vec<String> = previous
        .values()
        .filter(|p| p.is_inside)
        .filter(|p| !current.get(&p.zone_id).map(|c| c.is_inside).unwrap_or(false))
        .map(|p| p.zone_id.clone())
        .collect();
    exits.sort();

    let mut enters: Vec<String> = current
        .values()
        .filter(|c| c.is_inside)
        .filter(|c| !previous.get(&c.zone_id).map(|p| p.is_inside).unwrap_or(false))
        .map(|c| c.zone_id.clone())
        .collect();
    enters.sort();

    let mut transitions = Vec::with_capacity(exits.len() + enters.len());
    transitions.extend(exits.into_iter().map(|id| (id, TransitionKind::Exit)));
    transitions.extend(enters.into_iter().map(|id| (id, TransitionKind::Enter)));
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZoneKind;

    fn eval(id: &str, inside: bool) -> (String, ZoneEvaluation) {
        (
            id.to_string(),
            ZoneEvaluation {
                zone_id: id.to_string(),
                zone_kind: ZoneKind::Danger,
                boundary_distance_m: if inside { -10.0 } else { 10.0 },
                is_inside: inside,
                timestamp_ms: 0,
            },
        )
    }

    fn set(entries: &[(&str, bool)]) -> HashMap<String, ZoneEvaluation> {
        entries.iter().map(|(id, inside)| eval(id, *inside)).collect()
    }

    #[test]
    fn test_fresh_inside_is_enter() {
        let transitions = detect_transitions(&set(&[]), &set(&[("z1", true)]));
        assert_eq!(transitions, vec![("z1".to_string(), TransitionKind::Enter)]);
    }

    #[test]
    fn test_nearby_to_inside_is_enter() {
        let transitions = detect_transitions(&set(&[("z1", false)]), &set(&[("z1", true)]));
        assert_eq!(transitions, vec![("z1".to_string(), TransitionKind::Enter)]);
    }

    #[test]
    fn test_continuously_inside_is_silent() {
        let transitions = detect_transitions(&set(&[("z1", true)]), &set(&[("z1", true)]));
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_inside_to_nearby_is_exit() {
        let transitions = detect_transitions(&set(&[("z1", true)]), &set(&[("z1", false)]));
        assert_eq!(transitions, vec![("z1".to_string(), TransitionKind::Exit)]);
    }

    #[test]
    fn test_inside_to_absent_is_exit() {
        let transitions = detect_transitions(&set(&[("z1", true)]), &set(&[]));
        assert_eq!(transitions, vec![("z1".to_string(), TransitionKind::Exit)]);
    }

    #[test]
    fn test_nearby_only_churn_is_silent() {
        // Lingering in the warning band produces no edges in either direction
        let transitions = detect_transitions(&set(&[("z1", false)]), &set(&[]));
        assert!(transitions.is_empty());
        let transitions = detect_transitions(&set(&[]), &set(&[("z1", false)]));
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_exits_ordered_before_enters() {
        let prev = set(&[("a", true)]);
        let curr = set(&[("b", true)]);
        let transitions = detect_transitions(&prev, &curr);
        assert_eq!(
            transitions,
            vec![
                ("a".to_string(), TransitionKind::Exit),
                ("b".to_string(), TransitionKind::Enter),
            ]
        );
    }
}
