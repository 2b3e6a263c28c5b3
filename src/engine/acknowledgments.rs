use std::collections::HashSet;

/// Zone ids the user has dismissed for the current inside-episode.
///
/// Invariant (enforced by the engine): an id lives here only while the user
/// is continuously inside that zone; the exit edge clears it so a future
/// re-entry alerts again.
#[derive(Debug, Default)]
pub(crate) struct AckTracker {
    acked: HashSet<String>,
}

impl AckTracker {
    pub fn new() -> Self {
        AckTracker {
            acked: HashSet::new(),
        }
    }

    /// Returns false if the id was already acknowledged.
    pub fn acknowledge(&mut self, zone_id: &str) -> bool {
        self.acked.insert(zone_id.to_string())
    }

    pub fn is_acked(&self, zone_id: &str) -> bool {
        self.acked.contains(zone_id)
    }

    /// Exit-edge cleanup.
    pub fn clear(&mut self, zone_id: &str) {
        self.acked.remove(zone_id);
    }

    pub fn len(&self) -> usize {
        self.acked.len()
    }
}
