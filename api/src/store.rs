use crate::espn::{ScoreboardResponse, SummaryResponse};
use std::sync::{Arc, PoisonError, RwLock};

/// The two documents the store keeps a snapshot of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Scoreboard,
    Summary,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Scoreboard => "scoreboard",
            Slot::Summary => "summary",
        }
    }
}

/// One slot: the last fetched document, or `None` when nothing has been
/// fetched yet or the last fetch failed.
#[derive(Debug)]
struct SnapshotCell<T> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T> Default for SnapshotCell<T> {
    fn default() -> Self {
        Self { value: RwLock::new(None) }
    }
}

impl<T: Default> SnapshotCell<T> {
    fn set(&self, value: Option<T>) {
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        *guard = value.map(Arc::new);
    }

    fn get(&self) -> Option<Arc<T>> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn view(&self) -> Arc<T> {
        self.get().unwrap_or_default()
    }
}

/// Shared last-fetched snapshots of the scoreboard and the game summary.
///
/// Both slots start absent. Writers replace a slot wholesale; there is no
/// merging and no ordering between concurrent writers, so the fetch that
/// finishes last wins. Readers never block on a fetch and always get a
/// document: an absent slot reads as the empty document, which every
/// extractor maps to its neutral default.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    scoreboard: SnapshotCell<ScoreboardResponse>,
    summary: SnapshotCell<SummaryResponse>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scoreboard(&self, value: Option<ScoreboardResponse>) {
        self.scoreboard.set(value);
    }

    pub fn set_summary(&self, value: Option<SummaryResponse>) {
        self.summary.set(value);
    }

    pub fn scoreboard(&self) -> Arc<ScoreboardResponse> {
        self.scoreboard.view()
    }

    pub fn summary(&self) -> Arc<SummaryResponse> {
        self.summary.view()
    }

    pub fn is_present(&self, slot: Slot) -> bool {
        match slot {
            Slot::Scoreboard => self.scoreboard.get().is_some(),
            Slot::Summary => self.summary.get().is_some(),
        }
    }

    /// Reset both slots to absent.
    pub fn clear(&self) {
        self.scoreboard.set(None);
        self.summary.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{OptionalListExt, document};
    use serde_json::json;

    #[test]
    fn slots_start_absent_and_read_as_empty_documents() {
        let store = SnapshotStore::new();
        assert!(!store.is_present(Slot::Scoreboard));
        assert!(!store.is_present(Slot::Summary));
        assert!(store.scoreboard().events.is_none());
        assert!(store.summary().scoring_plays.is_none());
    }

    #[test]
    fn set_replaces_without_merging() {
        let store = SnapshotStore::new();
        store.set_scoreboard(Some(document(json!({ "events": [{ "id": "1" }, { "id": "2" }] }))));
        store.set_scoreboard(Some(document(json!({ "events": [{ "id": "3" }] }))));

        let board = store.scoreboard();
        let ids: Vec<_> = board.events.items().iter().filter_map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn setting_absent_drops_previous_document() {
        let store = SnapshotStore::new();
        store.set_summary(Some(document(json!({ "scoringPlays": [] }))));
        assert!(store.is_present(Slot::Summary));

        store.set_summary(None);
        assert!(!store.is_present(Slot::Summary));
        assert!(store.summary().scoring_plays.is_none());
    }

    #[test]
    fn snapshots_held_by_readers_survive_overwrite() {
        let store = SnapshotStore::new();
        store.set_scoreboard(Some(document(json!({ "events": [{ "id": "1" }] }))));
        let held = store.scoreboard();
        store.set_scoreboard(None);
        assert_eq!(held.events.items().len(), 1);
        assert!(store.scoreboard().events.is_none());
    }

    #[test]
    fn clear_resets_both_slots() {
        let store = SnapshotStore::new();
        store.set_scoreboard(Some(ScoreboardResponse::default()));
        store.set_summary(Some(SummaryResponse::default()));
        store.clear();
        assert!(!store.is_present(Slot::Scoreboard));
        assert!(!store.is_present(Slot::Summary));
    }
}
