use crate::app::MenuItem;
use nfl_api::SnapshotStore;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Scoreboard / game selection state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ScoreboardState {
    /// Highlighted row in the scoreboard list.
    pub selected_event: usize,
}

impl ScoreboardState {
    /// Keep the selection inside a list of `len` events.
    pub fn clamp(&mut self, len: usize) {
        self.selected_event = self.selected_event.min(len.saturating_sub(1));
    }

    pub fn navigate_down(&mut self, len: usize) {
        if self.selected_event + 1 < len {
            self.selected_event += 1;
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected_event = self.selected_event.saturating_sub(1);
    }
}

#[derive(Debug, Default)]
pub struct GameState {
    /// Event whose summary is requested; `None` until one is picked.
    pub event_id: Option<String>,
    /// Vertical scroll offset into the scoring plays list.
    pub scroll_offset: u16,
}

impl GameState {
    pub fn open(&mut self, event_id: String) {
        if self.event_id.as_deref() != Some(event_id.as_str()) {
            self.scroll_offset = 0;
        }
        self.event_id = Some(event_id);
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub store: Arc<SnapshotStore>,
    pub scoreboard: ScoreboardState,
    pub game: GameState,
}

impl AppState {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store, ..Self::default() }
    }
}
