use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use nfl_api::Slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    FetchScoreboard { date: String },
    FetchSummary { event_id: String },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// A fetch finished and overwrote `slot`, successfully or not.
    SnapshotUpdated { slot: Slot },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    RefreshTick,
}
