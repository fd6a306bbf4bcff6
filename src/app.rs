use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::messages::NetworkRequest;
use nfl_api::{SnapshotStore, scoreboard};
use std::sync::Arc;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Scoreboard,
    Game,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings, store: Arc<SnapshotStore>) -> Self {
        let mut app = Self { state: AppState::new(store), settings };

        if let Some(event_id) = app.settings.event_id.clone() {
            app.state.game.open(event_id);
            app.state.active_tab = MenuItem::Game;
        }

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    fn event_ids(&self) -> Vec<String> {
        scoreboard::event_ids(&self.state.store.scoreboard())
    }

    // -----------------------------------------------------------------------
    // Network: what to fetch, and reactions to finished fetches
    // -----------------------------------------------------------------------

    /// Fetches that bring everything on screen up to date.
    pub fn refresh_requests(&self) -> Vec<NetworkRequest> {
        let mut requests = vec![NetworkRequest::FetchScoreboard { date: self.settings.date.clone() }];
        if let Some(event_id) = self.state.game.event_id.clone() {
            requests.push(NetworkRequest::FetchSummary { event_id });
        }
        requests
    }

    /// Called after the scoreboard slot changes. Returns a summary fetch when
    /// no game has been picked yet and the scoreboard offers one.
    pub fn on_scoreboard_updated(&mut self) -> Option<NetworkRequest> {
        let ids = self.event_ids();
        self.state.scoreboard.clamp(ids.len());
        if self.state.game.event_id.is_some() {
            return None;
        }
        let event_id = ids
            .get(self.state.scoreboard.selected_event)
            .filter(|id| !id.is_empty())?
            .clone();
        self.state.game.open(event_id.clone());
        Some(NetworkRequest::FetchSummary { event_id })
    }

    /// Open the highlighted scoreboard event in the Game tab.
    pub fn select_event(&mut self) -> Option<NetworkRequest> {
        let event_id = self.selected_event_id()?;
        self.state.game.open(event_id.clone());
        self.update_tab(MenuItem::Game);
        Some(NetworkRequest::FetchSummary { event_id })
    }

    pub fn selected_event_id(&self) -> Option<String> {
        self.event_ids()
            .into_iter()
            .nth(self.state.scoreboard.selected_event)
            .filter(|id| !id.is_empty())
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn event_down(&mut self) {
        let len = self.event_ids().len();
        self.state.scoreboard.navigate_down(len);
    }

    pub fn event_up(&mut self) {
        self.state.scoreboard.navigate_up();
    }

    pub fn scroll_down(&mut self) {
        self.state.game.scroll_offset = self.state.game.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.state.game.scroll_offset = self.state.game.scroll_offset.saturating_sub(1);
    }
}
