use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut requests = Vec::new();

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Scoreboard),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Game),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Scoreboard navigation
        (MenuItem::Scoreboard, Char('j') | KeyCode::Down, _) => guard.event_down(),
        (MenuItem::Scoreboard, Char('k') | KeyCode::Up, _) => guard.event_up(),
        (MenuItem::Scoreboard, KeyCode::Enter, _) => requests.extend(guard.select_event()),

        // Game navigation
        (MenuItem::Game, Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (MenuItem::Game, Char('k') | KeyCode::Up, _) => guard.scroll_up(),
        (MenuItem::Game, KeyCode::Esc, _) => guard.update_tab(MenuItem::Scoreboard),

        // Global
        (_, Char('r'), _) => requests = guard.refresh_requests(),
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    drop(guard);
    for request in requests {
        let _ = network_requests.send(request).await;
    }
}
