use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, warn};
use nfl_api::{NflApi, SnapshotStore, Slot};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Runs fetches against the shared snapshot store.
///
/// Every request gets its own task and nothing orders them: two fetches for
/// the same slot race, and whichever finishes last owns the slot.
pub struct NetworkWorker {
    client: NflApi,
    store: Arc<SnapshotStore>,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
}

impl NetworkWorker {
    pub fn new(
        store: Arc<SnapshotStore>,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: NflApi::new(),
            store,
            requests,
            responses,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
                self.start_loading_animation().await;
            }

            let client = self.client.clone();
            let store = self.store.clone();
            let responses = self.responses.clone();
            let in_flight = self.in_flight.clone();

            tokio::spawn(async move {
                let slot = fetch(&client, &store, request).await;
                let present = store.is_present(slot);
                if !present {
                    warn!("{} unavailable", slot.label());
                }

                if in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                    stop_loading_animation(&responses, present).await;
                }

                if let Err(e) = responses.send(NetworkResponse::SnapshotUpdated { slot }).await {
                    error!("Failed to send network response: {e}");
                }
            });
        }
    }

    async fn start_loading_animation(&self) {
        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let in_flight = self.in_flight.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if in_flight.load(Ordering::SeqCst) == 0 {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }
}

async fn fetch(client: &NflApi, store: &SnapshotStore, request: NetworkRequest) -> Slot {
    match request {
        NetworkRequest::FetchScoreboard { date } => {
            debug!("fetching scoreboard for {date}");
            client.fetch_scoreboard(store, &date).await;
            Slot::Scoreboard
        }
        NetworkRequest::FetchSummary { event_id } => {
            debug!("fetching summary for event {event_id}");
            client.fetch_summary(store, &event_id).await;
            Slot::Summary
        }
    }
}

async fn stop_loading_animation(responses: &mpsc::Sender<NetworkResponse>, is_ok: bool) {
    tokio::time::sleep(Duration::from_millis(15)).await;

    let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged {
            loading_state: LoadingState { is_loading: false, spinner_char },
        })
        .await;
}
