use crate::espn::{ScoreboardResponse, SummaryResponse};
use crate::nav::document;
use crate::store::{SnapshotStore, Slot};
use chrono::Local;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_NFL_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

/// Overrides the API base URL (a mirror, or a local fixture server).
pub const BASE_URL_ENV: &str = "NFLTUI_API_BASE";

/// NFL API client backed by ESPN's public site endpoints.
#[derive(Debug, Clone)]
pub struct NflApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NflApi {
    fn default() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| ESPN_NFL_SITE_V2.to_owned());
        Self {
            client: Client::builder()
                .user_agent("nfltui/0.1 (terminal scoreboard viewer)")
                .build()
                .unwrap_or_default(),
            base_url: normalize_base(&base_url),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl NflApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base(base_url.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scoreboard endpoint for an 8-digit `YYYYMMDD` date. The date is
    /// trimmed but otherwise passed through as given.
    pub fn scoreboard_url(&self, date: &str) -> String {
        format!("{}/scoreboard?dates={}", self.base_url, date.trim())
    }

    pub fn summary_url(&self, event_id: &str) -> String {
        format!("{}/summary?event={}", self.base_url, event_id.trim())
    }

    /// Fetch the scoreboard for `date` into the store's scoreboard slot. A
    /// failed fetch leaves the slot absent; callers find out by reading it.
    pub async fn fetch_scoreboard(&self, store: &SnapshotStore, date: &str) {
        let url = self.scoreboard_url(date);
        let result = self.get::<ScoreboardResponse>(&url).await;
        store.set_scoreboard(settle(Slot::Scoreboard, result));
    }

    /// Fetch one game's summary into the store's summary slot. A failed fetch
    /// leaves the slot absent.
    pub async fn fetch_summary(&self, store: &SnapshotStore, event_id: &str) {
        let url = self.summary_url(event_id);
        let result = self.get::<SummaryResponse>(&url).await;
        store.set_summary(settle(Slot::Summary, result));
    }

    async fn get<T: Default + DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?;

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))?;
        Ok(document(value))
    }
}

fn settle<T>(slot: Slot, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(doc) => {
            debug!("{} snapshot updated", slot.label());
            Some(doc)
        }
        Err(e) => {
            debug!("{} fetch failed, slot cleared: {e}", slot.label());
            None
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

/// Today's local date as the scoreboard's `YYYYMMDD` date token.
pub fn today_token() -> String {
    Local::now().format("%Y%m%d").to_string()
}
