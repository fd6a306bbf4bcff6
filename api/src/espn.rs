/// ESPN API raw wire types: serde shapes for deserializing ESPN responses.
/// Every field is optional and read through the `nav::lenient` adapters, so
/// a document that drifts from this shape still deserializes; the drifted
/// parts simply read as absent.
use crate::nav::lenient;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    #[serde(default, rename = "displayName", deserialize_with = "lenient::text")]
    pub display_name: Option<String>,
    #[serde(default, rename = "shortDisplayName", deserialize_with = "lenient::text")]
    pub short_display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(default, rename = "type", deserialize_with = "lenient::node")]
    pub status_type: Option<EspnStatusType>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub period: Option<i64>,
    #[serde(default, rename = "displayClock", deserialize_with = "lenient::text")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    #[serde(default, deserialize_with = "lenient::text")]
    pub state: Option<String>, // "pre" | "in" | "post"
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub competitors: Option<Vec<EspnCompetitor>>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    #[serde(default, rename = "homeAway", deserialize_with = "lenient::text")]
    pub home_away: Option<String>, // "home" | "away"
    #[serde(default, deserialize_with = "lenient::node")]
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub score: Option<String>,
    #[serde(default, rename = "isRedZone", deserialize_with = "lenient::opt")]
    pub is_red_zone: Option<bool>,
}

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>, // ISO 8601
    #[serde(default, deserialize_with = "lenient::node")]
    pub status: Option<EspnStatus>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub competitions: Option<Vec<EspnCompetition>>,
}

// ---------------------------------------------------------------------------
// Game summary  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummaryResponse {
    #[serde(default, deserialize_with = "lenient::node")]
    pub header: Option<EspnHeader>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub boxscore: Option<EspnBoxscore>,
    #[serde(default, rename = "gameInfo", deserialize_with = "lenient::node")]
    pub game_info: Option<EspnGameInfo>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub drives: Option<EspnDrives>,
    #[serde(default, rename = "scoringPlays", deserialize_with = "lenient::seq")]
    pub scoring_plays: Option<Vec<EspnScoringPlay>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnHeader {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnBoxscore {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub teams: Option<Vec<EspnTeamStats>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamStats {
    #[serde(default, deserialize_with = "lenient::node")]
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub statistics: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStat {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub abbreviation: Option<String>,
    #[serde(default, rename = "displayValue", deserialize_with = "lenient::text")]
    pub display_value: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnGameInfo {
    #[serde(default, deserialize_with = "lenient::node")]
    pub venue: Option<EspnVenue>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub attendance: Option<String>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub weather: Option<EspnWeather>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub officials: Option<Vec<EspnOfficial>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnVenue {
    #[serde(default, rename = "fullName", deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub address: Option<EspnAddress>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnAddress {
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnWeather {
    #[serde(default, deserialize_with = "lenient::text")]
    pub temperature: Option<String>,
    #[serde(default, rename = "displayValue", deserialize_with = "lenient::text")]
    pub display_value: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnOfficial {
    #[serde(default, rename = "displayName", deserialize_with = "lenient::text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub position: Option<EspnPosition>,
    #[serde(default, rename = "positionName", deserialize_with = "lenient::text")]
    pub position_name: Option<String>,
}

/// Officials' positions arrive either as a bare label or as a position object.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnPosition {
    Label(String),
    Detail {
        #[serde(default, rename = "displayName")]
        display_name: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl EspnPosition {
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            EspnPosition::Label(label) => Some(label.as_str()),
            EspnPosition::Detail { display_name, name } => {
                display_name.as_deref().or(name.as_deref())
            }
        };
        label.filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnDrives {
    #[serde(default, deserialize_with = "lenient::node")]
    pub current: Option<EspnDrive>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnDrive {
    #[serde(default, rename = "isRedZone", deserialize_with = "lenient::opt")]
    pub is_red_zone: Option<bool>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub team: Option<EspnTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnScoringPlay {
    #[serde(default, deserialize_with = "lenient::opt")]
    pub period: Option<EspnPeriod>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub clock: Option<EspnClock>,
    #[serde(default, deserialize_with = "lenient::node")]
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub participants: Option<Vec<EspnParticipant>>,
}

/// Scoring plays carry the period as a bare number or as `{ "number": n }`.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnPeriod {
    Number(i64),
    Detail {
        #[serde(default)]
        number: Option<i64>,
    },
}

impl EspnPeriod {
    pub fn number(&self) -> Option<i64> {
        match self {
            EspnPeriod::Number(n) => Some(*n),
            EspnPeriod::Detail { number } => *number,
        }
    }
}

/// Scoring plays carry the clock as a bare string or as `{ "displayValue": s }`.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnClock {
    Display(String),
    Detail {
        #[serde(default, rename = "displayValue")]
        display_value: Option<String>,
    },
}

impl EspnClock {
    pub fn display(&self) -> Option<&str> {
        match self {
            EspnClock::Display(clock) => Some(clock.as_str()),
            EspnClock::Detail { display_value } => display_value.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnParticipant {
    #[serde(default, deserialize_with = "lenient::node")]
    pub athlete: Option<EspnAthlete>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnAthlete {
    #[serde(default, rename = "displayName", deserialize_with = "lenient::text")]
    pub display_name: Option<String>,
    #[serde(default, rename = "shortName", deserialize_with = "lenient::text")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub jersey: Option<String>,
}
