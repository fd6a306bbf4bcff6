//! Per-event facts from the league scoreboard. Every accessor returns one
//! entry per event, in document order; a malformed event only affects its
//! own entry.
use crate::espn::{EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::nav::{OptionalListExt, resolve};

pub const UNKNOWN_MATCHUP: &str = "Unknown matchup";

fn per_event(board: &ScoreboardResponse, row: impl Fn(&EspnEvent) -> String) -> Vec<String> {
    board.events.items().iter().map(row).collect()
}

/// The away and home competitors of the event's first competition.
fn away_home(event: &EspnEvent) -> Option<(&EspnCompetitor, &EspnCompetitor)> {
    let competitors = &event.competitions.first_item()?.competitors;
    let away = competitors.find_item(|c| c.home_away.as_deref() == Some("away"))?;
    let home = competitors.find_item(|c| c.home_away.as_deref() == Some("home"))?;
    Some((away, home))
}

fn short_name(competitor: &EspnCompetitor) -> Option<&str> {
    competitor.team.as_ref()?.short_display_name.as_deref()
}

/// `"{away} @ {home}"` by team short name.
pub fn matchups(board: &ScoreboardResponse) -> Vec<String> {
    per_event(board, |event| {
        resolve(
            event,
            |e| {
                let (away, home) = away_home(e)?;
                Some(format!("{} @ {}", short_name(away)?, short_name(home)?))
            },
            UNKNOWN_MATCHUP.to_owned(),
        )
    })
}

/// `"{away score} - {home score}"`.
pub fn scores(board: &ScoreboardResponse) -> Vec<String> {
    per_event(board, |event| {
        resolve(
            event,
            |e| {
                let (away, home) = away_home(e)?;
                Some(format!("{} - {}", away.score.as_deref()?, home.score.as_deref()?))
            },
            String::new(),
        )
    })
}

/// Game state (`pre`, `in`, `post`).
pub fn states(board: &ScoreboardResponse) -> Vec<String> {
    per_event(board, |event| {
        resolve(
            event,
            |e| e.status.as_ref()?.status_type.as_ref()?.state.as_deref(),
            "",
        )
        .to_owned()
    })
}

pub fn kickoff_times(board: &ScoreboardResponse) -> Vec<String> {
    per_event(board, |event| event.date.clone().unwrap_or_default())
}

pub fn event_ids(board: &ScoreboardResponse) -> Vec<String> {
    per_event(board, |event| event.id.clone().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::document;
    use serde_json::{Value, json};

    fn competitor(side: &str, name: &str, score: Value) -> Value {
        json!({
            "homeAway": side,
            "team": { "displayName": format!("{name} Full"), "shortDisplayName": name },
            "score": score,
        })
    }

    fn event(id: &str, away: Value, home: Value, state: &str) -> Value {
        json!({
            "id": id,
            "date": "2026-01-11T18:00Z",
            "status": { "type": { "state": state } },
            "competitions": [{ "competitors": [home, away] }],
        })
    }

    fn board() -> ScoreboardResponse {
        document(json!({
            "events": [
                event("401", competitor("away", "Bills", json!("24")), competitor("home", "Chiefs", json!("27")), "post"),
                { "id": "402", "competitions": "broken" },
                event("403", competitor("away", "Rams", json!(7)), competitor("home", "Eagles", json!(10)), "in"),
            ]
        }))
    }

    #[test]
    fn empty_scoreboard_yields_empty_lists() {
        let empty = ScoreboardResponse::default();
        assert!(matchups(&empty).is_empty());
        assert!(scores(&empty).is_empty());
        assert!(states(&empty).is_empty());
        assert!(kickoff_times(&empty).is_empty());
        assert!(event_ids(&empty).is_empty());
    }

    #[test]
    fn matchups_isolate_bad_events() {
        assert_eq!(
            matchups(&board()),
            vec!["Bills @ Chiefs", UNKNOWN_MATCHUP, "Rams @ Eagles"]
        );
    }

    #[test]
    fn scores_read_strings_and_numbers() {
        assert_eq!(scores(&board()), vec!["24 - 27", "", "7 - 10"]);
    }

    #[test]
    fn direct_reads_default_to_empty() {
        let board = board();
        assert_eq!(states(&board), vec!["post", "", "in"]);
        assert_eq!(event_ids(&board), vec!["401", "402", "403"]);
        assert_eq!(
            kickoff_times(&board),
            vec!["2026-01-11T18:00Z", "", "2026-01-11T18:00Z"]
        );
    }

    #[test]
    fn every_list_has_one_entry_per_event() {
        let board: ScoreboardResponse = document(json!({ "events": [null, 5, {}, { "id": 9 }] }));
        for list in [
            matchups(&board),
            scores(&board),
            states(&board),
            kickoff_times(&board),
            event_ids(&board),
        ] {
            assert_eq!(list.len(), 4);
        }
        assert_eq!(event_ids(&board), vec!["", "", "", "9"]);
    }

    #[test]
    fn missing_side_is_unknown_matchup() {
        let board: ScoreboardResponse = document(json!({
            "events": [event("1", competitor("home", "Jets", json!("3")), competitor("home", "Giants", json!("0")), "pre")]
        }));
        assert_eq!(matchups(&board), vec![UNKNOWN_MATCHUP]);
        assert_eq!(scores(&board), vec![""]);
    }

    #[test]
    fn missing_score_blanks_only_that_event() {
        let board: ScoreboardResponse = document(json!({
            "events": [
                event("1", json!({ "homeAway": "away", "team": { "shortDisplayName": "Bears" } }), competitor("home", "Lions", json!("14")), "pre"),
                event("2", competitor("away", "Colts", json!("3")), competitor("home", "Texans", json!("6")), "in"),
            ]
        }));
        assert_eq!(scores(&board), vec!["", "3 - 6"]);
        assert_eq!(matchups(&board), vec!["Bears @ Lions", "Colts @ Texans"]);
    }
}
