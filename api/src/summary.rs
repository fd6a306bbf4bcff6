//! Facts about one game, read from the game summary document.
use crate::espn::{EspnScoringPlay, EspnStatus, EspnTeam, SummaryResponse};
use crate::format;
use crate::nav::{OptionalListExt, OptionalTextExt, resolve};
use crate::{ScoringPlay, TeamStat};

/// Stands in for a team without a short display name.
pub const DEFAULT_TEAM: &str = "Team";
/// Stands in for an official without a display name.
pub const DEFAULT_OFFICIAL: &str = "Official";

fn header_status(summary: &SummaryResponse) -> Option<&EspnStatus> {
    summary
        .header
        .as_ref()?
        .competitions
        .first_item()?
        .status
        .as_ref()
}

fn team_name(team: Option<&EspnTeam>) -> Option<&str> {
    team?.short_display_name.present()
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// `"1ST QUARTER"` … `"4TH QUARTER"`, `"OT"` past regulation, and `""` when
/// the game status can't be read.
pub fn quarter(summary: &SummaryResponse) -> String {
    resolve(summary, |s| header_status(s).map(|st| format::period_label(st.period)), "").to_owned()
}

pub fn clock(summary: &SummaryResponse) -> String {
    resolve(summary, |s| header_status(s)?.display_clock.present(), "").to_owned()
}

/// Game state (`pre`, `in`, `post`).
pub fn status(summary: &SummaryResponse) -> String {
    resolve(
        summary,
        |s| header_status(s)?.status_type.as_ref()?.state.present(),
        "",
    )
    .to_owned()
}

// ---------------------------------------------------------------------------
// Team stats
// ---------------------------------------------------------------------------

/// `"{team}: {value}"` for every box-score team, in document order. The
/// first statistic whose name or abbreviation matches wins; `?` marks a team
/// without one.
pub fn team_stat(summary: &SummaryResponse, stat: TeamStat) -> Vec<String> {
    let teams = summary.boxscore.as_ref().map(|b| b.teams.items()).unwrap_or_default();
    teams
        .iter()
        .map(|team| {
            let name = team_name(team.team.as_ref()).unwrap_or(DEFAULT_TEAM);
            let value = team
                .statistics
                .find_item(|s| {
                    s.name.as_deref() == Some(stat.key())
                        || s.abbreviation.as_deref() == Some(stat.abbreviation())
                })
                .and_then(|s| s.display_value.as_deref());
            format::stat_line(name, value)
        })
        .collect()
}

pub fn total_yards(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::TotalYards)
}

pub fn passing_yards(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::PassingYards)
}

pub fn rushing_yards(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::RushingYards)
}

pub fn first_downs(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::FirstDowns)
}

pub fn third_down_efficiency(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::ThirdDownEfficiency)
}

pub fn turnovers(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::Turnovers)
}

pub fn time_of_possession(summary: &SummaryResponse) -> Vec<String> {
    team_stat(summary, TeamStat::TimeOfPossession)
}

// ---------------------------------------------------------------------------
// Game info
// ---------------------------------------------------------------------------

pub fn venue(summary: &SummaryResponse) -> String {
    let Some(venue) = summary.game_info.as_ref().and_then(|g| g.venue.as_ref()) else {
        return String::new();
    };
    let name = venue.full_name.present().or(venue.name.present()).unwrap_or_default();
    let address = venue.address.as_ref();
    format::venue_text(
        name,
        address.and_then(|a| a.city.present()),
        address.and_then(|a| a.state.present()),
    )
}

/// `"Attendance: {n}"`, or `""` when unreported or zero.
pub fn attendance(summary: &SummaryResponse) -> String {
    let attendance = resolve(summary, |s| s.game_info.as_ref()?.attendance.present(), "");
    let zero = attendance.parse::<f64>().is_ok_and(|n| n == 0.0);
    if attendance.is_empty() || zero {
        String::new()
    } else {
        format!("Attendance: {attendance}")
    }
}

pub fn weather(summary: &SummaryResponse) -> String {
    let Some(weather) = summary.game_info.as_ref().and_then(|g| g.weather.as_ref()) else {
        return String::new();
    };
    let condition = weather.display_value.present().or(weather.description.present());
    format::weather_text(weather.temperature.as_deref(), condition)
}

/// `"{name} ({position})"` per official.
pub fn officials(summary: &SummaryResponse) -> Vec<String> {
    let officials = summary.game_info.as_ref().map(|g| g.officials.items()).unwrap_or_default();
    officials
        .iter()
        .map(|official| {
            let name = official.display_name.present().unwrap_or(DEFAULT_OFFICIAL);
            let position = official
                .position
                .as_ref()
                .and_then(|p| p.label())
                .or(official.position_name.present());
            format::official_text(name, position)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Red zone
// ---------------------------------------------------------------------------

/// `"{team} in red zone"`. The current drive is authoritative; the header's
/// competitor flags are consulted only when the drive doesn't name a red-zone
/// team.
pub fn red_zone_status(summary: &SummaryResponse) -> String {
    let from_drive = resolve(
        summary,
        |s| {
            let drive = s.drives.as_ref()?.current.as_ref()?;
            if drive.is_red_zone != Some(true) {
                return None;
            }
            team_name(drive.team.as_ref())
        },
        "",
    );
    if !from_drive.is_empty() {
        return format!("{from_drive} in red zone");
    }

    let from_header = resolve(
        summary,
        |s| {
            let competitors = &s.header.as_ref()?.competitions.first_item()?.competitors;
            let flagged = competitors.find_item(|c| c.is_red_zone == Some(true))?;
            team_name(flagged.team.as_ref())
        },
        "",
    );
    if from_header.is_empty() {
        String::new()
    } else {
        format!("{from_header} in red zone")
    }
}

// ---------------------------------------------------------------------------
// Scoring plays
// ---------------------------------------------------------------------------

pub fn scoring_plays(summary: &SummaryResponse) -> Vec<ScoringPlay> {
    summary.scoring_plays.items().iter().map(scoring_play).collect()
}

fn scoring_play(play: &EspnScoringPlay) -> ScoringPlay {
    let quarter = format::period_label(play.period.as_ref().and_then(|p| p.number()));
    let clock = play.clock.as_ref().and_then(|c| c.display()).unwrap_or_default();
    let team = team_name(play.team.as_ref()).unwrap_or(DEFAULT_TEAM);
    let base = play.text.present().or(play.description.present()).unwrap_or_default();

    let players: Vec<String> = play
        .participants
        .items()
        .iter()
        .filter_map(|participant| {
            let athlete = participant.athlete.as_ref()?;
            let name = athlete.display_name.present().or(athlete.short_name.present())?;
            Some(format::player_tag(name, athlete.jersey.present()))
        })
        .collect();

    ScoringPlay {
        quarter: quarter.to_owned(),
        clock: clock.to_owned(),
        description: format::play_description(team, base, &format::player_text(&players)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::document;
    use serde_json::{Value, json};

    fn summary(value: Value) -> SummaryResponse {
        document(value)
    }

    fn with_period(period: Value) -> SummaryResponse {
        summary(json!({
            "header": { "competitions": [{ "status": {
                "period": period,
                "displayClock": "8:42",
                "type": { "state": "in" }
            }}]}
        }))
    }

    fn boxscore(statistics: Value) -> SummaryResponse {
        summary(json!({
            "boxscore": { "teams": [
                { "team": { "shortDisplayName": "Bills" }, "statistics": statistics },
                { "team": {}, "statistics": [] },
            ]}
        }))
    }

    fn play(participants: Value) -> SummaryResponse {
        summary(json!({
            "scoringPlays": [{
                "period": { "number": 2 },
                "clock": { "displayValue": "4:10" },
                "team": { "shortDisplayName": "Chiefs" },
                "text": "Touchdown",
                "participants": participants,
            }]
        }))
    }

    #[test]
    fn absent_summary_yields_defaults() {
        let empty = SummaryResponse::default();
        assert_eq!(quarter(&empty), "");
        assert_eq!(clock(&empty), "");
        assert_eq!(status(&empty), "");
        for stat in TeamStat::ALL {
            assert!(team_stat(&empty, stat).is_empty());
        }
        assert_eq!(venue(&empty), "");
        assert_eq!(attendance(&empty), "");
        assert_eq!(weather(&empty), "");
        assert!(officials(&empty).is_empty());
        assert_eq!(red_zone_status(&empty), "");
        assert!(scoring_plays(&empty).is_empty());
    }

    #[test]
    fn quarter_maps_period() {
        assert_eq!(quarter(&with_period(json!(1))), "1ST QUARTER");
        assert_eq!(quarter(&with_period(json!(2))), "2ND QUARTER");
        assert_eq!(quarter(&with_period(json!(3))), "3RD QUARTER");
        assert_eq!(quarter(&with_period(json!(4))), "4TH QUARTER");
        assert_eq!(quarter(&with_period(json!(5))), "OT");
        assert_eq!(quarter(&with_period(json!(9))), "OT");
    }

    #[test]
    fn quarter_is_empty_without_status() {
        let no_status = summary(json!({ "header": { "competitions": [{}] } }));
        assert_eq!(quarter(&no_status), "");
        let bad_header = summary(json!({ "header": { "competitions": "nope" } }));
        assert_eq!(quarter(&bad_header), "");
    }

    #[test]
    fn clock_and_status_read_header() {
        let s = with_period(json!(3));
        assert_eq!(clock(&s), "8:42");
        assert_eq!(status(&s), "in");
    }

    #[test]
    fn team_stat_matches_name() {
        let s = boxscore(json!([{ "name": "netPassingYards", "displayValue": "245" }]));
        assert_eq!(passing_yards(&s), vec!["Bills: 245", "Team: ?"]);
    }

    #[test]
    fn team_stat_matches_abbreviation() {
        let s = boxscore(json!([
            { "name": "somethingElse", "abbreviation": "X", "displayValue": "1" },
            { "abbreviation": "TOP", "displayValue": "32:10" },
        ]));
        assert_eq!(time_of_possession(&s), vec!["Bills: 32:10", "Team: ?"]);
    }

    #[test]
    fn team_stat_first_matching_entry_wins() {
        let s = boxscore(json!([
            { "abbreviation": "TO", "displayValue": "2" },
            { "name": "turnovers", "displayValue": "3" },
        ]));
        assert_eq!(turnovers(&s), vec!["Bills: 2", "Team: ?"]);
    }

    #[test]
    fn team_stat_without_display_value_is_placeholder() {
        let s = boxscore(json!([{ "name": "firstDowns" }]));
        assert_eq!(first_downs(&s), vec!["Bills: ?", "Team: ?"]);
    }

    #[test]
    fn every_named_stat_accessor_reads_its_key() {
        let s = boxscore(json!([
            { "name": "totalYards", "displayValue": "390" },
            { "name": "netPassingYards", "displayValue": "245" },
            { "name": "rushingYards", "displayValue": "145" },
            { "name": "firstDowns", "displayValue": "22" },
            { "name": "thirdDownEff", "displayValue": "6-12" },
            { "name": "turnovers", "displayValue": "1" },
            { "name": "possessionTime", "displayValue": "31:02" },
        ]));
        assert_eq!(total_yards(&s)[0], "Bills: 390");
        assert_eq!(passing_yards(&s)[0], "Bills: 245");
        assert_eq!(rushing_yards(&s)[0], "Bills: 145");
        assert_eq!(first_downs(&s)[0], "Bills: 22");
        assert_eq!(third_down_efficiency(&s)[0], "Bills: 6-12");
        assert_eq!(turnovers(&s)[0], "Bills: 1");
        assert_eq!(time_of_possession(&s)[0], "Bills: 31:02");
    }

    #[test]
    fn venue_formats() {
        let full = summary(json!({ "gameInfo": { "venue": {
            "fullName": "Highmark Stadium",
            "address": { "city": "Orchard Park", "state": "NY" }
        }}}));
        assert_eq!(venue(&full), "Highmark Stadium (Orchard Park, NY)");

        let city_only = summary(json!({ "gameInfo": { "venue": {
            "name": "Soldier Field",
            "address": { "city": "Chicago" }
        }}}));
        assert_eq!(venue(&city_only), "Soldier Field (Chicago)");

        let bare = summary(json!({ "gameInfo": { "venue": { "fullName": "Wembley Stadium" } } }));
        assert_eq!(venue(&bare), "Wembley Stadium");
    }

    #[test]
    fn attendance_skips_zero() {
        let s = summary(json!({ "gameInfo": { "attendance": 70123 } }));
        assert_eq!(attendance(&s), "Attendance: 70123");
        let zero = summary(json!({ "gameInfo": { "attendance": 0 } }));
        assert_eq!(attendance(&zero), "");
    }

    #[test]
    fn weather_formats() {
        let both = summary(json!({ "gameInfo": { "weather": { "temperature": 38, "displayValue": "Snow" } } }));
        assert_eq!(weather(&both), "38°, Snow");
        let described = summary(json!({ "gameInfo": { "weather": { "description": "Clear" } } }));
        assert_eq!(weather(&described), "Clear");
        let temp_only = summary(json!({ "gameInfo": { "weather": { "temperature": "71" } } }));
        assert_eq!(weather(&temp_only), "71°");
        let neither = summary(json!({ "gameInfo": { "weather": {} } }));
        assert_eq!(weather(&neither), "");
    }

    #[test]
    fn officials_format_positions() {
        let s = summary(json!({ "gameInfo": { "officials": [
            { "displayName": "Shawn Hochuli", "position": "Referee" },
            { "displayName": "Sarah Thomas", "position": { "name": "DOWN_JUDGE", "displayName": "Down Judge" } },
            { "displayName": "Alex Kemp", "positionName": "Umpire" },
            { "displayName": "Tra Blake" },
            {},
        ]}}));
        assert_eq!(
            officials(&s),
            vec![
                "Shawn Hochuli (Referee)",
                "Sarah Thomas (Down Judge)",
                "Alex Kemp (Umpire)",
                "Tra Blake",
                "Official",
            ]
        );
    }

    #[test]
    fn red_zone_prefers_current_drive() {
        let s = summary(json!({
            "drives": { "current": { "isRedZone": true, "team": { "shortDisplayName": "Team A" } } },
            "header": { "competitions": [{ "competitors": [
                { "isRedZone": true, "team": { "shortDisplayName": "Team B" } }
            ]}]}
        }));
        assert_eq!(red_zone_status(&s), "Team A in red zone");
    }

    #[test]
    fn red_zone_falls_back_to_competitors() {
        let s = summary(json!({
            "drives": { "current": { "isRedZone": false, "team": { "shortDisplayName": "Team A" } } },
            "header": { "competitions": [{ "competitors": [
                { "isRedZone": false, "team": { "shortDisplayName": "Team A" } },
                { "isRedZone": true, "team": { "shortDisplayName": "Team B" } }
            ]}]}
        }));
        assert_eq!(red_zone_status(&s), "Team B in red zone");
    }

    #[test]
    fn red_zone_empty_when_nobody_flagged() {
        let s = summary(json!({
            "header": { "competitions": [{ "competitors": [
                { "team": { "shortDisplayName": "Team A" } },
                { "isRedZone": "yes", "team": { "shortDisplayName": "Team B" } }
            ]}]}
        }));
        assert_eq!(red_zone_status(&s), "");
    }

    #[test]
    fn scoring_play_without_participants() {
        let plays = scoring_plays(&play(json!([])));
        assert_eq!(
            plays,
            vec![ScoringPlay {
                quarter: "2ND QUARTER".into(),
                clock: "4:10".into(),
                description: "Chiefs: Touchdown".into(),
            }]
        );
    }

    #[test]
    fn scoring_play_single_participant_with_jersey() {
        let plays = scoring_plays(&play(json!([
            { "athlete": { "displayName": "J. Smith", "jersey": "12" } }
        ])));
        assert_eq!(plays[0].description, "Chiefs: Touchdown (J. Smith #12)");
    }

    #[test]
    fn scoring_play_two_participants() {
        let plays = scoring_plays(&play(json!([
            { "athlete": { "displayName": "P1" } },
            { "athlete": { "shortName": "P2" } }
        ])));
        assert_eq!(plays[0].description, "Chiefs: Touchdown (P1 to P2)");
    }

    #[test]
    fn scoring_play_many_participants() {
        let plays = scoring_plays(&play(json!([
            { "athlete": { "displayName": "P1", "jersey": 15 } },
            { "athlete": { "displayName": "P2" } },
            { "athlete": { "displayName": "P3" } },
            { "note": "no athlete" }
        ])));
        assert_eq!(plays[0].description, "Chiefs: Touchdown (P1 #15, P2, P3)");
    }

    #[test]
    fn scoring_play_accepts_flat_period_and_clock() {
        let s = summary(json!({
            "scoringPlays": [
                { "period": 5, "clock": "10:00", "description": "Field goal" },
                { "period": "first", "text": "Safety" },
            ]
        }));
        let plays: Vec<_> = scoring_plays(&s).into_iter().map(ScoringPlay::into_tuple).collect();
        assert_eq!(
            plays,
            vec![
                ("OT".to_string(), "10:00".to_string(), "Team: Field goal".to_string()),
                ("OT".to_string(), String::new(), "Team: Safety".to_string()),
            ]
        );
    }
}
