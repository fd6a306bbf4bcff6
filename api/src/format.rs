//! String assembly for composite display fields. Inputs are already
//! extracted; every function here is total.

/// Display label for a game period.
pub fn period_label(period: Option<i64>) -> &'static str {
    match period {
        Some(1) => "1ST QUARTER",
        Some(2) => "2ND QUARTER",
        Some(3) => "3RD QUARTER",
        Some(4) => "4TH QUARTER",
        _ => "OT",
    }
}

/// `"{team}: {value}"`, with `?` standing in for a missing value.
pub fn stat_line(team: &str, value: Option<&str>) -> String {
    format!("{team}: {}", value.unwrap_or("?"))
}

/// `"{name} ({city}, {state})"`, dropping whichever half of the location is
/// missing and the parenthetical entirely when both are.
pub fn venue_text(name: &str, city: Option<&str>, state: Option<&str>) -> String {
    match (city, state) {
        (Some(city), Some(state)) => format!("{name} ({city}, {state})"),
        (Some(place), None) | (None, Some(place)) => format!("{name} ({place})"),
        (None, None) => name.to_owned(),
    }
}

pub fn weather_text(temperature: Option<&str>, condition: Option<&str>) -> String {
    let temperature = temperature.map(|t| format!("{t}°"));
    match (temperature, condition) {
        (Some(temp), Some(cond)) => format!("{temp}, {cond}"),
        (Some(temp), None) => temp,
        (None, Some(cond)) => cond.to_owned(),
        (None, None) => String::new(),
    }
}

pub fn official_text(name: &str, position: Option<&str>) -> String {
    match position {
        Some(position) => format!("{name} ({position})"),
        None => name.to_owned(),
    }
}

/// A participant's name, tagged with their jersey number when known.
pub fn player_tag(name: &str, jersey: Option<&str>) -> String {
    match jersey {
        Some(jersey) => format!("{name} #{jersey}"),
        None => name.to_owned(),
    }
}

/// One player stands alone, two read as a passer-to-receiver pair, and
/// anything longer is a comma-separated list.
pub fn player_text(players: &[String]) -> String {
    match players {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} to {second}"),
        _ => players.join(", "),
    }
}

pub fn play_description(team: &str, base: &str, players: &str) -> String {
    if players.is_empty() {
        format!("{team}: {base}")
    } else {
        format!("{team}: {base} ({players})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_labels() {
        assert_eq!(period_label(Some(1)), "1ST QUARTER");
        assert_eq!(period_label(Some(2)), "2ND QUARTER");
        assert_eq!(period_label(Some(3)), "3RD QUARTER");
        assert_eq!(period_label(Some(4)), "4TH QUARTER");
        assert_eq!(period_label(Some(5)), "OT");
        assert_eq!(period_label(Some(0)), "OT");
        assert_eq!(period_label(Some(-3)), "OT");
        assert_eq!(period_label(None), "OT");
    }

    #[test]
    fn stat_line_placeholder() {
        assert_eq!(stat_line("KC", Some("245")), "KC: 245");
        assert_eq!(stat_line("KC", None), "KC: ?");
    }

    #[test]
    fn venue_collapses_missing_location_parts() {
        assert_eq!(
            venue_text("Arrowhead Stadium", Some("Kansas City"), Some("MO")),
            "Arrowhead Stadium (Kansas City, MO)"
        );
        assert_eq!(venue_text("Lambeau Field", Some("Green Bay"), None), "Lambeau Field (Green Bay)");
        assert_eq!(venue_text("Lambeau Field", None, Some("WI")), "Lambeau Field (WI)");
        assert_eq!(venue_text("Wembley", None, None), "Wembley");
    }

    #[test]
    fn weather_joins_available_parts() {
        assert_eq!(weather_text(Some("38"), Some("Cloudy")), "38°, Cloudy");
        assert_eq!(weather_text(Some("38"), None), "38°");
        assert_eq!(weather_text(None, Some("Cloudy")), "Cloudy");
        assert_eq!(weather_text(None, None), "");
    }

    #[test]
    fn official_omits_missing_position() {
        assert_eq!(official_text("Bill Vinovich", Some("Referee")), "Bill Vinovich (Referee)");
        assert_eq!(official_text("Bill Vinovich", None), "Bill Vinovich");
    }

    #[test]
    fn player_text_by_participant_count() {
        let names = |n: &[&str]| n.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(player_text(&[]), "");
        assert_eq!(player_text(&names(&["J. Smith #12"])), "J. Smith #12");
        assert_eq!(player_text(&names(&["P1", "P2"])), "P1 to P2");
        assert_eq!(player_text(&names(&["P1", "P2", "P3"])), "P1, P2, P3");
    }

    #[test]
    fn play_description_parenthesizes_players() {
        assert_eq!(play_description("KC", "TD pass", ""), "KC: TD pass");
        assert_eq!(play_description("KC", "TD pass", "P1 to P2"), "KC: TD pass (P1 to P2)");
        assert_eq!(player_tag("J. Smith", Some("12")), "J. Smith #12");
        assert_eq!(player_tag("J. Smith", None), "J. Smith");
    }
}
