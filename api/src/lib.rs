pub mod client;
pub mod espn;
pub mod format;
pub mod nav;
pub mod scoreboard;
pub mod store;
pub mod summary;

pub use client::NflApi;
pub use store::{SnapshotStore, Slot};

// ---------------------------------------------------------------------------
// Domain types: what extractors hand back, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// One scoring play, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringPlay {
    pub quarter: String,
    pub clock: String,
    pub description: String,
}

impl ScoringPlay {
    /// The `(quarter, clock, description)` triple.
    pub fn into_tuple(self) -> (String, String, String) {
        (self.quarter, self.clock, self.description)
    }
}

/// Team box-score lines the summary exposes. Each one is located in a team's
/// statistics list by its stat name or by its abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamStat {
    TotalYards,
    PassingYards,
    RushingYards,
    FirstDowns,
    ThirdDownEfficiency,
    Turnovers,
    TimeOfPossession,
}

impl TeamStat {
    pub const ALL: [TeamStat; 7] = [
        TeamStat::TotalYards,
        TeamStat::PassingYards,
        TeamStat::RushingYards,
        TeamStat::FirstDowns,
        TeamStat::ThirdDownEfficiency,
        TeamStat::Turnovers,
        TeamStat::TimeOfPossession,
    ];

    /// ESPN's stat `name`.
    pub fn key(self) -> &'static str {
        match self {
            TeamStat::TotalYards => "totalYards",
            TeamStat::PassingYards => "netPassingYards",
            TeamStat::RushingYards => "rushingYards",
            TeamStat::FirstDowns => "firstDowns",
            TeamStat::ThirdDownEfficiency => "thirdDownEff",
            TeamStat::Turnovers => "turnovers",
            TeamStat::TimeOfPossession => "possessionTime",
        }
    }

    /// ESPN's stat `abbreviation`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            TeamStat::TotalYards => "TY",
            TeamStat::PassingYards => "PY",
            TeamStat::RushingYards => "RY",
            TeamStat::FirstDowns => "FD",
            TeamStat::ThirdDownEfficiency => "3D",
            TeamStat::Turnovers => "TO",
            TeamStat::TimeOfPossession => "TOP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamStat::TotalYards => "Total Yards",
            TeamStat::PassingYards => "Passing Yards",
            TeamStat::RushingYards => "Rushing Yards",
            TeamStat::FirstDowns => "First Downs",
            TeamStat::ThirdDownEfficiency => "3rd Down Eff",
            TeamStat::Turnovers => "Turnovers",
            TeamStat::TimeOfPossession => "Possession",
        }
    }
}
