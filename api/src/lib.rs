pub mod casablanca;
pub mod client;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types, independent of the NCAA wire format
// ---------------------------------------------------------------------------

/// One contest on a scoreboard day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: String,
    pub away: TeamLine,
    pub home: TeamLine,
    pub start_time: Option<DateTime<Utc>>,
    pub network: Option<String>, // "ESPN2", None when not televised
    pub lifecycle: Lifecycle,
}

impl GameRecord {
    pub fn is_live(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Live { .. })
    }

    /// Final is terminal: upstream never moves a game back out of it.
    pub fn is_final(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Final { .. })
    }

    pub fn teams(&self) -> [&TeamLine; 2] {
        [&self.away, &self.home]
    }
}

/// Progress of a contest. Each state carries only the fields that are
/// meaningful while the game is in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Scheduled,
    Live {
        period: String, // "2nd Half", "OT"
        clock: String,  // "2:13"
    },
    Final {
        period: String,
        message: String, // "FINAL", "FINAL (OT)"
    },
}

impl Lifecycle {
    pub fn label(&self) -> &'static str {
        match self {
            Lifecycle::Scheduled => "scheduled",
            Lifecycle::Live { .. } => "live",
            Lifecycle::Final { .. } => "final",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLine {
    pub short_name: String, // "Purdue"
    pub full_name: String,  // "Purdue University"
    pub conferences: Vec<Conference>,
    /// Raw AP rank text; upstream sends "" for unranked teams.
    pub rank: Option<String>,
    /// Tournament seed, only present in postseason brackets.
    pub seed: Option<String>,
    pub score: Option<u32>,
    pub winner: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Conference {
    pub name: String, // "Big Ten"
    pub slug: String, // "big-ten"
}
