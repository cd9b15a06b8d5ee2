//! Scoreboard pipeline: filter raw games, format each survivor into a
//! two-cell row, and assemble the rows (or a guidance message) for display.

pub mod assembler;
pub mod conferences;
pub mod filter;
pub mod format;

pub use assembler::{Assembly, assemble, filter_games};
pub use filter::FilterCriteria;
pub use format::{PresentableRow, StyledCell, format_game};

#[cfg(test)]
pub(crate) mod fixtures {
    use cbb_api::{Conference, GameRecord, Lifecycle, TeamLine};
    use chrono::{DateTime, Utc};

    pub fn team(short: &str, full: &str, conference: (&str, &str)) -> TeamLine {
        TeamLine {
            short_name: short.into(),
            full_name: full.into(),
            conferences: vec![Conference { name: conference.0.into(), slug: conference.1.into() }],
            ..Default::default()
        }
    }

    pub fn scheduled(id: &str, away: TeamLine, home: TeamLine) -> GameRecord {
        GameRecord {
            id: id.into(),
            away,
            home,
            // 2024-02-15 00:00:00 UTC
            start_time: DateTime::<Utc>::from_timestamp(1_707_955_200, 0),
            network: None,
            lifecycle: Lifecycle::Scheduled,
        }
    }

    pub fn live(id: &str, away: TeamLine, home: TeamLine, period: &str, clock: &str) -> GameRecord {
        GameRecord {
            lifecycle: Lifecycle::Live { period: period.into(), clock: clock.into() },
            ..scheduled(id, away, home)
        }
    }

    pub fn finished(id: &str, away: TeamLine, home: TeamLine, message: &str) -> GameRecord {
        GameRecord {
            lifecycle: Lifecycle::Final { period: "FINAL".into(), message: message.into() },
            ..scheduled(id, away, home)
        }
    }

    /// A small Tuesday slate across three conferences.
    pub fn slate() -> Vec<GameRecord> {
        let mut iowa = team("Iowa", "University of Iowa", ("Big Ten", "big-ten"));
        iowa.score = Some(58);
        let mut purdue = team("Purdue", "Purdue University", ("Big Ten", "big-ten"));
        purdue.rank = Some("3".into());
        purdue.score = Some(61);

        let mut duke = team("Duke", "Duke University", ("ACC", "acc"));
        duke.rank = Some("9".into());
        let unc = team("UNC", "University of North Carolina", ("ACC", "acc"));

        let mut kansas = team("Kansas", "University of Kansas", ("Big 12", "big-12"));
        kansas.score = Some(70);
        let mut baylor = team("Baylor", "Baylor University", ("Big 12", "big-12"));
        baylor.score = Some(72);
        baylor.winner = true;
        baylor.rank = Some("NR".into());

        let mut tv = scheduled("1", duke, unc);
        tv.network = Some("ESPN".into());

        vec![
            tv,
            live("2", iowa, purdue, "2nd Half", "2:13"),
            finished("3", kansas, baylor, "FINAL"),
        ]
    }
}
