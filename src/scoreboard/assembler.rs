use crate::scoreboard::conferences::ConferenceIndex;
use crate::scoreboard::filter::{FilterCriteria, passes};
use crate::scoreboard::format::{PresentableRow, format_game};
use cbb_api::GameRecord;
use chrono::TimeZone;
use std::fmt::Display;

/// What a one-shot run has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembly {
    /// Upstream returned an empty slate.
    NoGamesScheduled,
    /// Conference flag given without a value: sorted, distinct slugs to pick from.
    ConferencePrompt(Vec<String>),
    /// Games exist but none survived the filters.
    NoMatches,
    /// Rows in upstream order.
    Table(Vec<PresentableRow>),
}

pub fn assemble<Tz>(games: &[GameRecord], criteria: &FilterCriteria, tz: &Tz) -> Assembly
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if games.is_empty() {
        return Assembly::NoGamesScheduled;
    }

    if criteria.wants_conference_prompt() {
        return Assembly::ConferencePrompt(ConferenceIndex::from_games(games).slugs());
    }

    let rows: Vec<PresentableRow> = filter_games(games, criteria)
        .into_iter()
        .map(|game| format_game(game, tz))
        .collect();

    if rows.is_empty() {
        Assembly::NoMatches
    } else {
        Assembly::Table(rows)
    }
}

/// Games passing every active filter, in upstream order.
pub fn filter_games<'a>(games: &'a [GameRecord], criteria: &FilterCriteria) -> Vec<&'a GameRecord> {
    let filters = criteria.filters(&ConferenceIndex::from_games(games));
    games.iter().filter(|g| passes(&filters, g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::fixtures::slate;
    use chrono::Utc;

    #[test]
    fn empty_slate_is_its_own_outcome() {
        let criteria = FilterCriteria::new(Some(""), true, None, false);
        assert_eq!(assemble(&[], &criteria, &Utc), Assembly::NoGamesScheduled);
        assert_eq!(assemble(&[], &FilterCriteria::default(), &Utc), Assembly::NoGamesScheduled);
    }

    #[test]
    fn blank_conference_lists_slugs_without_rows() {
        let criteria = FilterCriteria::new(Some(""), false, None, false);
        assert_eq!(
            assemble(&slate(), &criteria, &Utc),
            Assembly::ConferencePrompt(vec!["acc".into(), "big-12".into(), "big-ten".into()])
        );
    }

    #[test]
    fn everything_filtered_out_is_no_matches() {
        let criteria = FilterCriteria::new(None, false, Some("gonzaga"), false);
        assert_eq!(assemble(&slate(), &criteria, &Utc), Assembly::NoMatches);
    }

    #[test]
    fn rows_keep_upstream_order() {
        let Assembly::Table(rows) = assemble(&slate(), &FilterCriteria::default(), &Utc) else {
            panic!("expected a table");
        };
        let teams: Vec<String> = rows.iter().map(|r| r.teams.plain_text()).collect();
        assert_eq!(teams, vec!["Duke (9)\nUNC", "Iowa\nPurdue (3)", "Kansas\nBaylor (NR)"]);
    }

    #[test]
    fn conference_filter_by_display_name() {
        let criteria = FilterCriteria::new(Some("Big Ten"), false, None, false);
        let Assembly::Table(rows) = assemble(&slate(), &criteria, &Utc) else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].details.plain_text(), "58   2nd Half\n61   2:13");
    }

    #[test]
    fn filter_games_borrows_survivors() {
        let games = slate();
        let criteria = FilterCriteria::new(None, true, None, false);
        let ids: Vec<&str> = filter_games(&games, &criteria).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
