use crate::scoreboard::conferences::{ConferenceIndex, canonical_slug};
use cbb_api::GameRecord;

pub const AP_POLL_SIZE: u32 = 25;

/// What the user asked to see. Built once from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `Some("")` means the flag was given without a value.
    pub conference: Option<String>,
    pub ap_top_25: bool,
    pub name: Option<String>,
    pub televised_only: bool,
}

impl FilterCriteria {
    pub fn new(
        conference: Option<&str>,
        ap_top_25: bool,
        name: Option<&str>,
        televised_only: bool,
    ) -> Self {
        Self {
            conference: conference.map(|c| c.trim().to_lowercase()),
            ap_top_25,
            name: name.map(|n| n.trim().to_lowercase()).filter(|n| !n.is_empty()),
            televised_only,
        }
    }

    /// Conference flag present but blank: list conferences instead of filtering.
    pub fn wants_conference_prompt(&self) -> bool {
        self.conference.as_deref() == Some("")
    }

    /// The predicates these criteria switch on. Absent criteria add nothing.
    pub fn filters(&self, conferences: &ConferenceIndex) -> Vec<GameFilter> {
        let mut filters = Vec::new();
        if let Some(token) = self.conference.as_deref().filter(|t| !t.is_empty()) {
            filters.push(GameFilter::Conference(
                conferences.resolve(token).map(str::to_owned),
            ));
        }
        if self.ap_top_25 {
            filters.push(GameFilter::ApTop25);
        }
        if let Some(name) = &self.name {
            filters.push(GameFilter::Name(name.clone()));
        }
        if self.televised_only {
            filters.push(GameFilter::Televised);
        }
        filters
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameFilter {
    /// Resolved slug; `None` when the token named no conference on the slate.
    Conference(Option<String>),
    ApTop25,
    /// Lowercased substring.
    Name(String),
    Televised,
}

impl GameFilter {
    pub fn matches(&self, game: &GameRecord) -> bool {
        match self {
            GameFilter::Conference(Some(slug)) => in_conference(game, slug),
            GameFilter::Conference(None) => false,
            GameFilter::ApTop25 => has_ranked_team(game),
            GameFilter::Name(needle) => name_contains(game, needle),
            GameFilter::Televised => is_televised(game),
        }
    }
}

/// Short-circuit AND over every active filter.
pub fn passes(filters: &[GameFilter], game: &GameRecord) -> bool {
    filters.iter().all(|f| f.matches(game))
}

pub fn in_conference(game: &GameRecord, slug: &str) -> bool {
    game.teams()
        .iter()
        .flat_map(|t| t.conferences.iter())
        .any(|c| canonical_slug(c) == slug)
}

pub fn has_ranked_team(game: &GameRecord) -> bool {
    game.teams().iter().any(|t| {
        t.rank
            .as_deref()
            .and_then(|r| r.trim().parse::<u32>().ok())
            .is_some_and(|r| (1..=AP_POLL_SIZE).contains(&r))
    })
}

/// `needle` must already be lowercase.
pub fn name_contains(game: &GameRecord, needle: &str) -> bool {
    game.teams()
        .iter()
        .any(|t| t.full_name.to_lowercase().contains(needle))
}

pub fn is_televised(game: &GameRecord) -> bool {
    game.network.as_deref().is_some_and(|n| !n.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::fixtures::{scheduled, slate, team};
    use proptest::prelude::*;

    fn surviving_ids(games: &[GameRecord], filters: &[GameFilter]) -> Vec<String> {
        games
            .iter()
            .filter(|g| passes(filters, g))
            .map(|g| g.id.clone())
            .collect()
    }

    #[test]
    fn absent_criteria_keep_everything() {
        let games = slate();
        let index = ConferenceIndex::from_games(&games);
        let filters = FilterCriteria::default().filters(&index);
        assert!(filters.is_empty());
        assert_eq!(surviving_ids(&games, &filters), vec!["1", "2", "3"]);
    }

    #[test]
    fn conference_matches_name_or_slug() {
        let games = slate();
        let index = ConferenceIndex::from_games(&games);
        for token in ["big-ten", "Big Ten", "BIG TEN"] {
            let filters = FilterCriteria::new(Some(token), false, None, false).filters(&index);
            assert_eq!(surviving_ids(&games, &filters), vec!["2"], "token {token:?}");
        }
    }

    #[test]
    fn unknown_conference_matches_nothing() {
        let games = slate();
        let index = ConferenceIndex::from_games(&games);
        let filters = FilterCriteria::new(Some("ivy"), false, None, false).filters(&index);
        assert!(surviving_ids(&games, &filters).is_empty());
    }

    #[test]
    fn blank_conference_adds_no_filter() {
        let criteria = FilterCriteria::new(Some(""), false, None, false);
        assert!(criteria.wants_conference_prompt());
        assert!(criteria.filters(&ConferenceIndex::default()).is_empty());
    }

    #[test]
    fn ranking_ignores_non_numeric_and_out_of_poll_ranks() {
        let games = slate();
        // game 3 only has "NR"
        assert_eq!(surviving_ids(&games, &[GameFilter::ApTop25]), vec!["1", "2"]);

        let mut a = team("A", "A", ("X", "x"));
        a.rank = Some("26".into());
        let mut b = team("B", "B", ("X", "x"));
        b.rank = Some("".into());
        assert!(!has_ranked_team(&scheduled("9", a.clone(), b.clone())));

        a.rank = Some(" 25 ".into());
        assert!(has_ranked_team(&scheduled("9", a, b)));
    }

    #[test]
    fn name_is_a_case_insensitive_substring_of_either_full_name() {
        let games = slate();
        let criteria = FilterCriteria::new(None, false, Some("PURDUE"), false);
        let filters = criteria.filters(&ConferenceIndex::default());
        assert_eq!(surviving_ids(&games, &filters), vec!["2"]);

        let criteria = FilterCriteria::new(None, false, Some("university of"), false);
        let filters = criteria.filters(&ConferenceIndex::default());
        assert_eq!(surviving_ids(&games, &filters), vec!["1", "2", "3"]);
    }

    #[test]
    fn televised_requires_a_non_empty_network() {
        let mut games = slate();
        games[1].network = Some("  ".into());
        assert_eq!(surviving_ids(&games, &[GameFilter::Televised]), vec!["1"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let games = slate();
        let index = ConferenceIndex::from_games(&games);
        let filters = FilterCriteria::new(Some("acc"), true, None, true).filters(&index);
        assert_eq!(filters.len(), 3);
        assert_eq!(surviving_ids(&games, &filters), vec!["1"]);

        let filters = FilterCriteria::new(Some("big-12"), true, None, false).filters(&index);
        assert!(surviving_ids(&games, &filters).is_empty());
    }

    proptest! {
        #[test]
        fn conference_and_ranking_filters_commute(
            conference in prop::sample::select(vec!["acc", "big-ten", "big-12", "Big Ten", "sec", ""]),
            ranks in prop::collection::vec(prop::option::of(0u32..40), 6),
        ) {
            let mut games = slate();
            for (i, rank) in ranks.iter().enumerate() {
                let game = &mut games[i / 2];
                let team = if i % 2 == 0 { &mut game.away } else { &mut game.home };
                team.rank = rank.map(|r| r.to_string());
            }
            let index = ConferenceIndex::from_games(&games);
            let conference = FilterCriteria::new(Some(conference), false, None, false).filters(&index);

            let mut forward = conference.clone();
            forward.push(GameFilter::ApTop25);
            let mut backward = vec![GameFilter::ApTop25];
            backward.extend(conference);

            prop_assert_eq!(surviving_ids(&games, &forward), surviving_ids(&games, &backward));
        }
    }
}
