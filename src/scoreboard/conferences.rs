use cbb_api::{Conference, GameRecord};
use std::collections::{BTreeSet, HashMap};

/// Maps every spelling a user might type for a conference (its display name
/// or its slug, case-folded) to the conference slug.
///
/// Built once per fetch from the games themselves, so it only knows the
/// conferences that are actually playing that day.
#[derive(Debug, Default, Clone)]
pub struct ConferenceIndex {
    by_token: HashMap<String, String>,
}

impl ConferenceIndex {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut by_token = HashMap::new();
        for conference in games
            .iter()
            .flat_map(|g| g.teams())
            .flat_map(|t| t.conferences.iter())
        {
            let slug = canonical_slug(conference);
            if slug.is_empty() {
                continue;
            }
            by_token.insert(normalize(&conference.name), slug.clone());
            by_token.insert(slug.clone(), slug);
        }
        by_token.remove("");
        Self { by_token }
    }

    /// Resolve a user token ("Big Ten", "BIG-TEN", "big-ten") to its slug.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.by_token.get(&normalize(token)).map(String::as_str)
    }

    /// Distinct slugs, sorted.
    pub fn slugs(&self) -> Vec<String> {
        self.by_token
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

/// Slug for a conference, derived from its name when upstream left it blank.
pub fn canonical_slug(conference: &Conference) -> String {
    let slug = normalize(&conference.slug);
    if !slug.is_empty() {
        return slug;
    }
    normalize(&conference.name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::fixtures::{scheduled, slate, team};

    #[test]
    fn resolves_name_and_slug_case_insensitively() {
        let index = ConferenceIndex::from_games(&slate());
        assert_eq!(index.resolve("big-ten"), Some("big-ten"));
        assert_eq!(index.resolve("Big Ten"), Some("big-ten"));
        assert_eq!(index.resolve("  BIG TEN "), Some("big-ten"));
        assert_eq!(index.resolve("ACC"), Some("acc"));
        assert_eq!(index.resolve("sec"), None);
        assert_eq!(index.resolve(""), None);
    }

    #[test]
    fn slugs_are_sorted_and_distinct() {
        let index = ConferenceIndex::from_games(&slate());
        assert_eq!(index.slugs(), vec!["acc", "big-12", "big-ten"]);
    }

    #[test]
    fn blank_slug_falls_back_to_hyphenated_name() {
        let game = scheduled(
            "1",
            team("Gonzaga", "Gonzaga University", ("West Coast", "")),
            team("Nobody", "Nobody", ("", "")),
        );
        let index = ConferenceIndex::from_games(&[game]);
        assert_eq!(index.slugs(), vec!["west-coast"]);
        assert_eq!(index.resolve("west coast"), Some("west-coast"));
    }

    #[test]
    fn empty_slate_has_empty_index() {
        assert!(ConferenceIndex::from_games(&[]).is_empty());
    }
}
