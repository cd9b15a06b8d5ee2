use crate::scoreboard::{FilterCriteria, filter_games};
use cbb_api::GameRecord;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameChoice {
    pub game_id: String,
    pub label: String, // "Iowa vs Purdue"
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NoLiveGames,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoLiveGames => write!(f, "No games are live right now."),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Live games that pass the user's filters, as watchable choices.
pub fn live_choices(
    games: &[GameRecord],
    criteria: &FilterCriteria,
) -> Result<Vec<GameChoice>, SelectionError> {
    let choices: Vec<GameChoice> = filter_games(games, criteria)
        .into_iter()
        .filter(|g| g.is_live())
        .map(|g| GameChoice {
            game_id: g.id.clone(),
            label: format!("{} vs {}", g.away.short_name, g.home.short_name),
        })
        .collect();

    if choices.is_empty() {
        Err(SelectionError::NoLiveGames)
    } else {
        Ok(choices)
    }
}

/// Cursor over the choice list.
#[derive(Debug, Clone)]
pub struct Selector {
    choices: Vec<GameChoice>,
    selected: usize,
}

impl Selector {
    pub fn new(choices: Vec<GameChoice>) -> Self {
        Self { choices, selected: 0 }
    }

    pub fn choices(&self) -> &[GameChoice] {
        &self.choices
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&GameChoice> {
        self.choices.get(self.selected)
    }

    pub fn next(&mut self) {
        let max = self.choices.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
