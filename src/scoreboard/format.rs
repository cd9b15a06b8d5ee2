use cbb_api::{GameRecord, Lifecycle, TeamLine};
use chrono::TimeZone;
use std::fmt::Display;

/// Gap between a score and the text that follows it on the same line.
const SCORE_GAP: &str = "   ";

/// A run of text plus whether the sink should emphasize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub highlight: bool,
}

impl Fragment {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), highlight: false }
    }

    fn marked(text: impl Into<String>, highlight: bool) -> Self {
        Self { text: text.into(), highlight }
    }
}

/// One table cell: lines of fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledCell {
    pub lines: Vec<Vec<Fragment>>,
}

impl StyledCell {
    fn push_line(&mut self, fragments: Vec<Fragment>) {
        self.lines.push(fragments);
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Cell text without styling, lines joined by `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|f| f.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentableRow {
    pub teams: StyledCell,
    pub details: StyledCell,
}

impl PresentableRow {
    pub fn height(&self) -> usize {
        self.teams.height().max(self.details.height())
    }
}

/// Turn one game into its "Teams" and "Score" cells.
///
/// A team is highlighted whenever upstream flags it as the winner; that flag
/// tracks the leader while live and the winner once final.
pub fn format_game<Tz>(game: &GameRecord, tz: &Tz) -> PresentableRow
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut teams = StyledCell::default();
    for team in [&game.away, &game.home] {
        teams.push_line(vec![Fragment::marked(team_label(team), team.winner)]);
    }

    PresentableRow { teams, details: details(game, tz) }
}

fn details<Tz>(game: &GameRecord, tz: &Tz) -> StyledCell
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut cell = StyledCell::default();
    match &game.lifecycle {
        Lifecycle::Scheduled => {
            let time = game
                .start_time
                .map(|t| t.with_timezone(tz).format("%-I:%M %p").to_string())
                .unwrap_or_else(|| "TBA".to_string());
            let line = match &game.network {
                Some(network) => format!("{time} {network}"),
                None => time,
            };
            cell.push_line(vec![Fragment::plain(line)]);
        }
        Lifecycle::Live { period, clock } => {
            let network = network_suffix(game);
            cell.push_line(vec![
                score(&game.away),
                Fragment::plain(format!("{SCORE_GAP}{period}{network}")),
            ]);
            cell.push_line(vec![score(&game.home), Fragment::plain(format!("{SCORE_GAP}{clock}"))]);
        }
        Lifecycle::Final { message, .. } => {
            let network = network_suffix(game);
            cell.push_line(vec![
                score(&game.away),
                Fragment::plain(format!("{SCORE_GAP}{message}{network}")),
            ]);
            cell.push_line(vec![score(&game.home)]);
        }
    }
    cell
}

fn network_suffix(game: &GameRecord) -> String {
    game.network.as_deref().map(|n| format!(" - {n}")).unwrap_or_default()
}

fn score(team: &TeamLine) -> Fragment {
    Fragment::marked(team.score.unwrap_or_default().to_string(), team.winner)
}

/// "Purdue (3)": seed wins over rank, nothing when the team has neither.
fn team_label(team: &TeamLine) -> String {
    match team.seed.as_deref().or(team.rank.as_deref()) {
        Some(n) => format!("{} ({n})", team.short_name),
        None => team.short_name.clone(),
    }
}
