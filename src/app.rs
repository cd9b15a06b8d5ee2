use crate::draw::{self, WatchView};
use crate::scoreboard::{Assembly, FilterCriteria, PresentableRow, assemble};
use crate::watch::{GameChoice, PollOutcome, PollSession, live_choices};
use cbb_api::client::{ApiError, ScoreboardSource};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::process::ExitCode;

/// What a one-shot run prints.
#[derive(Debug)]
pub enum Report {
    FetchFailed(ApiError),
    /// Guidance or empty-slate text, printed as is.
    Message(String),
    Table(Vec<PresentableRow>),
}

impl Report {
    pub fn is_failure(&self) -> bool {
        matches!(self, Report::FetchFailed(_))
    }
}

/// How watch mode gets going, decided before any terminal UI is shown.
#[derive(Debug)]
pub enum WatchStart {
    FetchFailed(ApiError),
    NoLiveGames(String),
    Pick(Vec<GameChoice>),
}

pub async fn scoreboard_report<S>(
    source: &S,
    date: NaiveDate,
    today: NaiveDate,
    criteria: &FilterCriteria,
) -> Report
where
    S: ScoreboardSource,
{
    let games = match source.fetch_scoreboard(date).await {
        Ok(games) => games,
        Err(e) => return Report::FetchFailed(e),
    };
    debug!("{} games on {date}", games.len());

    match assemble(&games, criteria, &Local) {
        Assembly::NoGamesScheduled => Report::Message(format!("\n  {}\n", no_games(date, today))),
        Assembly::ConferencePrompt(slugs) => Report::Message(format!(
            "\nPlease specify a conference: \n\n{}\n",
            slugs.join("\n")
        )),
        Assembly::NoMatches => Report::Message("\n  No games scheduled.\n".to_string()),
        Assembly::Table(rows) => Report::Table(rows),
    }
}

fn no_games(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "No scheduled games for today. :(".to_string()
    } else {
        format!("No scheduled games on {}. :(", date.format("%a %b %-d, %Y"))
    }
}

/// Fetch one day's scoreboard, filter it, and print whatever there is to show.
pub async fn show_scoreboard<S>(
    source: &S,
    date: NaiveDate,
    criteria: &FilterCriteria,
) -> anyhow::Result<ExitCode>
where
    S: ScoreboardSource,
{
    let report = scoreboard_report(source, date, Local::now().date_naive(), criteria).await;
    let code = if report.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS };

    match report {
        Report::FetchFailed(e) => eprintln!("\n  Couldn't fetch any games.\n  {e}\n"),
        Report::Message(text) => println!("{text}"),
        Report::Table(rows) => draw::print_scoreboard(&rows)?,
    }
    Ok(code)
}

pub async fn watch_start<S>(source: &S, date: NaiveDate, criteria: &FilterCriteria) -> WatchStart
where
    S: ScoreboardSource,
{
    let games = match source.fetch_scoreboard(date).await {
        Ok(games) => games,
        Err(e) => return WatchStart::FetchFailed(e),
    };
    match live_choices(&games, criteria) {
        Ok(choices) => WatchStart::Pick(choices),
        Err(e) => WatchStart::NoLiveGames(e.to_string()),
    }
}

/// Pick a live game and follow it until it ends or the user hits Ctrl-C.
pub async fn watch<S>(source: S, date: NaiveDate, criteria: &FilterCriteria) -> anyhow::Result<ExitCode>
where
    S: ScoreboardSource + Send + Sync + 'static,
{
    let choices = match watch_start(&source, date, criteria).await {
        WatchStart::Pick(choices) => choices,
        WatchStart::NoLiveGames(message) => {
            println!("\n  {message}\n");
            return Ok(ExitCode::SUCCESS);
        }
        WatchStart::FetchFailed(e) => {
            eprintln!("\n  Couldn't fetch any games.\n  {e}\n");
            return Ok(ExitCode::FAILURE);
        }
    };

    // Key reads block, so the picker gets its own thread.
    let picked = tokio::task::spawn_blocking(move || draw::run_selector(choices)).await??;
    let Some(game_id) = picked else {
        return Ok(ExitCode::SUCCESS);
    };
    info!("watching game {game_id}");

    let view = WatchView::inline()?;
    let outcome = PollSession::new(source, view, date, game_id)
        .start()
        .join_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    match outcome {
        PollOutcome::Completed { .. } => println!("\n  Game over.\n"),
        PollOutcome::Cancelled { .. } => println!("\n  Stopped watching.\n"),
    }
    Ok(ExitCode::SUCCESS)
}
