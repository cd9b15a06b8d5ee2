use crate::casablanca::{CasablancaConference, CasablancaGame, CasablancaTeam, ScoreboardResponse};
use crate::{Conference, GameRecord, Lifecycle, TeamLine};
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use reqwest::Client;
use std::fmt;
use std::future::Future;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const NCAA_DATA: &str = "https://data.ncaa.com";
const SCOREBOARD_PATH: &str = "casablanca/scoreboard/basketball-men/d1";

/// Anything that can hand out scoreboard days and single games.
///
/// `NcaaApi` is the production source; tests script their own.
pub trait ScoreboardSource {
    fn fetch_scoreboard(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = ApiResult<Vec<GameRecord>>> + Send;

    /// Games are published per scoreboard day, so the day travels with the id.
    fn fetch_game(
        &self,
        date: NaiveDate,
        game_id: &str,
    ) -> impl Future<Output = ApiResult<GameRecord>> + Send;
}

/// NCAA scoreboard client backed by the public casablanca feed.
#[derive(Debug, Clone)]
pub struct NcaaApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NcaaApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("cbb/0.2 (terminal scoreboard)")
                .build()
                .unwrap_or_default(),
            base_url: NCAA_DATA.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    UnrecognizedState { game_id: String, state: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::UnrecognizedState { game_id, state } => {
                write!(f, "Game {game_id} has unrecognized state {state:?}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            _ => None,
        }
    }
}

impl NcaaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a mirror (or a test server) instead of data.ncaa.com.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn scoreboard_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{SCOREBOARD_PATH}/{}/scoreboard.json",
            self.base_url,
            date.format("%Y/%m/%d")
        )
    }

    /// Fetch every men's D1 game on the given day, in upstream order.
    pub async fn fetch_scoreboard(&self, date: NaiveDate) -> ApiResult<Vec<GameRecord>> {
        let url = self.scoreboard_url(date);
        debug!("fetching scoreboard for {date}");
        let raw: ScoreboardResponse = self.get(&url).await?;
        raw.games.into_iter().map(|g| map_game(g.game)).collect()
    }

    /// Fetch one game's current state from its scoreboard day. Only that
    /// game is mapped; other entries on the day can't fail the fetch.
    pub async fn fetch_game(&self, date: NaiveDate, game_id: &str) -> ApiResult<GameRecord> {
        let url = self.scoreboard_url(date);
        debug!("fetching game {game_id} on {date}");
        let raw: ScoreboardResponse = self.get(&url).await?;
        let game = raw
            .games
            .into_iter()
            .map(|g| g.game)
            .find(|g| g.game_id == game_id)
            .ok_or_else(|| ApiError::NotFound(format!("game {game_id} on {date}")))?;
        map_game(game)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

impl ScoreboardSource for NcaaApi {
    fn fetch_scoreboard(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = ApiResult<Vec<GameRecord>>> + Send {
        NcaaApi::fetch_scoreboard(self, date)
    }

    fn fetch_game(
        &self,
        date: NaiveDate,
        game_id: &str,
    ) -> impl Future<Output = ApiResult<GameRecord>> + Send {
        NcaaApi::fetch_game(self, date, game_id)
    }
}

// ---------------------------------------------------------------------------
// Mapping: casablanca wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_game(g: CasablancaGame) -> ApiResult<GameRecord> {
    let lifecycle = match g.game_state.to_ascii_lowercase().as_str() {
        "pre" => Lifecycle::Scheduled,
        "live" => Lifecycle::Live {
            period: g.current_period,
            clock: g.contest_clock.unwrap_or_default(),
        },
        "final" => Lifecycle::Final {
            period: g.current_period,
            message: non_empty(g.final_message).unwrap_or_else(|| "FINAL".into()),
        },
        _ => {
            return Err(ApiError::UnrecognizedState {
                game_id: g.game_id,
                state: g.game_state,
            });
        }
    };

    let start_time = g
        .start_time_epoch
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

    Ok(GameRecord {
        id: g.game_id,
        away: map_team(g.away),
        home: map_team(g.home),
        start_time,
        network: non_empty(g.network),
        lifecycle,
    })
}

fn map_team(t: CasablancaTeam) -> TeamLine {
    let mut conferences: Vec<Conference> = t
        .conferences
        .into_iter()
        .chain(t.conference_names)
        .filter_map(map_conference)
        .collect();
    conferences.dedup();

    TeamLine {
        short_name: t.names.short,
        full_name: t.names.full,
        conferences,
        rank: non_empty(Some(t.rank)),
        seed: non_empty(Some(t.seed)),
        score: t.score.trim().parse::<u32>().ok(),
        winner: t.winner,
    }
}

fn map_conference(c: CasablancaConference) -> Option<Conference> {
    if c.conference_name.is_empty() && c.conference_seo.is_empty() {
        return None;
    }
    Some(Conference {
        name: c.conference_name,
        slug: c.conference_seo,
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
