/// Wire types for the NCAA "casablanca" scoreboard feed.
/// Endpoint: https://data.ncaa.com/casablanca/scoreboard/basketball-men/d1/{yyyy}/{mm}/{dd}/scoreboard.json
///
/// The feed is loosely typed: scores, ranks and seeds arrive as strings, numbers
/// or nulls depending on the day, so those fields are read through [`text`].
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub games: Vec<GameEnvelope>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GameEnvelope {
    pub game: CasablancaGame,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CasablancaGame {
    #[serde(rename = "gameID", default)]
    pub game_id: String,
    #[serde(default)]
    pub away: CasablancaTeam,
    #[serde(default)]
    pub home: CasablancaTeam,
    /// "pre" | "live" | "final"
    #[serde(default)]
    pub game_state: String,
    #[serde(default, deserialize_with = "text")]
    pub start_time_epoch: String,
    pub network: Option<String>,
    #[serde(default)]
    pub current_period: String,
    /// Only populated while the game is live.
    pub contest_clock: Option<String>,
    /// Only populated once the game is over.
    pub final_message: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CasablancaTeam {
    #[serde(default, deserialize_with = "text")]
    pub score: String,
    #[serde(default)]
    pub names: CasablancaNames,
    #[serde(default)]
    pub winner: bool,
    #[serde(default, deserialize_with = "text")]
    pub seed: String,
    #[serde(default, deserialize_with = "text")]
    pub rank: String,
    #[serde(default)]
    pub conferences: Vec<CasablancaConference>,
    /// Older feeds carry a single conference object instead of `conferences`.
    pub conference_names: Option<CasablancaConference>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CasablancaNames {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub seo: String,
    #[serde(default)]
    pub char6: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CasablancaConference {
    #[serde(default)]
    pub conference_name: String,
    #[serde(default)]
    pub conference_seo: String,
}

/// Accept a string, a number or null and hand back its text ("" for null).
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
