//! Command-line surface.
//!
//! - `cbb`: today's scoreboard
//! - `cbb --conference big-ten` / `cbb -c "Big Ten"`: one conference
//! - `cbb -c`: list the conferences playing today
//! - `cbb --ap`, `cbb --name purdue`, `cbb --tv`: other filters
//! - `cbb watch`: pick a live game and follow it until the final buzzer

use crate::scoreboard::FilterCriteria;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Men's college basketball scores in your terminal.
#[derive(Parser, Debug)]
#[command(name = "cbb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only games involving this conference (name or slug); leave the value
    /// off to list today's conferences
    #[arg(short, long, global = true, num_args = 0..=1, default_missing_value = "")]
    pub conference: Option<String>,

    /// Only games with an AP top 25 team
    #[arg(long, global = true)]
    pub ap: bool,

    /// Only games where a team's name contains this text
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Only televised games
    #[arg(long, global = true)]
    pub tv: bool,

    /// Scoreboard day as YYYY-MM-DD (defaults to today)
    #[arg(short, long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Follow one live game, refreshing every 5 seconds until it ends
    Watch,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.conference.as_deref(), self.ap, self.name.as_deref(), self.tv)
    }
}
