use log::LevelFilter;

pub const LOG_ENV: &str = "CBB_LOG";
pub const API_BASE_ENV: &str = "CBB_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub log_level: LevelFilter,
    /// Scoreboard host override, e.g. a mirror of data.ncaa.com.
    pub api_base: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { log_level: LevelFilter::Warn, api_base: None }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup(LOG_ENV)
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            api_base: lookup(API_BASE_ENV)
                .map(|base| base.trim().to_owned())
                .filter(|base| !base.is_empty()),
        }
    }
}
