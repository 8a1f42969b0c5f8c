use std::time::Duration;

pub const BASE_URL: &str = "https://raw.githubusercontent.com/itmmckernan/triviajson/master/";
pub const QUESTIONS_PATH: &str = "world.json";
pub const LOG_FILE: &str = "trivia_debug.log";
pub const DEFAULT_TICK_RATE_MS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub questions_path: String,
    pub tick_rate: Duration,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            questions_path: QUESTIONS_PATH.to_string(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            log_file: LOG_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the question feed.
    pub fn questions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.questions_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
