// src/config.rs
use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_LIVE_SCORES_URL: &str = "https://www.cricbuzz.com/cricket-match/live-scores";
pub const DEFAULT_COMMENTARY_URL: &str =
    "https://www.cricbuzz.com/api/cricket-match/109733/full-commentary/1";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub live_scores_url: String,
    pub commentary_url: String,
    pub commentary_file: PathBuf,
    pub auth_username: String,
    pub auth_password: String,
    pub session_ttl: Duration,
    pub session_sweep_interval: Duration,
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            live_scores_url: DEFAULT_LIVE_SCORES_URL.to_string(),
            commentary_url: DEFAULT_COMMENTARY_URL.to_string(),
            commentary_file: PathBuf::from("commentary.json"),
            auth_username: "admin".to_string(),
            auth_password: "password".to_string(),
            session_ttl: Duration::from_secs(3600),
            session_sweep_interval: Duration::from_secs(300),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Build from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_or("BIND_ADDR", defaults.bind_addr),
            live_scores_url: env_or("LIVE_SCORES_URL", defaults.live_scores_url),
            commentary_url: env_or("COMMENTARY_URL", defaults.commentary_url),
            commentary_file: env::var_os("COMMENTARY_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.commentary_file),
            auth_username: env_or("AUTH_USERNAME", defaults.auth_username),
            auth_password: env_or("AUTH_PASSWORD", defaults.auth_password),
            session_ttl: env_secs("SESSION_TTL_SECS", defaults.session_ttl),
            session_sweep_interval: env_secs("SESSION_SWEEP_SECS", defaults.session_sweep_interval),
            public_dir: env::var_os("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

fn env_secs(key: &str, default: Duration) -> Duration {
    match env::var(key) {
        Ok(raw) => parse_secs(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, "not a number of seconds, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_secs(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_secs)
}
