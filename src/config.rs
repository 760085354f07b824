use std::env;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::state::Screen;

const DEFAULT_TICK_MS: u64 = 250;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Fixed generator seed; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    pub tick_rate: Duration,
    pub start_screen: Screen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            start_screen: Screen::Home,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("SPORTSHUB_SEED").and_then(|val| val.trim().parse::<u64>().ok());
        let tick_ms = lookup("SPORTSHUB_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(50, 2000);
        let start_screen = lookup("SPORTSHUB_START_VIEW")
            .and_then(|val| parse_screen(&val))
            .unwrap_or(Screen::Home);
        Self {
            seed,
            tick_rate: Duration::from_millis(tick_ms),
            start_screen,
        }
    }
}

/// Reads `.env.local` then `.env`; existing variables win.
pub fn load_env_files() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

pub fn parse_screen(raw: &str) -> Option<Screen> {
    match raw.trim().to_lowercase().as_str() {
        "home" => Some(Screen::Home),
        "live" | "live-scores" | "scores" => Some(Screen::LiveScores),
        "teams" => Some(Screen::Teams),
        "players" => Some(Screen::Players),
        "news" => Some(Screen::News),
        _ => None,
    }
}
