use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, str::FromStr, time::Duration};

use crate::game::{
    word_game::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT},
    GameSettings,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Newline-separated word file; the bundled list is used when unset
    pub word_list_path: Option<String>,
    pub max_rounds: usize,
    pub score_increment: u32,
    pub advance_on_correct: bool,
    /// Seconds before an untouched REST game is dropped
    pub session_idle_timeout: u64,
    /// Upper bound on live REST games
    pub max_active_games: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
        };

        let game = GameConfig {
            word_list_path: lookup("WORD_LIST_PATH").filter(|path| !path.trim().is_empty()),
            max_rounds: parse_or(&lookup, "MAX_ROUNDS", DEFAULT_MAX_ROUNDS)?,
            score_increment: parse_or(&lookup, "SCORE_INCREMENT", DEFAULT_SCORE_INCREMENT)?,
            advance_on_correct: parse_or(&lookup, "ADVANCE_ON_CORRECT", true)?,
            session_idle_timeout: parse_or(&lookup, "SESSION_IDLE_TIMEOUT", 1800)?,
            max_active_games: parse_or(&lookup, "MAX_ACTIVE_GAMES", 1000)?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            max_rounds: self.game.max_rounds,
            score_increment: self.game.score_increment,
        }
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.game.session_idle_timeout)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid {}", key, std::any::type_name::<T>())),
        None => Ok(default),
    }
}
