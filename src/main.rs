mod config;
mod dictionary;
mod error;
mod game;
mod routes;
mod websocket;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::WordPool;
use error::ConfigError;
use game::{GameSession, WordGame};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// How often the reaper looks for idle REST games
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub word_pool: WordPool,
    /// Games created over the REST API, keyed by game id. WebSocket games
    /// are owned by their connection and never appear here.
    pub active_games: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, word_pool: WordPool) -> Self {
        Self {
            config,
            word_pool,
            active_games: DashMap::new(),
        }
    }

    /// Start a fresh game with the configured pool and settings
    pub fn new_session(&self) -> Result<GameSession, ConfigError> {
        let game = WordGame::start(self.word_pool.clone(), self.config.game_settings())?;
        Ok(GameSession::new(game, self.config.game.advance_on_correct))
    }

    /// Drop REST games nobody has touched for longer than `idle_timeout`.
    /// Returns how many were removed.
    pub fn reap_idle_sessions(&self, now: Instant, idle_timeout: Duration) -> usize {
        let before = self.active_games.len();
        self.active_games
            .retain(|_, session| now.saturating_duration_since(session.last_active()) <= idle_timeout);
        before.saturating_sub(self.active_games.len())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting unscramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load word list
    let word_pool = match &config.game.word_list_path {
        Some(path) => match WordPool::load(path).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("Failed to load word list: {:#}. Using bundled words.", e);
                WordPool::bundled()
            }
        },
        None => {
            tracing::info!("WORD_LIST_PATH not set, using bundled words");
            WordPool::bundled()
        }
    };

    // Refuse to start with settings no game could satisfy
    config
        .game_settings()
        .validate(&word_pool)
        .context("Invalid game configuration")?;
    tracing::info!(
        "Games use {} of {} words, {} points per correct guess",
        config.game.max_rounds,
        word_pool.len(),
        config.game.score_increment
    );

    let state = Arc::new(AppState::new(config.clone(), word_pool));

    // Spawn background task to drop abandoned REST games
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        session_cleanup_task(cleanup_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task that periodically removes idle REST games
async fn session_cleanup_task(state: Arc<AppState>) {
    let idle_timeout = state.config.session_idle_timeout();
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);

    loop {
        interval.tick().await;

        let removed = state.reap_idle_sessions(Instant::now(), idle_timeout);
        if removed > 0 {
            tracing::info!(
                "Removed {} idle game(s), {} still active",
                removed,
                state.active_games.len()
            );
        }
    }
}
