use thiserror::Error;

/// Fatal configuration problems detected when a game is started.
///
/// These are never produced during normal play; a caller that sees one has
/// passed settings that cannot describe a playable game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word pool is empty")]
    EmptyPool,

    #[error("max rounds must be at least 1")]
    ZeroRounds,

    #[error("max rounds ({max_rounds}) exceeds the number of distinct words in the pool ({pool_size})")]
    RoundsExceedPool { max_rounds: usize, pool_size: usize },

    #[error("word '{word}' has fewer than two distinct letters and cannot be scrambled")]
    Unscramblable { word: String },
}
