// Word-scramble game engine

pub mod scramble;
pub mod session;
pub mod word_game;

pub use session::GameSession;
pub use word_game::{Advance, GameSettings, GameSnapshot, GuessOutcome, WordGame};
