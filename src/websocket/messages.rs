use serde::{Deserialize, Serialize};

use crate::game::GameSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    GetState,
    SubmitGuess { guess: String },
    Skip,
    Restart,
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState {
        scrambled_word: String,
        score: u32,
        round: usize,
        max_rounds: usize,
    },
    GuessResult {
        correct: bool,
        score: u32,
    },
    GameOver {
        final_score: u32,
        rounds_played: usize,
    },
    Error {
        message: String,
    },
}

impl From<GameSnapshot> for ServerMessage {
    fn from(snapshot: GameSnapshot) -> Self {
        ServerMessage::GameState {
            scrambled_word: snapshot.scrambled_word,
            score: snapshot.score,
            round: snapshot.round,
            max_rounds: snapshot.max_rounds,
        }
    }
}
