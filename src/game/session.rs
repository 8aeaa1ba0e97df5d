use std::time::Instant;

use rand::{rngs::StdRng, Rng};

use super::{Advance, GuessOutcome, WordGame};
use crate::websocket::messages::{ClientMessage, ServerMessage};

/// A running game together with the policy a player-facing client applies
/// on top of it: advance after a correct guess, skip, play again.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    game: WordGame<R>,
    /// Move to the next word automatically after a correct guess
    advance_on_correct: bool,
    /// The current word was already guessed; it cannot score again
    round_solved: bool,
    /// The round limit was hit. Only `restart` leaves this state.
    game_over: bool,
    last_active: Instant,
}

impl<R: Rng> GameSession<R> {
    pub fn new(game: WordGame<R>, advance_on_correct: bool) -> Self {
        Self {
            game,
            advance_on_correct,
            round_solved: false,
            game_over: false,
            last_active: Instant::now(),
        }
    }

    pub fn game(&self) -> &WordGame<R> {
        &self.game
    }

    pub fn last_active(&self) -> Instant {
        self.last_active
    }

    #[cfg(test)]
    pub(crate) fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Apply one client command and return the messages to send back, in
    /// order.
    pub fn handle(&mut self, msg: ClientMessage) -> Vec<ServerMessage> {
        self.last_active = Instant::now();

        match msg {
            ClientMessage::GetState if self.game_over => vec![self.game_over_message()],
            ClientMessage::GetState => vec![self.state_message()],
            ClientMessage::SubmitGuess { .. } | ClientMessage::Skip if self.game_over => {
                vec![self.game_over_message()]
            }
            ClientMessage::SubmitGuess { guess } => {
                let guess = guess.trim();
                if guess.is_empty() {
                    return vec![ServerMessage::Error {
                        message: "Guess must not be empty".to_string(),
                    }];
                }
                if self.round_solved {
                    return vec![ServerMessage::Error {
                        message: "Word already solved, skip to the next one".to_string(),
                    }];
                }

                let outcome = self.game.submit_guess(guess);
                let correct = outcome == GuessOutcome::Correct;
                self.round_solved = correct;
                let mut replies = vec![ServerMessage::GuessResult {
                    correct,
                    score: self.game.score(),
                }];

                if correct && self.advance_on_correct {
                    replies.push(self.advance());
                }
                replies
            }
            ClientMessage::Skip => vec![self.advance()],
            ClientMessage::Restart => {
                self.game.restart();
                self.round_solved = false;
                self.game_over = false;
                tracing::debug!("Game restarted");
                vec![self.state_message()]
            }
        }
    }

    fn advance(&mut self) -> ServerMessage {
        match self.game.next_word() {
            Advance::Advanced => {
                self.round_solved = false;
                if self.game.is_final_round() {
                    tracing::debug!("Dealt final round {}", self.game.round_count());
                }
                self.state_message()
            }
            Advance::GameOver => {
                self.game_over = true;
                tracing::info!(
                    "Game over: scored {} over {} words",
                    self.game.score(),
                    self.game.used_word_count()
                );
                self.game_over_message()
            }
        }
    }

    fn game_over_message(&self) -> ServerMessage {
        ServerMessage::GameOver {
            final_score: self.game.score(),
            rounds_played: self.game.round_count(),
        }
    }

    fn state_message(&self) -> ServerMessage {
        self.game.snapshot().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary::WordPool, game::GameSettings};
    use rand::SeedableRng;

    fn session(advance_on_correct: bool) -> GameSession {
        let game = WordGame::with_rng(
            WordPool::new(["apple", "grape"]),
            GameSettings {
                max_rounds: 2,
                score_increment: 20,
            },
            StdRng::seed_from_u64(17),
        )
        .unwrap();
        GameSession::new(game, advance_on_correct)
    }

    fn guess(word: &str) -> ClientMessage {
        ClientMessage::SubmitGuess {
            guess: word.to_string(),
        }
    }

    #[test]
    fn test_get_state_reports_round_one() {
        let mut session = session(true);
        let replies = session.handle(ClientMessage::GetState);
        assert!(matches!(
            replies.as_slice(),
            [ServerMessage::GameState {
                score: 0,
                round: 1,
                max_rounds: 2,
                ..
            }]
        ));
    }

    #[test]
    fn test_correct_guess_advances_when_enabled() {
        let mut session = session(true);
        let word = session.game().current_word().to_uppercase();

        let replies = session.handle(guess(&word));
        assert_eq!(replies.len(), 2);
        assert_eq!(
            replies[0],
            ServerMessage::GuessResult {
                correct: true,
                score: 20
            }
        );
        assert!(matches!(
            replies[1],
            ServerMessage::GameState {
                round: 2,
                score: 20,
                ..
            }
        ));

        // Second correct guess ends the game
        let word = session.game().current_word().to_string();
        let replies = session.handle(guess(&word));
        assert_eq!(
            replies[1],
            ServerMessage::GameOver {
                final_score: 40,
                rounds_played: 2
            }
        );
    }

    #[test]
    fn test_correct_guess_stays_when_disabled() {
        let mut session = session(false);
        let word = session.game().current_word().to_string();
        let replies = session.handle(guess(&word));
        assert_eq!(
            replies,
            vec![ServerMessage::GuessResult {
                correct: true,
                score: 20
            }]
        );
        assert_eq!(session.game().round_count(), 1);
    }

    #[test]
    fn test_wrong_and_blank_guesses() {
        let mut session = session(true);
        let replies = session.handle(guess("banana"));
        assert_eq!(
            replies,
            vec![ServerMessage::GuessResult {
                correct: false,
                score: 0
            }]
        );

        let replies = session.handle(guess("   "));
        assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
        assert_eq!(session.game().round_count(), 1);
    }

    #[test]
    fn test_skip_until_game_over_then_restart() {
        let mut session = session(true);
        assert!(matches!(
            session.handle(ClientMessage::Skip).as_slice(),
            [ServerMessage::GameState { round: 2, .. }]
        ));
        assert_eq!(
            session.handle(ClientMessage::Skip),
            vec![ServerMessage::GameOver {
                final_score: 0,
                rounds_played: 2
            }]
        );

        assert!(matches!(
            session.handle(ClientMessage::Restart).as_slice(),
            [ServerMessage::GameState {
                round: 1,
                score: 0,
                ..
            }]
        ));
    }

    #[test]
    fn test_game_over_is_terminal_until_restart() {
        let mut session = session(true);
        session.handle(ClientMessage::Skip);
        let last = session.game().current_word().to_string();

        let finished = vec![
            ServerMessage::GuessResult {
                correct: true,
                score: 20,
            },
            ServerMessage::GameOver {
                final_score: 20,
                rounds_played: 2,
            },
        ];
        assert_eq!(session.handle(guess(&last)), finished);
        assert!(session.is_game_over());

        let over = vec![ServerMessage::GameOver {
            final_score: 20,
            rounds_played: 2,
        }];
        for _ in 0..3 {
            assert_eq!(session.handle(guess(&last)), over);
        }
        assert_eq!(session.handle(guess("wrong")), over);
        assert_eq!(session.handle(ClientMessage::Skip), over);
        assert_eq!(session.handle(ClientMessage::GetState), over);
        assert_eq!(session.game().score(), 20);
        assert_eq!(session.game().round_count(), 2);

        session.handle(ClientMessage::Restart);
        assert!(!session.is_game_over());
        let word = session.game().current_word().to_string();
        assert_eq!(
            session.handle(guess(&word))[0],
            ServerMessage::GuessResult {
                correct: true,
                score: 20
            }
        );
    }

    #[test]
    fn test_solved_word_scores_once() {
        let mut session = session(false);
        let word = session.game().current_word().to_string();
        session.handle(guess(&word));

        for _ in 0..3 {
            let replies = session.handle(guess(&word));
            assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
        }
        assert_eq!(session.game().score(), 20);

        // The next word can be scored again
        session.handle(ClientMessage::Skip);
        let word = session.game().current_word().to_string();
        assert_eq!(
            session.handle(guess(&word)),
            vec![ServerMessage::GuessResult {
                correct: true,
                score: 40
            }]
        );
    }

    #[test]
    fn test_huge_increment_does_not_panic() {
        let game = WordGame::with_rng(
            WordPool::new(["apple", "grape"]),
            GameSettings {
                max_rounds: 2,
                score_increment: u32::MAX,
            },
            StdRng::seed_from_u64(17),
        )
        .unwrap();
        let mut session = GameSession::new(game, false);

        let word = session.game().current_word().to_string();
        session.handle(guess(&word));
        session.handle(ClientMessage::Skip);
        let word = session.game().current_word().to_string();
        assert_eq!(
            session.handle(guess(&word)),
            vec![ServerMessage::GuessResult {
                correct: true,
                score: u32::MAX
            }]
        );
    }

    #[test]
    fn test_handle_touches_last_active() {
        let mut session = session(true);
        let before = session.last_active();
        std::thread::sleep(std::time::Duration::from_millis(5));
        session.handle(ClientMessage::GetState);
        assert!(session.last_active() > before);
    }
}
