use crate::games::SessionRng;
use super::game::ConnectKGame;
use super::types::Position;

/// Move selection for a computer opponent.
///
/// Given a non-empty candidate list an implementation must return one of its
/// elements; given an empty list it must return `None`.
pub trait BotStrategy {
    fn choose_move(&mut self, moves: &[Position]) -> Option<Position>;
}

/// Picks uniformly among the candidates.
pub struct RandomBot {
    rng: SessionRng,
}

impl RandomBot {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl BotStrategy for RandomBot {
    fn choose_move(&mut self, moves: &[Position]) -> Option<Position> {
        let idx = self.rng.pick_index(moves.len())?;
        Some(moves[idx])
    }
}

/// Asks `bot` for a move in the current position. Never consults the bot once
/// the game is over.
pub fn calculate_move(bot: &mut dyn BotStrategy, game: &ConnectKGame) -> Option<Position> {
    if game.is_game_over() {
        return None;
    }
    let available_moves = game.valid_moves();
    if available_moves.is_empty() {
        return None;
    }
    bot.choose_move(&available_moves)
}
