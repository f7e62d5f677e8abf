use serde::{Deserialize, Serialize};

use crate::log;
use super::bot_controller::{BotStrategy, calculate_move};
use super::game::ConnectKGame;
use super::types::{GameStatus, Player, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsBot,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "Human vs Human"),
            GameMode::PlayerVsBot => write!(f, "Human vs AI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected,
    Continued,
    Won {
        winner: Player,
        line: Option<WinningLine>,
    },
    Drawn,
}

/// One game between two sides, at most one of them a bot.
///
/// Every move, human or bot, is applied here so the engine has exactly one
/// writer.
pub struct GameSession {
    game: ConnectKGame,
    mode: GameMode,
    bot_player: Player,
    bot: Box<dyn BotStrategy>,
}

impl GameSession {
    pub fn new(mode: GameMode, bot_player: Player, bot: Box<dyn BotStrategy>) -> Self {
        let game = ConnectKGame::default();
        log!(
            "Starting {} game on a {}x{} board, {} in a row wins",
            mode,
            game.size(),
            game.size(),
            game.win_length()
        );
        Self {
            game,
            mode,
            bot_player,
            bot,
        }
    }

    pub fn game(&self) -> &ConnectKGame {
        &self.game
    }

    pub fn bot_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::PlayerVsBot => Some(self.bot_player),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot
            && !self.game.is_game_over()
            && self.game.current_player() == self.bot_player
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PlayerVsPlayer => true,
            GameMode::PlayerVsBot => self.game.current_player() != self.bot_player,
        }
    }

    /// Whether a human pointing at this cell should see it highlighted.
    pub fn hover_cell(&self, row: usize, col: usize) -> bool {
        self.is_human_turn() && !self.game.is_game_over() && self.game.is_valid_move(row, col)
    }

    pub fn submit_human_move(&mut self, position: Position) -> MoveOutcome {
        if !self.is_human_turn() {
            return MoveOutcome::Rejected;
        }
        self.apply(position)
    }

    /// Lets the bot move if it is its turn. Returns the chosen cell and result.
    pub fn play_bot_turn(&mut self) -> Option<(Position, MoveOutcome)> {
        if !self.is_bot_turn() {
            return None;
        }

        let Some(position) = calculate_move(self.bot.as_mut(), &self.game) else {
            log!("Bot ({}) found no move to play", self.bot_player);
            return None;
        };

        log!("Bot ({}) chose {}", self.bot_player, position);
        let outcome = self.apply(position);
        Some((position, outcome))
    }

    pub fn reset(&mut self) {
        self.game.reset();
        log!("Game reset");
    }

    pub fn status_message(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s Turn", self.game.current_player()),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Drawn => "It's a Draw!".to_string(),
        }
    }

    fn apply(&mut self, position: Position) -> MoveOutcome {
        if !self.game.apply_move(position.row, position.col) {
            return MoveOutcome::Rejected;
        }

        match self.game.status() {
            GameStatus::InProgress => MoveOutcome::Continued,
            GameStatus::Won(winner) => {
                let line = self.game.winning_line();
                match line {
                    Some(line) => {
                        log!("Player {} wins with {} -> {}", winner, line.start, line.end)
                    }
                    None => log!("Player {} wins but no line was found", winner),
                }
                MoveOutcome::Won { winner, line }
            }
            GameStatus::Drawn => {
                log!("Game drawn, board is full");
                MoveOutcome::Drawn
            }
        }
    }
}
