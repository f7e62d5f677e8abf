use crate::defaults::WIN_LENGTH;
use crate::error::EngineError;
use super::board::Board;
use super::types::{GameStatus, Mark, Player};

/// Board contents plus turn and terminal bookkeeping.
///
/// Only the engine mutates a `GameState`; everyone else sees `&GameState`
/// or a [`snapshot`](GameState::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) game_over: bool,
}

impl GameState {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidConfiguration(
                "board size must be positive".to_string(),
            ));
        }
        if size < WIN_LENGTH {
            return Err(EngineError::InvalidConfiguration(format!(
                "board size ({}) cannot be smaller than win length ({})",
                size, WIN_LENGTH
            )));
        }

        Ok(Self::empty(size))
    }

    /// Size must already be validated.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::X,
            winner: None,
            game_over: false,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Drawn,
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Mark, EngineError> {
        self.board.get(row, col).ok_or(EngineError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })
    }

    pub fn snapshot(&self) -> Vec<Vec<Mark>> {
        self.board.rows().to_vec()
    }
}
