use crate::defaults::{BOARD_SIZE, WIN_LENGTH};
use crate::error::EngineError;
use super::game_state::GameState;
use super::types::{GameStatus, Mark, Player, Position, WinningLine};
use super::win_detector::{check_win, find_winning_line};

/// Rules engine for one game session. Sole owner and mutator of its [`GameState`].
#[derive(Debug, Clone)]
pub struct ConnectKGame {
    state: GameState,
    win_length: usize,
}

impl ConnectKGame {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self {
            state: GameState::new(size)?,
            win_length: WIN_LENGTH,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn size(&self) -> usize {
        self.state.size()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Mark, EngineError> {
        self.state.cell_at(row, col)
    }

    pub fn snapshot(&self) -> Vec<Vec<Mark>> {
        self.state.snapshot()
    }

    pub fn board_key(&self) -> Vec<String> {
        self.state.board.to_key()
    }

    /// Empty cells in row-major order, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.game_over {
            return Vec::new();
        }
        self.state.board.available_moves()
    }

    /// In bounds and empty. Deliberately ignores whether the game is over;
    /// combine with [`is_game_over`](Self::is_game_over) where that matters.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.state.board.is_valid_move(row, col)
    }

    /// Places the current player's mark. Returns `false` without touching the
    /// state when the game is over or the cell is unavailable.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if self.state.game_over || !self.is_valid_move(row, col) {
            return false;
        }

        let player = self.state.current_player;
        self.state.board.set(row, col, Mark::from(player));

        if check_win(&self.state.board, player, self.win_length) {
            self.state.winner = Some(player);
            self.state.game_over = true;
            return true;
        }

        if self.state.board.is_full() {
            self.state.winner = None;
            self.state.game_over = true;
            return true;
        }

        self.state.current_player = player.opponent();
        true
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        let winner = self.state.winner?;
        find_winning_line(&self.state.board, winner, self.win_length)
    }

    /// `(start, end)` of the recorded winner's line. Recomputed on each call.
    pub fn winning_line_coords(&self) -> Option<(Position, Position)> {
        self.winning_line().map(|line| (line.start, line.end))
    }

    /// Starts over on a fresh board of the same size and returns its key.
    pub fn reset(&mut self) -> Vec<String> {
        self.state = GameState::empty(self.size());
        self.board_key()
    }
}

impl Default for ConnectKGame {
    fn default() -> Self {
        Self {
            state: GameState::empty(BOARD_SIZE),
            win_length: WIN_LENGTH,
        }
    }
}
