mod board;
mod bot_controller;
mod game;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotStrategy, RandomBot, calculate_move};
pub use game::ConnectKGame;
pub use game_state::GameState;
pub use session::{GameMode, GameSession, MoveOutcome};
pub use types::{GameStatus, Mark, Player, Position, WinningLine};
pub use win_detector::{check_win, find_winning_line};
