pub mod config;
pub mod defaults;
pub mod error;
pub mod games;
pub mod logger;

pub use defaults::{BOARD_SIZE, DEFAULT_BOT_DELAY_MS, WIN_LENGTH};
pub use error::EngineError;
pub use games::SessionRng;
pub use games::connect_k::{
    BotStrategy, ConnectKGame, GameMode, GameSession, GameState, GameStatus, Mark, MoveOutcome,
    Player, Position, RandomBot, WinningLine,
};
