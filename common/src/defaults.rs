pub const BOARD_SIZE: usize = 12;
pub const WIN_LENGTH: usize = 5;

/// Pause before a bot move is shown, in milliseconds.
pub const DEFAULT_BOT_DELAY_MS: u64 = 200;
