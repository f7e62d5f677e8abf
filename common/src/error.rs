/// Precondition violations by a caller of the engine.
///
/// Rejected moves are not errors: `apply_move` reports them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
