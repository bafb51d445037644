/// Errors surfaced outside of gameplay.
///
/// Missing targets and unwired collaborators during play are not errors;
/// those calls are skipped. These variants cover setup, input and I/O.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    /// A vessel has no opponent when play is about to start
    #[error("vessel {0} has no opponent; pair both vessels before starting")]
    Unpaired(String),
    /// A vessel id that does not belong to this battle
    #[error("unknown vessel #{0}")]
    UnknownVessel(usize),
    /// Invalid command line or configuration value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Failed to parse user input
    #[error("parse error: {0}")]
    ParseError(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using BattleError
pub type GameResult<T> = Result<T, BattleError>;

impl From<std::num::ParseIntError> for BattleError {
    fn from(err: std::num::ParseIntError) -> Self {
        BattleError::ParseError(err.to_string())
    }
}
