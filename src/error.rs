use thiserror::Error;

/// Failures raised before or during a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A guess fell outside [0, 1] or was NaN.
    #[error("guess {0} outside [0, 1]")]
    InvalidGuess(f64),
    /// Rejected run parameters. Raised before any round is played.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A strategy was handed state belonging to a different strategy kind.
    #[error("{strategy} strategy cannot step from {state} state")]
    StateMismatch { strategy: String, state: String },
}

pub type Result<T> = std::result::Result<T, Error>;
