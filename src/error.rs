use std::fmt;

/// Error type for distribution operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// A precondition on an argument does not hold.
    InvalidArgument(String),
    /// The operation would leave no probability mass to normalize.
    DegenerateDistribution,
}

impl DiceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DiceError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for DiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            DiceError::DegenerateDistribution => write!(f, "Degenerate distribution: no probability mass left"),
        }
    }
}

impl std::error::Error for DiceError {}
