/// Errors produced while building or querying a DTLZ problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a configuration field is out of its valid range.
    #[error("invalid configuration ({parameter}): {reason}")]
    InvalidConfiguration {
        /// The name of the offending field.
        parameter: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when a decision vector does not have `dim` components.
    #[error("the size of the decision vector should be {expected} while {got} was detected")]
    SizeMismatch {
        /// The problem dimension.
        expected: usize,
        /// The length that was passed in.
        got: usize,
    },

    /// Returned when a population-level metric is asked for zero members.
    #[error("population is empty")]
    EmptyPopulation,

    /// Returned when persisted state cannot be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Returned when persisted state cannot be read from or written to disk.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self
    {
        Error::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}
