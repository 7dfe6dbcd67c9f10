use thiserror::Error;

/// Why a sequence cannot be handed to the repeat-length engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedSequence {
    /// The sequence has no symbols at all.
    #[error("sequence is empty")]
    Empty,

    /// No sentinel terminates the sequence.
    #[error("sequence is not terminated by the sentinel")]
    MissingSentinel,

    /// The first sentinel is not the final symbol (it is either repeated or
    /// followed by bases).
    #[error("sentinel at position {position} is not the final symbol")]
    MisplacedSentinel { position: usize },
}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A character outside the DNA alphabet (and not the sentinel) was found.
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The engine's input precondition does not hold.
    #[error("Malformed sequence: {0}")]
    MalformedSequence(#[from] MalformedSequence),

    /// Generator weights are non-positive, duplicated or do not sum to one.
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// A builder or driver parameter is missing or out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A simulation configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a sequence source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_display() {
        let err = Error::InvalidSymbol {
            symbol: 'N',
            position: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("'N'"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_malformed_converts() {
        let err: Error = MalformedSequence::MisplacedSentinel { position: 3 }.into();
        assert!(matches!(
            err,
            Error::MalformedSequence(MalformedSequence::MisplacedSentinel { position: 3 })
        ));
        assert!(err.to_string().contains("position 3"));
    }
}
