//! Error types for grammar estimation and parsing.

use thiserror::Error;

/// Failures of the estimator and the parser. Not finding a parse is not an
/// error: `CkyParser::parse` reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A training tree is not in Chomsky Normal Form.
    #[error("Invalid CNF tree at '{label}' with {arity} children: {reason}")]
    InvalidTree {
        label: String,
        arity: usize,
        reason: &'static str,
    },

    /// Scores, index or parses requested before any production was counted.
    #[error("Grammar is untrained: no productions have been counted")]
    UntrainedGrammar,

    /// Counting after scores were computed, `reset` to train again.
    #[error("Grammar is frozen: counts can't change after scoring")]
    GrammarFrozen,

    /// The parsing index was requested before scoring the grammar.
    #[error("Scores must be computed before building the parsing index")]
    ScoresNotComputed,

    /// A production's left-hand side has no total count to divide by.
    #[error("No productions counted for left-hand side '{lhs}'")]
    ZeroLhsCount { lhs: String },

    #[error("Cannot parse an empty token sequence")]
    EmptyInput,

    #[error("Input has {len} tokens, the parser accepts at most {max}")]
    InputTooLong { len: usize, max: usize },
}
