//! Error types for grammar expansion and turtle interpretation.

use thiserror::Error;

/// Errors returned by the grammar engine and the turtle interpreter.
///
/// Grammar *parsing* never fails; the text format is permissive and
/// malformed lines are skipped. A missing axiom is likewise not an error:
/// every generation of an axiom-less grammar is the empty string.
#[derive(Debug, Error)]
pub enum VerdureError {
    /// A `]` was interpreted with no matching `[` on the pose stack.
    ///
    /// This is fatal: continuing from an undefined pose would silently
    /// corrupt every segment drawn after it.
    #[error("pose stack underflow at symbol index {index}: ']' without a matching '['")]
    StackUnderflow {
        /// Character index of the offending symbol in the generation string.
        index: usize,
    },

    /// The requested generation index exceeds the configured cap.
    #[error("generation {requested} exceeds the configured maximum of {limit}")]
    GenerationLimit { requested: usize, limit: usize },

    /// A rewrite step would grow the generation string past the configured
    /// symbol cap. Previously cached generations remain valid.
    #[error("generation {generation} would hold {length} symbols, over the maximum of {limit}")]
    SymbolLimit {
        generation: usize,
        length: usize,
        limit: usize,
    },

    /// Reading a grammar file failed.
    #[error("failed to read grammar: {0}")]
    Io(#[from] std::io::Error),
}
