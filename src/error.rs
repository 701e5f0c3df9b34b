use thiserror::Error;


/// The ways a whole-input parse can fail.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum Error {
    /// The parser did not match at the start of the input.
    #[error("no match at the start of the input")]
    NoMatch,
    /// The parser matched a prefix of the input but not all of it.
    #[error("unconsumed input: {remaining} bytes starting at byte {offset}")]
    TrailingInput {
        /// Byte offset, in the input, of the first unconsumed character.
        offset: usize,
        /// Length, in bytes, of the unconsumed rest of the input.
        remaining: usize,
    },
}

/// `Result` with this crate's [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
