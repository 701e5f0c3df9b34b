use tracing::debug;

use crate::{Error, Parser, Result};


/// Run `parser` against `input`, requiring it to consume all of `input`, and
/// return what it produced.
///
/// A no-match is [`Error::NoMatch`].  A match that leaves some of `input`
/// unconsumed is [`Error::TrailingInput`], which locates the leftover.
pub fn parse_all<T>(parser: &Parser<T>, input: &str) -> Result<Vec<T>> {
    let Some(outcome) = parser.parse(input) else {
        debug!(input_len = input.len(), "no match");
        return Err(Error::NoMatch);
    };
    let (remaining, produced) = outcome.into_parts();
    if remaining.is_empty() {
        Ok(produced)
    } else {
        let offset = input.len() - remaining.len();
        debug!(offset, remaining = remaining.len(), "trailing input");
        Err(Error::TrailingInput { offset, remaining: remaining.len() })
    }
}
