//! Balanced parentheses, where the content between a pair may contain more
//! balanced pairs.

use crate::{Parser, block, literal, map, recursive, common::parse_all};


/// The self-nesting `(`...`)` block grammar.  Produces each consumed character
/// as a one-character `String`, in order.
pub fn matcher() -> Parser<String> {
    recursive(|nested| block(map(String::from, literal("(")),
                             map(String::from, literal(")")),
                             nested))
}

/// If the whole of `input` is one balanced pair, the consumed characters.
pub fn matches(input: &str) -> Option<Vec<String>> {
    parse_all(&matcher(), input).ok()
}
