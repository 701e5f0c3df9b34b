//! Parsers for common kinds of blank text.

use crate::{Parser, choice, literal, repeat1};


/// A line ending: `"\n"`, `"\r\n"`, or `"\r"`, tried in that order.
pub fn eol() -> Parser<&'static str> {
    choice([literal("\n"), literal("\r\n"), literal("\r")])
}

/// One or more spaces or tabs.
pub fn spaces() -> Parser<&'static str> {
    repeat1(choice([literal(" "), literal("\t")]))
}

/// One or more spaces, tabs, or line endings.
pub fn whitespace() -> Parser<&'static str> {
    repeat1(choice([spaces(), eol()]))
}
