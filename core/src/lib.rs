//! The core of a parser-combinator library for Unicode text.  Parsers are
//! values, and larger parsers are assembled by combining smaller ones, without
//! any external grammar description language, parser generator, or separate
//! lexing phase.
//!
//! A [`Parser`] is a pure function from an input `&str` to either no match
//! (`None`) or an [`Outcome`], which pairs the unconsumed suffix of the input
//! with the ordered sequence of values the parser produced.  A failed parse
//! never carries a partial result and never advances the input.
//!
//! The building blocks are:
//!
//! * The elementary parsers [`pop`] and [`literal`], which consume one `char`
//! or one exact string.
//!
//! * The combinator algebra: [`choice`], [`sequence`], [`repeat`],
//! [`between`], [`map`], [`apply`], [`fold`], [`not`], [`drop`], [`end`], and
//! [`block`], with a few companions such as [`try_fold`] and [`at_end`].
//!
//! * The numeric-literal parsers in [`parser::premade`], built entirely from
//! the algebra.
//!
//! * [`Deferred`] and [`recursive`], for grammars that refer to themselves,
//! e.g. nested brackets or the value/array/object cycle of JSON.
//!
//! All input is consumed in whole Unicode scalar values; no combinator can
//! split a multi-byte character.
//!
//! ```
//! use parco_core::{block, literal, recursive, sequence, at_end};
//!
//! let parens = recursive(|this| block(literal("(".to_owned()),
//!                                      literal(")".to_owned()),
//!                                      this));
//! let whole = sequence([parens, at_end()]);
//!
//! assert!(whole.parse("(a (b) c)").is_some());
//! assert!(whole.parse("(a (b c)").is_none());
//! ```
//!
//! Parser values are `Send + Sync` and immutable after construction, so one
//! grammar may be shared freely across threads.

#![forbid(unsafe_code)]


pub mod outcome;
pub use outcome::Outcome;

pub mod parser;
pub use parser::Parser;

mod deferred;
pub use deferred::{Deferred, recursive};

mod elementary;
pub use elementary::*;

pub mod combinator;
pub use combinator::*;


/// Ordered choice over any number of parsers, as sugar for [`choice`].
///
/// `choice![a, b, c]` is `choice([a, b, c])`.
#[macro_export]
macro_rules! choice {
    ($($parser:expr),+ $(,)?) => {
        $crate::choice([$($parser),+])
    };
}

/// Sequencing of any number of parsers, as sugar for [`sequence`].
///
/// `sequence![a, b, c]` is `sequence([a, b, c])`.
#[macro_export]
macro_rules! sequence {
    ($($parser:expr),+ $(,)?) => {
        $crate::sequence([$($parser),+])
    };
}
