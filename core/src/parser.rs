//! The `Parser` value type, and premade parsers built from the combinators.

use std::{fmt, sync::Arc};

use crate::Outcome;


/// Implementations provided for ready use.
pub mod premade
{
    mod numeric;
    pub use numeric::{int, binary, octal, hex, float};

    mod text;
    pub use text::{eol, spaces, whitespace};
}


/// The type of the functions a [`Parser`] wraps.  The returned leftover
/// borrows from the given input, for any input lifetime.
pub type ParseFn<T> = dyn for<'input> Fn(&'input str) -> Option<Outcome<'input, T>>
                          + Send + Sync;


/// An immutable, cheaply-clonable parser value that produces values of type
/// `T`.
///
/// A `Parser` is invoked with [`parse`](#method.parse) against any number of
/// inputs, from any number of threads.  It holds no mutable state, so two
/// invocations on the same input always give equal results.  `None` means no
/// match at the start of the input; it is not an error and nothing was
/// consumed.
///
/// Cloning a `Parser` only clones a reference to the shared function, so
/// grammars can reuse sub-parsers freely.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Parser<T> {
    /// Make a `Parser` from a function that follows the contract: on success
    /// it returns an [`Outcome`] whose leftover is a suffix of the given input
    /// that starts on a `char` boundary.
    ///
    /// The combinators of this crate are all made this way, and so may your
    /// own.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
        where F: for<'input> Fn(&'input str) -> Option<Outcome<'input, T>>
                 + Send + Sync + 'static,
    {
        Parser { run: Arc::new(f) }
    }

    /// Run this parser against the start of `input`.
    #[inline]
    pub fn parse<'input>(&self, input: &'input str) -> Option<Outcome<'input, T>> {
        (self.run)(input)
    }
}

impl<T> Clone for Parser<T> {
    #[inline]
    fn clone(&self) -> Self {
        Parser { run: Arc::clone(&self.run) }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}
