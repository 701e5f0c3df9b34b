//! Late-bound parsers, for grammars that refer to themselves.

use std::{fmt, sync::{Arc, OnceLock, Weak}};

use tracing::debug;

use crate::{Outcome, Parser};


/// A parser cell that is created empty, handed out (via
/// [`parser`](#method.parser)) to the definition of a grammar that needs to
/// refer to it, and then filled exactly once with [`define`](#method.define).
///
/// This is how recursive and mutually-recursive grammars are built: the
/// handles invoke whatever parser the cell is eventually filled with.  E.g. a
/// JSON value parser whose array and object rules contain values, or a
/// bracket matcher whose contents may contain the same bracket form.
///
/// `define` consumes the `Deferred`, so a cell can never be filled twice, and
/// once filled it stays filled for as long as any handle exists.
///
/// The handles returned by `parser` own the cell.  A cell whose definition
/// contains its own handles therefore keeps itself alive, and is never freed.
/// Use [`recursive`] for a parser that refers directly to itself, which does
/// not have this cycle.
///
/// ```
/// use parco_core::{Deferred, choice, between, literal};
///
/// let nested = Deferred::new();
/// let inner = choice([between(literal("["), nested.parser(), literal("]")),
///                     literal("x")]);
/// let nested = nested.define(inner);
///
/// assert_eq!(nested.parse("[[x]]").map(|o| o.into_produced()),
///            Some(vec!["x"]));
/// ```
pub struct Deferred<T> {
    cell: Arc<OnceLock<Parser<T>>>,
}

fn invoke<'input, T>(cell: &OnceLock<Parser<T>>, input: &'input str)
    -> Option<Outcome<'input, T>>
{
    match cell.get() {
        Some(parser) => parser.parse(input),
        None => panic!("deferred parser invoked before being defined"),
    }
}

impl<T> Deferred<T>
    where T: 'static,
{
    /// Make a new, empty cell.
    pub fn new() -> Self {
        Deferred { cell: Arc::new(OnceLock::new()) }
    }

    /// A handle that invokes whatever this cell will be defined as.
    ///
    /// # Panics
    ///
    /// Invoking the returned `Parser` panics if the cell has not been defined
    /// yet.
    pub fn parser(&self) -> Parser<T> {
        let cell = Arc::clone(&self.cell);
        Parser::from_fn(move |input| invoke(&cell, input))
    }

    /// Like [`parser`](#method.parser), but the handle does not own the cell.
    /// Invoking it panics once every owner is gone.
    fn weak_parser(&self) -> Parser<T> {
        let cell: Weak<OnceLock<Parser<T>>> = Arc::downgrade(&self.cell);
        Parser::from_fn(move |input| match cell.upgrade() {
            Some(cell) => invoke(&cell, input),
            None => panic!("recursive parser invoked after its definition was dropped"),
        })
    }

    /// Fill the cell with `parser`, and return a `Parser` that owns the cell.
    /// All the handles previously returned by [`parser`](#method.parser) now
    /// invoke `parser`.
    pub fn define(self, parser: Parser<T>) -> Parser<T> {
        let Deferred { cell } = self;
        if cell.set(parser).is_err() {
            unreachable!("a `Deferred` is consumed by its only definition");
        }
        debug!(handles = Arc::strong_count(&cell) - 1 + Arc::weak_count(&cell),
               "deferred parser defined");
        Parser::from_fn(move |input| invoke(&cell, input))
    }
}

impl<T> Default for Deferred<T>
    where T: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
         .field("defined", &self.cell.get().is_some())
         .finish()
    }
}


/// Build a self-referential parser.  `build` is given a handle to the parser
/// being built, and whatever it returns becomes that parser.
///
/// This is a shorthand for making a [`Deferred`], passing its
/// [`parser`](struct.Deferred.html#method.parser) to `build`, and
/// [`define`](struct.Deferred.html#method.define)-ing it with the result.
///
/// The handle given to `build` refers to the parser weakly, so the
/// self-reference does not keep the parser alive by itself.
///
/// # Panics
///
/// Invoking the handle during `build` (instead of only capturing it inside the
/// returned grammar) panics, since the parser is not defined yet.  So does
/// invoking a copy of the handle that outlives the returned parser.
pub fn recursive<T, F>(build: F) -> Parser<T>
    where F: FnOnce(Parser<T>) -> Parser<T>,
          T: 'static,
{
    let deferred = Deferred::new();
    let parser = build(deferred.weak_parser());
    deferred.define(parser)
}
