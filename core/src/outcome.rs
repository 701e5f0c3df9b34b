//! The value a successful parse step yields.


/// What a [`Parser`](../struct.Parser.html) yields when it matches: the
/// unconsumed suffix of its input, and the values it produced, in the order
/// they were discovered.
///
/// The `remaining` slice always borrows a suffix of the very string given to
/// the parser that made this `Outcome`; it is never copied.  The `produced`
/// sequence may be empty, e.g. after [`drop`](../fn.drop.html),
/// [`not`](../fn.not.html), or zero matches of [`repeat`](../fn.repeat.html).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Outcome<'input, T> {
    remaining: &'input str,
    produced: Vec<T>,
}

impl<'input, T> Outcome<'input, T> {
    /// Pair the given leftover input with the given produced values.  No
    /// validation is done.
    #[inline]
    pub fn make(remaining: &'input str, produced: Vec<T>) -> Self {
        Outcome { remaining, produced }
    }

    /// The unconsumed suffix of the input.
    #[inline]
    pub fn remaining(&self) -> &'input str {
        self.remaining
    }

    /// The values produced, in left-to-right discovery order.
    #[inline]
    pub fn produced(&self) -> &[T] {
        &self.produced
    }

    /// Take the produced values, discarding the leftover.
    #[inline]
    pub fn into_produced(self) -> Vec<T> {
        self.produced
    }

    /// Take both parts.
    #[inline]
    pub fn into_parts(self) -> (&'input str, Vec<T>) {
        (self.remaining, self.produced)
    }

    /// How many bytes of `input` were consumed to reach this `Outcome`.
    /// `input` must be the string the producing parser was given.
    ///
    /// # Panics
    ///
    /// If `input` is shorter than the leftover, since then it cannot be what
    /// was parsed.
    #[inline]
    pub fn consumed(&self, input: &str) -> usize {
        assert!(input.len() >= self.remaining.len(),
                "`input` is shorter than the leftover, so it is not what was parsed");
        input.len() - self.remaining.len()
    }
}
