//! The combinator algebra: functions that make new parsers from existing ones.
//!
//! Every combinator here is atomic: when the parser it makes fails, nothing is
//! consumed and no partial result is surfaced, regardless of how far its
//! sub-parsers got.

use tracing::{trace, trace_span};

use crate::{Outcome, Parser, pop, succeed};


/// Ordered choice.  Tries each of `parsers` in order, against the same input,
/// and yields the first success.  Fails only if all fail; an empty list
/// always fails.
///
/// This is left-biased: the first alternative to match wins, even if a later
/// one would consume more.  Nesting choices is the same as flattening them.
pub fn choice<T, I>(parsers: I) -> Parser<T>
    where I: IntoIterator<Item = Parser<T>>,
          T: 'static,
{
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::from_fn(move |input| parsers.iter().find_map(|p| p.parse(input)))
}


/// Sequencing.  Runs each of `parsers` in order, each on the leftover of the
/// previous, and concatenates their produced values.  If any fails, the whole
/// fails.  An empty list always succeeds without consuming.
pub fn sequence<T, I>(parsers: I) -> Parser<T>
    where I: IntoIterator<Item = Parser<T>>,
          T: 'static,
{
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::from_fn(move |input| {
        let mut remaining = input;
        let mut produced = Vec::new();
        for p in &parsers {
            let (rest, values) = p.parse(remaining)?.into_parts();
            remaining = rest;
            produced.extend(values);
        }
        Some(Outcome::make(remaining, produced))
    })
}


/// Zero or more.  Applies `p` repeatedly, each time on the previous leftover,
/// until it fails, and then succeeds with all the produced values so far (none
/// if `p` never matched).  Never fails.
///
/// # Panics
///
/// `p` must consume at least one character every time it succeeds, or this
/// would loop forever.  Invoking the returned parser panics instead when `p`
/// succeeds without consuming anything, which is a bug in the grammar.
pub fn repeat<T>(p: Parser<T>) -> Parser<T>
    where T: 'static,
{
    Parser::from_fn(move |input| {
        let mut remaining = input;
        let mut produced = Vec::new();
        while let Some(outcome) = p.parse(remaining) {
            let (rest, values) = outcome.into_parts();
            assert!(rest.len() < remaining.len(),
                    "repeated parser succeeded without consuming input, \
                     so the repetition could never end");
            remaining = rest;
            produced.extend(values);
        }
        Some(Outcome::make(remaining, produced))
    })
}


/// One or more.  The same as `sequence([p.clone(), repeat(p)])`.
pub fn repeat1<T>(p: Parser<T>) -> Parser<T>
    where T: 'static,
{
    sequence([p.clone(), repeat(p)])
}


/// Match `left`, `middle`, and `right` in sequence, producing only what
/// `middle` produces.  Fails if any of the three fails.
pub fn between<L, T, R>(left: Parser<L>, middle: Parser<T>, right: Parser<R>) -> Parser<T>
    where L: 'static,
          T: 'static,
          R: 'static,
{
    sequence([drop(left), middle, drop(right)])
}


/// Transform each produced value of `p` with `f`.  The leftover is untouched.
pub fn map<T, U, F>(f: F, p: Parser<T>) -> Parser<U>
    where F: Fn(T) -> U + Send + Sync + 'static,
          T: 'static,
          U: 'static,
{
    Parser::from_fn(move |input| {
        let (remaining, produced) = p.parse(input)?.into_parts();
        Some(Outcome::make(remaining, produced.into_iter().map(&f).collect()))
    })
}


/// Replace the whole produced sequence of `p` with what `f` returns when given
/// all of it at once.
pub fn apply<T, U, F>(f: F, p: Parser<T>) -> Parser<U>
    where F: Fn(Vec<T>) -> Vec<U> + Send + Sync + 'static,
          T: 'static,
          U: 'static,
{
    Parser::from_fn(move |input| {
        let (remaining, produced) = p.parse(input)?.into_parts();
        Some(Outcome::make(remaining, f(produced)))
    })
}


/// Like [`apply`], but `f` may reject the produced sequence by returning
/// `None`, which makes the whole parser fail.
pub fn try_apply<T, U, F>(f: F, p: Parser<T>) -> Parser<U>
    where F: Fn(Vec<T>) -> Option<Vec<U>> + Send + Sync + 'static,
          T: 'static,
          U: 'static,
{
    Parser::from_fn(move |input| {
        let (remaining, produced) = p.parse(input)?.into_parts();
        Some(Outcome::make(remaining, f(produced)?))
    })
}


/// Reduce the produced sequence of `p`, left to right, into a single value.
/// Starting with `seed`, each element and the accumulator so far are given to
/// `f`, as `f(element, accumulator)`, which returns the new accumulator.  The
/// final accumulator is the only produced value.
pub fn fold<T, A, F>(f: F, seed: A, p: Parser<T>) -> Parser<A>
    where F: Fn(T, A) -> A + Send + Sync + 'static,
          A: Clone + Send + Sync + 'static,
          T: 'static,
{
    Parser::from_fn(move |input| {
        let (remaining, produced) = p.parse(input)?.into_parts();
        let accum = produced.into_iter().fold(seed.clone(), |accum, elem| f(elem, accum));
        Some(Outcome::make(remaining, vec![accum]))
    })
}


/// Like [`fold`], but any step may reject by returning `None`, which makes the
/// whole parser fail.  E.g. for accumulations that can overflow.
pub fn try_fold<T, A, F>(f: F, seed: A, p: Parser<T>) -> Parser<A>
    where F: Fn(T, A) -> Option<A> + Send + Sync + 'static,
          A: Clone + Send + Sync + 'static,
          T: 'static,
{
    Parser::from_fn(move |input| {
        let (remaining, produced) = p.parse(input)?.into_parts();
        let accum = produced.into_iter().try_fold(seed.clone(), |accum, elem| f(elem, accum))?;
        Some(Outcome::make(remaining, vec![accum]))
    })
}


/// Negative lookahead.  Succeeds iff `p` fails, and never consumes input.
///
/// Zero-width: on success the leftover is the whole input and nothing is
/// produced.
pub fn not<T, U>(p: Parser<T>) -> Parser<U>
    where T: 'static,
          U: 'static,
{
    Parser::from_fn(move |input| match p.parse(input) {
        Some(_) => None,
        None => Some(Outcome::make(input, Vec::new())),
    })
}


/// Run `p` but discard what it produces, keeping only its leftover.  Since
/// nothing is produced, the result can stand in for a parser of any type.
pub fn drop<T, U>(p: Parser<T>) -> Parser<U>
    where T: 'static,
          U: 'static,
{
    Parser::from_fn(move |input| {
        let remaining = p.parse(input)?.remaining();
        Some(Outcome::make(remaining, Vec::new()))
    })
}


/// Succeed iff `p` succeeds and leaves no input unconsumed.
pub fn end<T>(p: Parser<T>) -> Parser<T>
    where T: 'static,
{
    Parser::from_fn(move |input| {
        let outcome = p.parse(input)?;
        outcome.remaining().is_empty().then_some(outcome)
    })
}


/// Succeed iff the input is empty.  This is `end(succeed())`.
///
/// Zero-width: consumes and produces nothing.
pub fn at_end<T>() -> Parser<T>
    where T: 'static,
{
    end(succeed())
}


/// Match a delimited block: `start`, then any amount of content, then
/// `terminator`.  The content is a repetition of either `escape` or else any
/// one character that does not begin a `terminator` match, tried in that
/// order.  Everything matched is produced, with the content characters
/// converted into `T`.
///
/// `escape` may be a [`Deferred`](struct.Deferred.html) handle to the block
/// itself (or to an enclosing grammar), which allows self-nesting content like
/// balanced brackets.  Use [`fail`](fn.fail.html) for no escapes.
///
/// Fails if `start` fails, or if the input runs out before `terminator`
/// matches.
pub fn block<T>(start: Parser<T>, terminator: Parser<T>, escape: Parser<T>) -> Parser<T>
    where T: From<char> + 'static,
{
    let munch = sequence([not(terminator.clone()), map(|c: char| T::from(c), pop())]);
    let content = choice([escape, munch]);
    sequence([start, repeat(content), terminator])
}


/// Behave exactly like `p`, but also emit `tracing` events, at the `TRACE`
/// level, within a span named `parse` with the given `label`, for each
/// invocation.  For debugging grammars.
pub fn traced<T, S>(label: S, p: Parser<T>) -> Parser<T>
    where S: AsRef<str> + Send + Sync + 'static,
          T: 'static,
{
    Parser::from_fn(move |input| {
        let span = trace_span!("parse", parser = label.as_ref());
        let _entered = span.enter();
        let outcome = p.parse(input);
        match &outcome {
            Some(o) => trace!(consumed = o.consumed(input),
                              produced = o.produced().len(),
                              "matched"),
            None => trace!(remaining = input.len(), "no match"),
        }
        outcome
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{literal, fail};

    fn lit(s: &'static str) -> Parser<&'static str> {
        literal(s)
    }

    #[test]
    fn choice_table() {
        macro_rules! test {
            ($input:expr, [$($p:expr),*] => $expected:expr) => {
                assert_eq!(choice([$(lit($p)),*]).parse($input), $expected);
            };
        }
        test!("123", ["1"] => Some(Outcome::make("23", vec!["1"])));
        test!("123", ["2"] => None);
        test!("123", ["1", "2"] => Some(Outcome::make("23", vec!["1"])));
        test!("123", ["2", "1"] => Some(Outcome::make("23", vec!["1"])));
        test!("123", ["3", "2", "1"] => Some(Outcome::make("23", vec!["1"])));
        test!("123", ["2", "3"] => None);
        test!("", ["2"] => None);
        test!("", ["2", "3"] => None);
        assert_eq!(choice(Vec::<Parser<&str>>::new()).parse("123"), None);
    }

    #[test]
    fn choice_left_bias() {
        let p = choice([lit("1"), lit("12")]);
        assert_eq!(p.parse("123"), Some(Outcome::make("23", vec!["1"])));
        let p = choice([lit("12"), lit("1")]);
        assert_eq!(p.parse("123"), Some(Outcome::make("3", vec!["12"])));
    }

    #[test]
    fn choice_flattens() {
        let nested = choice([choice([lit("a"), lit("b")]), lit("c")]);
        let flat = crate::choice![lit("a"), lit("b"), lit("c")];
        for input in ["a", "b", "c", "d", ""] {
            assert_eq!(nested.parse(input), flat.parse(input));
        }
    }

    #[test]
    fn choice_long_chain() {
        let p = choice((0 .. 10_000).map(|_| lit("x")).chain([lit("y")]));
        assert_eq!(p.parse("y"), Some(Outcome::make("", vec!["y"])));
    }

    #[test]
    fn sequence_table() {
        macro_rules! test {
            ($input:expr, [$($p:expr),*] => $expected:expr) => {
                assert_eq!(sequence([$(lit($p)),*]).parse($input), $expected);
            };
        }
        test!("123", ["1"] => Some(Outcome::make("23", vec!["1"])));
        test!("123", ["2"] => None);
        test!("123", ["1", "2"] => Some(Outcome::make("3", vec!["1", "2"])));
        test!("123", ["1", "2", "3"] => Some(Outcome::make("", vec!["1", "2", "3"])));
        test!("123", ["2", "1"] => None);
        test!("123", ["2", "3"] => None);
        test!("123", ["1", "3"] => None);
        test!("", ["2"] => None);
        test!("", ["2", "3"] => None);
        assert_eq!(sequence(Vec::<Parser<&str>>::new()).parse("123"),
                   Some(Outcome::make("123", vec![])));
    }

    #[test]
    fn sequence_macro() {
        let p = crate::sequence![lit("a"), lit("b"),];
        assert_eq!(p.parse("abc"), Some(Outcome::make("c", vec!["a", "b"])));
    }

    #[test]
    fn repeat_table() {
        assert_eq!(repeat(lit("1")).parse("123"), Some(Outcome::make("23", vec!["1"])));
        assert_eq!(repeat(lit("2")).parse("123"), Some(Outcome::make("123", vec![])));
        assert_eq!(repeat(lit("1")).parse("1123"), Some(Outcome::make("23", vec!["1", "1"])));
        assert_eq!(repeat(lit("2")).parse("1123"), Some(Outcome::make("1123", vec![])));
        assert_eq!(repeat(lit("2")).parse(""), Some(Outcome::make("", vec![])));
    }

    #[test]
    #[should_panic(expected = "without consuming input")]
    fn repeat_zero_width_panics() {
        let _ = repeat(succeed::<char>()).parse("abc");
    }

    #[test]
    fn repeat1_needs_one() {
        assert_eq!(repeat1(lit("1")).parse("23"), None);
        assert_eq!(repeat1(lit("1")).parse("1123"), Some(Outcome::make("23", vec!["1", "1"])));
    }

    #[test]
    fn between_keeps_middle() {
        let p = between(lit("("), pop(), lit(")"));
        assert_eq!(p.parse("(x)y"), Some(Outcome::make("y", vec!['x'])));
        assert_eq!(p.parse("(x"), None);
        assert_eq!(p.parse("x)"), None);
    }

    #[test]
    fn map_table() {
        let to_int = |s: &str| s.parse::<i32>().unwrap_or(-1);
        assert_eq!(map(to_int, lit("2")).parse("123"), None);
        assert_eq!(map(to_int, lit("1")).parse("123"), Some(Outcome::make("23", vec![1])));
        assert_eq!(map(|c: char| c.to_ascii_uppercase(), repeat(pop())).parse("ab"),
                   Some(Outcome::make("", vec!['A', 'B'])));
    }

    #[test]
    fn apply_table() {
        let without_2 = |chars: Vec<char>| chars.into_iter().filter(|c| *c != '2').collect();
        assert_eq!(apply(without_2, map(|_| '2', lit("2"))).parse("123"), None);
        assert_eq!(apply(without_2, repeat(pop())).parse("123"),
                   Some(Outcome::make("", vec!['1', '3'])));
        let count = |chars: Vec<char>| vec![chars.len()];
        assert_eq!(apply(count, repeat(pop())).parse("♥♥♥"), Some(Outcome::make("", vec![3])));
    }

    #[test]
    fn try_apply_rejects() {
        let evens = |n: Vec<usize>| n.iter().all(|n| n % 2 == 0).then_some(n);
        let len = map(|s: &str| s.len(), choice([lit("ab"), lit("a")]));
        assert_eq!(try_apply(evens, len.clone()).parse("abc"), Some(Outcome::make("c", vec![2])));
        assert_eq!(try_apply(evens, len).parse("ac"), None);
    }

    #[test]
    fn fold_table() {
        let keep = |c: char, mut accum: Vec<char>| {
            if c != '2' {
                accum.push(c);
            }
            accum
        };
        assert_eq!(fold(keep, Vec::new(), map(|_| '2', lit("2"))).parse("123"), None);
        assert_eq!(fold(keep, Vec::new(), repeat(pop())).parse("123"),
                   Some(Outcome::make("", vec![vec!['1', '3']])));
        assert_eq!(fold(keep, Vec::new(), repeat(pop())).parse(""),
                   Some(Outcome::make("", vec![vec![]])));
    }

    #[test]
    fn fold_order() {
        let concat = |s: &str, accum: String| accum + s;
        assert_eq!(fold(concat, String::new(), repeat(choice([lit("a"), lit("b")]))).parse("abba"),
                   Some(Outcome::make("", vec!["abba".to_owned()])));
    }

    #[test]
    fn try_fold_rejects() {
        let add = |c: char, sum: u8| sum.checked_add(u8::try_from(c.to_digit(10)?).ok()?);
        assert_eq!(try_fold(add, 0, repeat(pop())).parse("123"), Some(Outcome::make("", vec![6])));
        assert_eq!(try_fold(add, 0, repeat(pop())).parse("12x"), None);
        assert_eq!(try_fold(add, 250, repeat(pop())).parse("99"), None);
    }

    #[test]
    fn not_table() {
        assert_eq!(not::<_, char>(lit("foo")).parse("foo"), None);
        assert_eq!(not::<_, char>(lit("foo")).parse("bar"), Some(Outcome::make("bar", vec![])));
        assert_eq!(not::<_, char>(lit("foo")).parse(""), Some(Outcome::make("", vec![])));
    }

    #[test]
    fn drop_table() {
        assert_eq!(drop::<_, char>(pop()).parse("12"), Some(Outcome::make("2", vec![])));
        assert_eq!(drop::<_, char>(lit("12")).parse("12"), Some(Outcome::make("", vec![])));
        assert_eq!(drop::<_, char>(lit("3")).parse("12"), None);
    }

    #[test]
    fn end_table() {
        assert_eq!(end(pop()).parse("12"), None);
        assert_eq!(end(lit("12")).parse("12"), Some(Outcome::make("", vec!["12"])));
        assert_eq!(sequence([pop(), at_end()]).parse("1"), Some(Outcome::make("", vec!['1'])));
        assert_eq!(sequence([pop(), at_end()]).parse("12"), None);
        assert_eq!(at_end::<char>().parse(""), Some(Outcome::make("", vec![])));
        assert_eq!(at_end::<char>().parse("x"), None);
    }

    fn s(p: Parser<&'static str>) -> Parser<String> {
        map(String::from, p)
    }

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| (*p).to_owned()).collect()
    }

    #[test]
    fn block_with_escape() {
        let p = block(s(lit("\"")), s(lit("\"")), s(lit("\"\"")));
        assert_eq!(p.parse("\"1\"\"2\""),
                   Some(Outcome::make("", strings(&["\"", "1", "\"\"", "2", "\""]))));
    }

    #[test]
    fn block_without_escape() {
        let p = block(s(lit("/*")), s(lit("*/")), fail());
        assert_eq!(p.parse("/*/*a*/"),
                   Some(Outcome::make("", strings(&["/*", "/", "*", "a", "*/"]))));
        assert_eq!(p.parse("/*a*/b"), Some(Outcome::make("b", strings(&["/*", "a", "*/"]))));
        assert_eq!(p.parse("/*a"), None);
        assert_eq!(p.parse("a*/"), None);
    }

    #[test]
    fn block_unicode() {
        let p = block(s(lit("«")), s(lit("»")), fail());
        assert_eq!(p.parse("«😄∑»♥"), Some(Outcome::make("♥", strings(&["«", "😄", "∑", "»"]))));
    }

    #[test]
    fn traced_is_transparent() {
        let p = lit("a");
        let t = traced("a", p.clone());
        for input in ["a", "ab", "b", ""] {
            assert_eq!(t.parse(input), p.parse(input));
        }
    }
}
