//! The parsers that actually look at input characters.  Everything else is
//! built from these.

use crate::{Outcome, Parser};


/// Consume exactly one Unicode scalar value, producing it.  Fails on empty
/// input.
pub fn pop() -> Parser<char> {
    Parser::from_fn(|input| {
        let mut chars = input.chars();
        let c = chars.next()?;
        Some(Outcome::make(chars.as_str(), vec![c]))
    })
}


/// Match exactly `expected` at the start of the input, producing `expected`
/// (a clone of it, per match).
///
/// `expected` may be any string type, e.g. `&'static str` for grammars with
/// fixed tokens, or `String`/`Arc<str>` for tokens only known at runtime.
///
/// An empty `expected` always fails, so that a literal can never be an
/// accidental always-succeeding zero-width parser.
///
/// Since `expected` is whole UTF-8, a match always ends on a `char` boundary:
/// a literal that is only part of a multi-byte character cannot be
/// constructed, and a multi-byte literal consumes exactly its characters.
pub fn literal<S>(expected: S) -> Parser<S>
    where S: AsRef<str> + Clone + Send + Sync + 'static,
{
    if expected.as_ref().is_empty() {
        return fail();
    }
    Parser::from_fn(move |input| {
        let rest = input.strip_prefix(expected.as_ref())?;
        Some(Outcome::make(rest, vec![expected.clone()]))
    })
}


/// Never match.
pub fn fail<T>() -> Parser<T>
    where T: 'static,
{
    Parser::from_fn(|_| None)
}


/// Always match, consuming nothing and producing nothing.  Zero-width: the
/// leftover is the whole input.
pub fn succeed<T>() -> Parser<T>
    where T: 'static,
{
    Parser::from_fn(|input| Some(Outcome::make(input, Vec::new())))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_cases() {
        let p = pop();
        assert_eq!(p.parse("123"), Some(Outcome::make("23", vec!['1'])));
        assert_eq!(p.parse("😄∑♥😄"), Some(Outcome::make("∑♥😄", vec!['😄'])));
        assert_eq!(p.parse(""), None);
    }

    #[test]
    fn literal_cases() {
        assert_eq!(literal("1").parse("123"), Some(Outcome::make("23", vec!["1"])));
        assert_eq!(literal("12").parse("123"), Some(Outcome::make("3", vec!["12"])));
        assert_eq!(literal("2").parse("123"), None);
        assert_eq!(literal("2").parse(""), None);
        assert_eq!(literal("123").parse("12"), None);
    }

    #[test]
    fn literal_unicode() {
        assert_eq!(literal("😄").parse("😄∑♥😄"), Some(Outcome::make("∑♥😄", vec!["😄"])));
        assert_eq!(literal("∑").parse("😄∑♥😄"), None);
        assert_eq!(literal("😄∑").parse("😄∑♥😄"), Some(Outcome::make("♥😄", vec!["😄∑"])));
    }

    #[test]
    fn literal_empty_always_fails() {
        assert_eq!(literal("").parse(""), None);
        assert_eq!(literal("").parse("abc"), None);
        assert_eq!(literal(String::new()).parse("abc"), None);
    }

    #[test]
    fn literal_owned() {
        let key = String::from("key");
        assert_eq!(literal(key.clone()).parse("keys"), Some(Outcome::make("s", vec![key])));
    }

    #[test]
    fn fail_and_succeed() {
        assert_eq!(fail::<char>().parse("foo"), None);
        assert_eq!(fail::<char>().parse(""), None);
        assert_eq!(succeed::<char>().parse("foo"), Some(Outcome::make("foo", vec![])));
        assert_eq!(succeed::<char>().parse(""), Some(Outcome::make("", vec![])));
    }
}
