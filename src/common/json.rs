//! A JSON decoder, producing [`serde_json::Value`]s, built entirely from the
//! combinator algebra.
//!
//! The value, array, and object rules refer to each other, which is tied
//! together with [`recursive`](crate::recursive).
//!
//! ```
//! use parco::common::json;
//! use serde_json::json;
//!
//! assert_eq!(json::decode(r#" {"a": [1, -2, 3.5, "é"]} "#),
//!            Ok(json!({"a": [1, -2, 3.5, "é"]})));
//! assert!(json::decode("[1,]").is_err());
//! ```
//!
//! [`serde_json::Value`]: https://docs.rs/serde_json/1/serde_json/enum.Value.html

use std::{iter, sync::OnceLock};

use serde_json::{Map, Number, Value};

use crate::{
    Parser, Result,
    apply, between, choice, drop, fold, literal, map, not, pop, recursive, repeat, repeat1,
    sequence, succeed, try_apply,
    parser::premade::{float, int, whitespace},
    common::parse_all,
};


/// Escapes that stand for a single character: `\"`, `\\`, `\/`, `\b`, `\f`,
/// `\n`, `\r`, and `\t`.
const SIMPLE_ESCAPES: [(&str, char); 8] = [
    ("\"", '"'),
    ("\\", '\\'),
    ("/", '/'),
    ("b", '\u{8}'),
    ("f", '\u{c}'),
    ("n", '\n'),
    ("r", '\r'),
    ("t", '\t'),
];


/// Optional whitespace, producing nothing.
fn blank<T>() -> Parser<T>
    where T: 'static,
{
    drop(choice([whitespace(), succeed()]))
}

fn keyword(word: &'static str, value: Value) -> Parser<Value> {
    map(move |_| value.clone(), literal(word))
}


/// `u64::MAX` negated does not fit in an `i64`, and neither does `-0`'s sign,
/// so those become floats.
#[allow(clippy::cast_precision_loss)]
fn negated(magnitude: u64) -> Value {
    match i64::try_from(-i128::from(magnitude)) {
        Ok(n) if n != 0 => Value::from(n),
        _ => Number::from_f64(-(magnitude as f64)).map_or(Value::Null, Value::Number),
    }
}

fn finite(floats: Vec<f64>) -> Option<Vec<Value>> {
    floats.into_iter().map(|f| Number::from_f64(f).map(Value::Number)).collect()
}

/// An integer, with an optional `-`, as the nearest float.  For integers too
/// large for `int`.
fn big_integer() -> Parser<Value> {
    let digit = try_apply(|c: Vec<char>| c.iter().all(char::is_ascii_digit).then_some(c), pop());
    let sign = choice([map(|_| '-', literal("-")), succeed()]);
    try_apply(|chars: Vec<char>| finite(vec![chars.into_iter().collect::<String>().parse().ok()?]),
              sequence([sign, repeat1(digit)]))
}

/// A JSON number: a float (which handles its own `-`), else an integer with an
/// optional `-`, else an integer beyond the `u64` range as a float.  Non-finite
/// floats, from huge exponents, are not numbers.
fn number() -> Parser<Value> {
    choice([try_apply(finite, float()),
            map(Value::from, int()),
            map(negated, sequence([drop(literal("-")), int()])),
            big_integer()])
}


/// One hexadecimal digit, of either case.
fn hex_digit() -> Parser<u16> {
    try_apply(|chars: Vec<char>| {
                  chars.into_iter()
                       .map(|c| c.to_digit(16).and_then(|d| u16::try_from(d).ok()))
                       .collect()
              },
              pop())
}

/// `\u` and four hex digits, producing the UTF-16 code unit.
fn code_unit() -> Parser<u16> {
    sequence([drop(literal("\\u")),
              fold(|digit, unit: u16| unit * 16 + digit,
                   0,
                   sequence(iter::repeat_with(hex_digit).take(4)))])
}

/// The characters of a JSON string, without its quotes.
///
/// Consecutive `\u` escapes are decoded together, so that a surrogate pair
/// spelled as two escapes becomes its one character.  A lone surrogate fails.
fn string_content() -> Parser<char> {
    let unicode = try_apply(|units: Vec<u16>| char::decode_utf16(units).collect::<Result<_, _>>()
                                                                       .ok(),
                            repeat1(code_unit()));
    let simple = choice(SIMPLE_ESCAPES.iter().map(|&(escape, c)| map(move |_| c, literal(escape))));
    let escape = sequence([drop(literal("\\")), simple]);

    let forbidden = choice(['"', '\\'].into_iter()
                                      .chain((0 .. 0x20_u8).map(char::from))
                                      .map(|c| literal(c.to_string())));
    let plain = sequence([not(forbidden), pop()]);

    repeat(choice([unicode, escape, plain]))
}

fn string() -> Parser<String> {
    apply(|chars: Vec<char>| vec![chars.into_iter().collect()],
          between(literal("\""), string_content(), literal("\"")))
}


/// Pair up the alternating keys and values of an object's members.
fn into_object(members: Vec<Value>) -> Vec<Value> {
    let mut object = Map::new();
    let mut members = members.into_iter();
    while let (Some(Value::String(key)), Some(value)) = (members.next(), members.next()) {
        let _ = object.insert(key, value);
    }
    vec![Value::Object(object)]
}

/// Either `first` followed by any number of `,`-separated more, or else only
/// blank space.
fn separated(first: Parser<Value>) -> Parser<Value> {
    let more = repeat(sequence([drop(literal(",")), first.clone()]));
    choice([sequence([first, more]), blank()])
}


/// The grammar of one JSON value, with optional whitespace around it.
///
/// Produces exactly one [`Value`].  Integers become integer numbers, and
/// anything with a fraction or an exponent becomes a float number.
pub fn value() -> Parser<Value> {
    recursive(|value| {
        let array = apply(|items| vec![Value::Array(items)],
                          between(literal("["), separated(value.clone()), literal("]")));

        let key = between(blank::<Value>(), map(Value::String, string()), blank::<Value>());
        let member = sequence([key, drop(literal(":")), value]);
        let object = apply(into_object,
                           between(literal("{"), separated(member), literal("}")));

        between(blank::<Value>(),
                choice([keyword("true", Value::Bool(true)),
                        keyword("false", Value::Bool(false)),
                        keyword("null", Value::Null),
                        number(),
                        map(Value::String, string()),
                        array,
                        object]),
                blank::<Value>())
    })
}

fn grammar() -> &'static Parser<Value> {
    static GRAMMAR: OnceLock<Parser<Value>> = OnceLock::new();
    GRAMMAR.get_or_init(value)
}


/// Decode the whole of `input` as one JSON value.
pub fn decode(input: &str) -> Result<Value> {
    let values = parse_all(grammar(), input)?;
    // Every alternative of `value()` produces exactly one `Value`.
    match <[Value; 1]>::try_from(values) {
        Ok([value]) => Ok(value),
        Err(values) => unreachable!("JSON grammar produced {} values", values.len()),
    }
}
