//! Parsers of numeric literals.  Each is assembled from digit literals with the
//! combinator algebra, so each is atomic: on failure nothing is consumed.
//! Integer values too large for `u64` are a failure to match, not a panic and
//! not a wrapped value.

use crate::{
    Parser,
    choice, drop, fold, literal, map, repeat, repeat1, sequence, succeed, try_apply, try_fold,
};


const DECIMAL_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const LOWER_HEX_LETTERS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
const UPPER_HEX_LETTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];


/// Choice of the given digit literals, producing the matched digit's value,
/// where the first of `digits` has the value `first`.
fn digits_from(digits: &[&'static str], first: u8) -> Parser<u8> {
    choice(digits.iter().zip(first ..)
                 .map(|(&digit, value)| map(move |_| value, literal(digit))))
}

fn decimal_digit() -> Parser<u8> {
    digits_from(&DECIMAL_DIGITS, 0)
}

fn hex_letter_value(letter: &str) -> u8 {
    letter.bytes().next().map_or(0, |b| 9 + (b & 0xF))
}

fn hex_digit() -> Parser<u8> {
    let letters = choice(LOWER_HEX_LETTERS.iter().chain(&UPPER_HEX_LETTERS)
                                          .map(|&letter| literal(letter)));
    choice([decimal_digit(), map(hex_letter_value, letters)])
}

/// Either the single digit `0`, or a nonzero digit followed by any digits.  So
/// a leading zero is never followed by more digits.
fn integer_digits() -> Parser<u8> {
    choice([sequence([digits_from(&DECIMAL_DIGITS[1 ..], 1), repeat(decimal_digit())]),
            digits_from(&DECIMAL_DIGITS[.. 1], 0)])
}

/// Accumulate place values, most significant first.
fn radix(base: u8, digits: Parser<u8>) -> Parser<u64> {
    let base = u64::from(base);
    try_fold(move |digit: u8, value: u64| value.checked_mul(base)?
                                               .checked_add(u64::from(digit)),
             0,
             digits)
}


/// A decimal integer: `0`, or `1`-`9` followed by any digits.  Only the first
/// of multiple leading zeros is consumed.  No sign.
pub fn int() -> Parser<u64> {
    radix(10, integer_digits())
}

/// One or more binary digits.
pub fn binary() -> Parser<u64> {
    radix(2, repeat1(digits_from(&DECIMAL_DIGITS[.. 2], 0)))
}

/// One or more octal digits.
pub fn octal() -> Parser<u64> {
    radix(8, repeat1(digits_from(&DECIMAL_DIGITS[.. 8], 0)))
}

/// One or more hexadecimal digits, with letters of either case.
pub fn hex() -> Parser<u64> {
    radix(16, repeat1(hex_digit()))
}


/// Append a decimal digit's character to `text`.
fn push_digit(digit: u8, mut text: String) -> String {
    text.push(char::from(b'0' + digit));
    text
}


#[derive(Clone, Debug)]
enum Component {
    Minus,
    Integer(String),
    Fraction(String),
    Exponent(i32),
}

/// The parts of a float literal, kept as their decimal digits until the single
/// conversion to `f64`.
#[derive(Clone, Default, Debug)]
struct Float {
    negative: bool,
    integer: String,
    fraction: String,
    exponent: i32,
}

impl Float {
    fn with(self, component: Component) -> Self {
        match component {
            Component::Minus => Float { negative: true, ..self },
            Component::Integer(integer) => Float { integer, ..self },
            Component::Fraction(fraction) => Float { fraction, ..self },
            Component::Exponent(exponent) => Float { exponent, ..self },
        }
    }

    /// The nearest `f64`, rounded once.  Out of range magnitudes become
    /// infinity or zero.
    fn value(&self) -> Option<f64> {
        let digits = |text: &str| if text.is_empty() { "0".to_owned() } else { text.to_owned() };
        let text = format!("{}{}.{}e{}",
                           if self.negative { "-" } else { "" },
                           digits(&self.integer),
                           digits(&self.fraction),
                           self.exponent);
        text.parse().ok()
    }
}


/// A floating-point literal.
///
/// An optional leading `-`, then one of:
///
/// * integer `.` fraction, integer `.`, or `.` fraction, each optionally
/// followed by an exponent;
///
/// * an integer followed by a mandatory exponent.
///
/// An exponent is `e` or `E`, an optional `+` or `-`, and one or more digits
/// (leading zeros allowed).  The integer part follows [`int`]'s grammar.  A
/// bare integer, with neither a point nor an exponent, is not matched.
///
/// The value is the `f64` nearest to `(integer + fraction) × 10^exponent`,
/// negated if the `-` was present, with the digits kept exactly until a single
/// correctly-rounded conversion.  So leading zeros of the fraction are
/// significant (`.01` is `0.01`), and magnitudes beyond the range of `f64`
/// become infinity or zero.
pub fn float() -> Parser<f64> {
    let digit_text = |digits: Parser<u8>| fold(push_digit, String::new(), digits);
    let integer = map(Component::Integer, digit_text(integer_digits()));
    let fraction = map(Component::Fraction, digit_text(repeat1(decimal_digit())));
    let point = || drop(literal("."));

    let decimal = choice([sequence([integer.clone(), point(), fraction.clone()]),
                          sequence([integer.clone(), point()]),
                          sequence([point(), fraction])]);

    let exponent_digits = try_fold(|digit: u8, value: i32| value.checked_mul(10)?
                                                                .checked_add(i32::from(digit)),
                                   0,
                                   repeat1(decimal_digit()));
    let exponent = sequence([
        drop(choice([literal("e"), literal("E")])),
        map(Component::Exponent,
            choice([exponent_digits.clone(),
                    map(|e: i32| -e, sequence([drop(literal("-")), exponent_digits.clone()])),
                    sequence([drop(literal("+")), exponent_digits])])),
    ]);

    let unsigned = choice([sequence([choice([decimal.clone(), integer]), exponent]),
                           decimal]);
    let sign = choice([map(|_| Component::Minus, literal("-")), succeed()]);

    try_apply(|floats: Vec<Float>| floats.iter().map(Float::value).collect(),
              fold(|component, float: Float| float.with(component),
                   Float::default(),
                   sequence([sign, unsigned])))
}
