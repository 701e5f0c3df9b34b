//! Substitution of `{{ key }}` placeholders in template text.

use std::{cmp::Reverse, collections::BTreeMap};

use tracing::trace;

use crate::{
    Parser,
    at_end, block, choice, drop, literal, map, sequence, succeed,
    parser::premade::spaces,
};


/// Optional spaces or tabs.
fn padding() -> Parser<String> {
    drop(choice([spaces(), succeed()]))
}

/// `{{`, one of the bound keys, and `}}`, producing the key's value.
fn substitution(bindings: BTreeMap<String, String>) -> Parser<String> {
    let mut bindings: Vec<(String, String)> = bindings.into_iter().collect();
    // Longer keys first, so a key that is a prefix of another does not shadow it.
    bindings.sort_by_key(|(key, _)| Reverse(key.len()));
    let values = choice(bindings.into_iter()
                                .map(|(key, value)| map(move |_| value.clone(), literal(key))));
    sequence([drop(literal("{{")), padding(), values, padding(), drop(literal("}}"))])
}


/// Replace each `{{ key }}` in `template`, where `key` is one of the keys of
/// `bindings`, with the key's value.  Any amount of spaces or tabs is allowed
/// between the braces and the key.
///
/// Placeholders with unbound keys, and braces that do not form a placeholder,
/// are left as they are.  When a key is bound more than once, the last binding
/// is used.
///
/// ```
/// use parco::common::interpolate::interpolate;
///
/// let text = interpolate("{{a}} and {{  b }} but not {{ c }}", [("a", "x"), ("b", "y")]);
/// assert_eq!(text, "x and y but not {{ c }}");
/// ```
pub fn interpolate<I, K, V>(template: &str, bindings: I) -> String
    where I: IntoIterator<Item = (K, V)>,
          K: Into<String>,
          V: Into<String>,
{
    let bindings: BTreeMap<String, String> = bindings.into_iter()
                                                     .map(|(k, v)| (k.into(), v.into()))
                                                     .collect();
    if bindings.is_empty() {
        return template.to_owned();
    }
    trace!(bindings = bindings.len(), "interpolating");

    let whole = block(succeed(), at_end(), substitution(bindings));
    whole.parse(template).map_or_else(|| template.to_owned(),
                                      |outcome| outcome.into_produced().concat())
}
