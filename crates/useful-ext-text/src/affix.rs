//! Conditional suffix and prefix insertion.
//!
//! `OrdinalIgnoreCase` compares ICU case-folded text one character of the
//! value at a time, so `"STRASSE"` already ends with `"ße"` but `"Fuß"` does
//! not end with `"s"`. `Ordinal` compares bytes.

use std::borrow::Cow;

use icu::casemap::CaseMapper;
use useful_ext_core::types::ComparisonMode;

use crate::shape::Shape;

#[derive(Debug, Clone, Copy)]
enum Side {
    Start,
    End,
}

/// Appends `suffix` unless `value` already ends with it, ignoring case.
#[must_use]
pub fn append_if_missing<'a>(value: Option<&'a str>, suffix: Option<&str>) -> Option<Cow<'a, str>> {
    append_if_missing_with_mode(value, suffix, ComparisonMode::default())
}

/// ## Summary
/// Appends `suffix` unless `value` already ends with it under `mode`.
///
/// Absent or empty `value` and absent or empty `suffix` leave `value`
/// unchanged. The result borrows `value` whenever nothing is added.
#[must_use]
pub fn append_if_missing_with_mode<'a>(
    value: Option<&'a str>,
    suffix: Option<&str>,
    mode: ComparisonMode,
) -> Option<Cow<'a, str>> {
    add_if_missing(value, suffix, mode, Side::End)
}

/// Prepends `prefix` unless `value` already starts with it, ignoring case.
#[must_use]
pub fn prepend_if_missing<'a>(
    value: Option<&'a str>,
    prefix: Option<&str>,
) -> Option<Cow<'a, str>> {
    prepend_if_missing_with_mode(value, prefix, ComparisonMode::default())
}

/// ## Summary
/// Prepends `prefix` unless `value` already starts with it under `mode`.
///
/// Absent or empty `value` and absent or empty `prefix` leave `value`
/// unchanged. The result borrows `value` whenever nothing is added.
#[must_use]
pub fn prepend_if_missing_with_mode<'a>(
    value: Option<&'a str>,
    prefix: Option<&str>,
    mode: ComparisonMode,
) -> Option<Cow<'a, str>> {
    add_if_missing(value, prefix, mode, Side::Start)
}

fn add_if_missing<'a>(
    value: Option<&'a str>,
    affix: Option<&str>,
    mode: ComparisonMode,
    side: Side,
) -> Option<Cow<'a, str>> {
    let value = match Shape::of(value) {
        Shape::Absent => return None,
        Shape::Empty(s) => return Some(Cow::Borrowed(s)),
        Shape::Present(s) => s,
    };
    let Shape::Present(affix) = Shape::of(affix) else {
        return Some(Cow::Borrowed(value));
    };

    if has_affix(value, affix, mode, side) {
        tracing::trace!(?side, %mode, "Affix already present");
        return Some(Cow::Borrowed(value));
    }

    let mut result = String::with_capacity(value.len() + affix.len());
    match side {
        Side::Start => {
            result.push_str(affix);
            result.push_str(value);
        }
        Side::End => {
            result.push_str(value);
            result.push_str(affix);
        }
    }
    Some(Cow::Owned(result))
}

fn has_affix(value: &str, affix: &str, mode: ComparisonMode, side: Side) -> bool {
    match (mode, side) {
        (ComparisonMode::Ordinal, Side::Start) => value.starts_with(affix),
        (ComparisonMode::Ordinal, Side::End) => value.ends_with(affix),
        (ComparisonMode::OrdinalIgnoreCase, _) => has_folded_affix(value, affix, side),
    }
}

/// Folds `value` character by character from `side` and reports whether the
/// folded `affix` is consumed exactly on a character boundary of `value`.
fn has_folded_affix(value: &str, affix: &str, side: Side) -> bool {
    let mapper = CaseMapper::new();
    let folded_affix = mapper.fold_string(affix);
    let mut remaining: &str = &folded_affix;
    let mut buf = [0u8; 4];

    let mut chars = value.chars();
    loop {
        let next = match side {
            Side::Start => chars.next(),
            Side::End => chars.next_back(),
        };
        let Some(c) = next else {
            return false;
        };

        let folded = mapper.fold_string(c.encode_utf8(&mut buf));
        let rest = match side {
            Side::Start => remaining.strip_prefix(folded.as_ref()),
            Side::End => remaining.strip_suffix(folded.as_ref()),
        };
        match rest {
            Some("") => return true,
            Some(rest) => remaining = rest,
            None => return false,
        }
    }
}
