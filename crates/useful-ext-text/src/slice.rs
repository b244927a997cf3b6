//! Bounded substring extraction.
//!
//! Lengths count `char`s, so a slice never splits a code point.

use crate::shape::Shape;

/// Leftmost `length` characters of `value`, or all of it when shorter.
#[must_use]
pub fn left(value: Option<&str>, length: usize) -> Option<&str> {
    match Shape::of(value) {
        Shape::Absent => None,
        Shape::Empty(s) => Some(s),
        Shape::Present(s) => {
            let end = s.char_indices().nth(length).map_or(s.len(), |(i, _)| i);
            Some(&s[..end])
        }
    }
}

/// Rightmost `length` characters of `value`, or all of it when shorter.
#[must_use]
pub fn right(value: Option<&str>, length: usize) -> Option<&str> {
    match Shape::of(value) {
        Shape::Absent => None,
        Shape::Empty(s) => Some(s),
        Shape::Present(s) => {
            let start = match length.checked_sub(1) {
                None => s.len(),
                Some(skip) => s.char_indices().rev().nth(skip).map_or(0, |(i, _)| i),
            };
            Some(&s[start..])
        }
    }
}
