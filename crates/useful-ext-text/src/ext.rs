use std::borrow::Cow;

use useful_ext_core::types::ComparisonMode;

use crate::{affix, slice};

/// Method syntax for the text helpers on a present string.
///
/// Use the free functions when the value may be absent.
pub trait TextExt {
    #[must_use]
    fn left(&self, length: usize) -> &str;

    #[must_use]
    fn right(&self, length: usize) -> &str;

    #[must_use]
    fn append_if_missing(&self, suffix: &str) -> Cow<'_, str>;

    #[must_use]
    fn append_if_missing_with_mode(&self, suffix: &str, mode: ComparisonMode) -> Cow<'_, str>;

    #[must_use]
    fn prepend_if_missing(&self, prefix: &str) -> Cow<'_, str>;

    #[must_use]
    fn prepend_if_missing_with_mode(&self, prefix: &str, mode: ComparisonMode) -> Cow<'_, str>;
}

impl TextExt for str {
    fn left(&self, length: usize) -> &str {
        slice::left(Some(self), length).unwrap_or(self)
    }

    fn right(&self, length: usize) -> &str {
        slice::right(Some(self), length).unwrap_or(self)
    }

    fn append_if_missing(&self, suffix: &str) -> Cow<'_, str> {
        self.append_if_missing_with_mode(suffix, ComparisonMode::default())
    }

    fn append_if_missing_with_mode(&self, suffix: &str, mode: ComparisonMode) -> Cow<'_, str> {
        affix::append_if_missing_with_mode(Some(self), Some(suffix), mode)
            .unwrap_or(Cow::Borrowed(self))
    }

    fn prepend_if_missing(&self, prefix: &str) -> Cow<'_, str> {
        self.prepend_if_missing_with_mode(prefix, ComparisonMode::default())
    }

    fn prepend_if_missing_with_mode(&self, prefix: &str, mode: ComparisonMode) -> Cow<'_, str> {
        affix::prepend_if_missing_with_mode(Some(self), Some(prefix), mode)
            .unwrap_or(Cow::Borrowed(self))
    }
}
