use std::borrow::Cow;

use useful_ext_core::config::TextSettings;
use useful_ext_core::types::ComparisonMode;

use crate::affix;

/// Append/prepend helpers bound to one comparison mode, typically taken from
/// [`TextSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOps {
    comparison: ComparisonMode,
}

impl TextOps {
    #[must_use]
    pub const fn new(comparison: ComparisonMode) -> Self {
        Self { comparison }
    }

    #[must_use]
    pub const fn comparison(&self) -> ComparisonMode {
        self.comparison
    }

    #[must_use]
    pub fn append_if_missing<'a>(
        &self,
        value: Option<&'a str>,
        suffix: Option<&str>,
    ) -> Option<Cow<'a, str>> {
        affix::append_if_missing_with_mode(value, suffix, self.comparison)
    }

    #[must_use]
    pub fn prepend_if_missing<'a>(
        &self,
        value: Option<&'a str>,
        prefix: Option<&str>,
    ) -> Option<Cow<'a, str>> {
        affix::prepend_if_missing_with_mode(value, prefix, self.comparison)
    }
}

impl From<&TextSettings> for TextOps {
    fn from(settings: &TextSettings) -> Self {
        Self::new(settings.comparison)
    }
}
