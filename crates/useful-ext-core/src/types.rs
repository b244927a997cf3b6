use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// How text is compared when testing for an existing prefix or suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Exact, case-sensitive comparison.
    Ordinal,
    /// Comparison up to Unicode case folding.
    #[default]
    OrdinalIgnoreCase,
}

impl ComparisonMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal_ignore_case",
        }
    }

    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Ordinal)
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Self::Ordinal),
            "ordinal_ignore_case" | "ignore_case" => Ok(Self::OrdinalIgnoreCase),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown comparison mode '{other}'"
            ))),
        }
    }
}
