//! Text helpers over optional string slices.
//!
//! ## Summary
//! `None` is an absent value and is distinct from `Some("")`. Every helper
//! returns an absent input unchanged, never treating it as an error.
//!
//! ```
//! use useful_ext_text::{ComparisonMode, append_if_missing_with_mode, left, right};
//!
//! assert_eq!(left(Some("abcdefghijk"), 5), Some("abcde"));
//! assert_eq!(right(None, 5), None);
//! assert_eq!(
//!     append_if_missing_with_mode(Some("report.CSV"), Some(".csv"), ComparisonMode::Ordinal)
//!         .as_deref(),
//!     Some("report.CSV.csv")
//! );
//! ```

mod affix;
mod ext;
mod ops;
mod shape;
mod slice;

pub use affix::{
    append_if_missing, append_if_missing_with_mode, prepend_if_missing,
    prepend_if_missing_with_mode,
};
pub use ext::TextExt;
pub use ops::TextOps;
pub use slice::{left, right};
pub use useful_ext_core::types::ComparisonMode;
