//! Shared building blocks for the `useful-ext` helper crates.
//!
//! Holds the error type raised by argument checks, the text comparison mode,
//! configuration loading and the tracing bootstrap.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
