//! Error types for the navigation view.
//!
//! - [`CodecError`] - view strings that cannot be unpacked
//! - [`ListingError`] - server listings that cannot be parsed
//! - [`NavError`] - toggle requests that do not address a toggle

use thiserror::Error;

/// Errors raised while unpacking a view string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A character outside `a`-`z` / `2`-`7`.
    #[error("invalid view symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Errors raised while reading the server listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The listing is not valid JSON or does not have the nested array shape.
    #[error("malformed listing: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by toggle requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("system index {0} out of range")]
    SystemOutOfRange(usize),
    #[error("package index {package} out of range for system {system}")]
    PackageOutOfRange { system: usize, package: usize },
    /// The addressed node does not lead a run of two or more entries.
    #[error("'{0}' has no historical entries to toggle")]
    NotToggleable(String),
}
