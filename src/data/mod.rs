//! Coordinate input files and metrics derived from them.

/// Path metrics.
pub mod metrics;
/// Two-column coordinate file parsing.
pub mod parse;
