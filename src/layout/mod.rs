//! Axes geometry: autoscaled limits, tick placement, and the data-to-pixel transform.

/// Axes placement and limits.
pub mod axes;
/// Nice-number tick locator and label formatting.
pub mod ticks;
