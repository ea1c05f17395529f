//! Scenario definitions, static scene elements, and configuration.

/// Serde-backed run configuration.
pub mod config;
/// Obstacles, goal, and scenario naming.
pub mod model;
