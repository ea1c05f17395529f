//! CPU rendering of scenario frames.

/// Frame buffer type.
pub mod backend;
/// Axes decoration rasterized from SVG.
pub mod chrome;
pub(crate) mod composite;
/// `vello_cpu` plot renderer.
pub mod cpu;
/// Scene description for one scenario.
pub mod plot;
