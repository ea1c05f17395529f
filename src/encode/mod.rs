//! Output encoders.
//!
//! Animation frames flow through a [`sink::FrameSink`]; still images are written directly as PNG.

/// `ffmpeg`-based MP4 sink (system `ffmpeg`).
pub mod ffmpeg;
/// PNG still images.
pub mod png;
/// Frame sink trait and the in-memory sink.
pub mod sink;
