//! trajplot renders motion-planner output as still images and animations.
//!
//! For each scenario it reads the sampled states (`<name>_data.txt`) and the solution path
//! (`<name>_path.txt`), computes the path length, and writes:
//!
//! - a PNG snapshot of the workspace (samples, path, obstacles, goal, marker at the origin)
//! - an MP4 in which a marker walks the path, one frame per path point (requires `ffmpeg`)
//!
//! The entry point is [`Plotter`]; [`SceneConfig`] carries every tunable, and its defaults
//! reproduce the built-in scenarios and scene layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Coordinate files and path metrics.
pub mod data;
/// Output encoders (PNG, MP4 via `ffmpeg`).
pub mod encode;
mod foundation;
/// Axes geometry.
pub mod layout;
/// Scenario driver.
pub mod pipeline;
/// Frame rendering.
pub mod render;
/// Scenarios, scene elements, configuration.
pub mod scene;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8};
pub use crate::foundation::error::{PlotError, PlotResult};

pub use crate::data::metrics::path_length;
pub use crate::data::parse::{XySeries, parse_xy, parse_xy_str};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::write_png;
pub use crate::encode::sink::{FrameSink, InMemorySink, NullSink, SinkConfig};
pub use crate::pipeline::{Plotter, RunOpts, ScenarioReport};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::chrome::ChromeRasterizer;
pub use crate::scene::config::{PlotStyle, SceneConfig};
pub use crate::scene::model::{Goal, Obstacle, Scenario};
