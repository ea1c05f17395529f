use std::path::PathBuf;

use crate::data::parse::{XySeries, parse_xy};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, require_parent_dir};
use crate::encode::png::write_png;
use crate::encode::sink::{FrameSink, NullSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{PlotError, PlotResult};
use crate::layout::axes::AxesLayout;
use crate::render::chrome::ChromeRasterizer;
use crate::render::cpu::PlotRenderer;
use crate::render::plot::{MARKER_ORIGIN, PlotScene};
use crate::scene::config::SceneConfig;
use crate::scene::model::Scenario;

/// Options for [`Plotter::run_all`].
#[derive(Clone, Debug, Default)]
pub struct RunOpts {
    /// Restrict the run to these scenario names (config order is kept).
    pub only: Option<Vec<String>>,
    /// Write still images only.
    pub skip_video: bool,
}

/// Outcome of rendering one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: String,
    /// Number of sampled states read.
    pub data_points: usize,
    /// Number of path points read (one animation frame each).
    pub path_points: usize,
    /// Euclidean length of the path.
    pub path_length: f64,
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Still image written.
    pub image_path: PathBuf,
    /// Video written, if video output was enabled.
    pub video_path: Option<PathBuf>,
}

/// Renders scenarios described by a [`SceneConfig`].
///
/// Scenarios are processed one after another; the first failure aborts the run.
pub struct Plotter {
    cfg: SceneConfig,
    chrome: ChromeRasterizer,
}

impl Plotter {
    /// Validate `cfg` and load system fonts for axis text.
    pub fn new(cfg: SceneConfig) -> PlotResult<Self> {
        Self::with_chrome(cfg, ChromeRasterizer::with_system_fonts())
    }

    /// Validate `cfg` and use an explicit axes rasterizer.
    pub fn with_chrome(cfg: SceneConfig, chrome: ChromeRasterizer) -> PlotResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg, chrome })
    }

    /// Active configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    /// Render every selected scenario: PNG still plus MP4 animation (unless `skip_video`).
    pub fn run_all(&self, opts: &RunOpts) -> PlotResult<Vec<ScenarioReport>> {
        let selected = self.select(opts.only.as_deref())?;
        let mut reports = Vec::with_capacity(selected.len());

        for scenario in selected {
            let report = if opts.skip_video {
                self.render_scenario(scenario, &mut NullSink)?
            } else {
                let video_path = self.cfg.video_path(scenario);
                let mut sink = FfmpegSink::new(FfmpegSinkOpts {
                    out_path: video_path.clone(),
                    overwrite: self.cfg.overwrite,
                    create_dirs: self.cfg.create_output_dirs,
                    background: self.cfg.style.background,
                });
                ScenarioReport {
                    video_path: Some(video_path),
                    ..self.render_scenario(scenario, &mut sink)?
                }
            };

            tracing::info!(
                scenario = %report.name,
                data_points = report.data_points,
                path_points = report.path_points,
                path_length = report.path_length,
                image = %report.image_path.display(),
                video = ?report.video_path.as_ref().map(|p| p.display().to_string()),
                "scenario rendered"
            );
            reports.push(report);
        }

        Ok(reports)
    }

    fn select(&self, only: Option<&[String]>) -> PlotResult<Vec<&Scenario>> {
        let Some(only) = only else {
            return Ok(self.cfg.scenarios.iter().collect());
        };
        if let Some(unknown) = only.iter().find(|n| self.cfg.scenario(n).is_none()) {
            return Err(PlotError::validation(format!(
                "unknown scenario '{unknown}' (known: {})",
                self.cfg
                    .scenarios
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(self
            .cfg
            .scenarios
            .iter()
            .filter(|s| only.iter().any(|n| *n == s.name))
            .collect())
    }

    /// Render one scenario: write its still image, then stream one frame per path point into
    /// `sink`.
    #[tracing::instrument(skip_all, fields(scenario = %scenario.name))]
    pub fn render_scenario(
        &self,
        scenario: &Scenario,
        sink: &mut dyn FrameSink,
    ) -> PlotResult<ScenarioReport> {
        let data = parse_xy(&self.cfg.data_path(scenario))?;
        let path = parse_xy(&self.cfg.path_path(scenario))?;
        let path_length = path.path_length();
        tracing::debug!(
            data_points = data.len(),
            path_points = path.len(),
            path_length,
            "inputs loaded"
        );

        let scene = PlotScene {
            data: &data,
            path: &path,
            obstacles: self.cfg.obstacles_for(scenario),
            goal: self.cfg.goal,
        };
        let layout = AxesLayout::autoscaled(self.cfg.canvas, &scene.extent());
        let mut renderer = PlotRenderer::new(&scene, layout, &self.cfg.style, &self.chrome)?;

        let image_path = self.cfg.image_path(scenario);
        self.prepare_output(&image_path)?;
        let still = renderer.render_frame(MARKER_ORIGIN, false)?;
        write_png(&image_path, &still)?;

        let frames = animate(&mut renderer, &path, self.cfg.fps()?, sink)?;

        Ok(ScenarioReport {
            name: scenario.name.clone(),
            data_points: data.len(),
            path_points: path.len(),
            path_length,
            frames,
            image_path,
            video_path: None,
        })
    }

    fn prepare_output(&self, path: &std::path::Path) -> PlotResult<()> {
        if self.cfg.create_output_dirs {
            ensure_parent_dir(path)?;
        } else {
            require_parent_dir(path)?;
        }
        if !self.cfg.overwrite && path.exists() {
            return Err(PlotError::validation(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        Ok(())
    }
}

/// Stream the marker along `path`: frame `i` shows it at `path[i]`.
fn animate(
    renderer: &mut PlotRenderer,
    path: &XySeries,
    fps: crate::foundation::core::Fps,
    sink: &mut dyn FrameSink,
) -> PlotResult<u64> {
    let range = FrameRange::new(FrameIndex(0), FrameIndex(path.len() as u64))?;
    let canvas = renderer.layout().canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps,
        frame_count: range.len_frames(),
    })?;

    for idx in range.iter() {
        let marker = path
            .point(idx.0 as usize)
            .ok_or_else(|| PlotError::render(format!("path has no point for frame {}", idx.0)))?;
        let frame = renderer.render_frame(marker, true)?;
        sink.push_frame(idx, &frame)?;
    }

    sink.end()?;
    Ok(range.len_frames())
}
