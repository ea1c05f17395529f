use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{PlotError, PlotResult};
use crate::scene::model::{Goal, Obstacle, Scenario, default_scenarios, forest_obstacles};

/// Colors, marker sizes, and labels.
///
/// Defaults follow the stock look of a single-axes scatter figure: first two palette colors for
/// the sample cloud and the path, a red moving marker, black obstacles, and a green goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotStyle {
    /// Figure background.
    pub background: Rgba8,
    /// Sampled-states scatter color.
    pub data_color: Rgba8,
    /// Path scatter color.
    pub path_color: Rgba8,
    /// Moving marker color.
    pub marker_color: Rgba8,
    /// Obstacle fill.
    pub obstacle_color: Rgba8,
    /// Goal fill.
    pub goal_color: Rgba8,
    /// Axis spines, ticks, and text.
    pub axes_color: Rgba8,
    /// Radius of one scatter point in pixels.
    pub point_radius_px: f64,
    /// Radius of the moving marker in pixels.
    pub marker_radius_px: f64,
    /// X axis label shown in the animation.
    pub x_label: String,
    /// Y axis label shown in the animation.
    pub y_label: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            data_color: Rgba8::rgb(0x1f, 0x77, 0xb4),
            path_color: Rgba8::rgb(0xff, 0x7f, 0x0e),
            marker_color: Rgba8::rgb(0xff, 0x00, 0x00),
            obstacle_color: Rgba8::BLACK,
            goal_color: Rgba8::rgb(0x00, 0x80, 0x00),
            axes_color: Rgba8::BLACK,
            point_radius_px: 2.8,
            marker_radius_px: 4.9,
            x_label: "X-axis".to_owned(),
            y_label: "Y-axis".to_owned(),
        }
    }
}

/// Everything a run needs. An empty JSON object (or no config file at all) reproduces the
/// built-in scenarios, file locations, and scene layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Directory holding `<name>_data.txt` / `<name>_path.txt`.
    pub results_dir: PathBuf,
    /// Directory receiving `<name>.png`.
    pub images_dir: PathBuf,
    /// Directory receiving `<name>.mp4`.
    pub videos_dir: PathBuf,
    /// Output size in pixels (must be even for yuv420p).
    pub canvas: Canvas,
    /// Time between animation frames.
    pub interval_ms: u32,
    /// Scenarios rendered in order.
    pub scenarios: Vec<Scenario>,
    /// Obstacles are drawn for scenarios whose name contains this substring.
    pub obstacle_marker: String,
    /// Obstacle layout.
    pub obstacles: Vec<Obstacle>,
    /// Goal marker.
    pub goal: Goal,
    /// Visual style.
    pub style: PlotStyle,
    /// Create missing output directories instead of failing.
    pub create_output_dirs: bool,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            images_dir: PathBuf::from("images"),
            videos_dir: PathBuf::from("videos"),
            canvas: Canvas::default(),
            interval_ms: 100,
            scenarios: default_scenarios(),
            obstacle_marker: "forest".to_owned(),
            obstacles: forest_obstacles(),
            goal: Goal::default(),
            style: PlotStyle::default(),
            create_output_dirs: false,
            overwrite: true,
        }
    }
}

impl SceneConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check invariants the renderer and encoder rely on.
    pub fn validate(&self) -> PlotResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(PlotError::validation("canvas width/height must be non-zero"));
        }
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(PlotError::validation(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PlotError::validation("canvas width/height must fit in u16"));
        }
        if self.interval_ms == 0 {
            return Err(PlotError::validation("interval_ms must be > 0"));
        }

        let mut seen = HashSet::new();
        for s in &self.scenarios {
            if s.name.is_empty() {
                return Err(PlotError::validation("scenario name must not be empty"));
            }
            if s.name.contains(['/', '\\']) || s.name == "." || s.name == ".." {
                return Err(PlotError::validation(format!(
                    "scenario name '{}' must not contain path separators",
                    s.name
                )));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(PlotError::validation(format!(
                    "duplicate scenario name '{}'",
                    s.name
                )));
            }
        }

        let radius_ok = |r: f64| r.is_finite() && r > 0.0;
        for (i, o) in self.obstacles.iter().enumerate() {
            if !radius_ok(o.radius) || !o.center.iter().all(|c| c.is_finite()) {
                return Err(PlotError::validation(format!(
                    "obstacle {i} must have a finite center and positive radius"
                )));
            }
        }
        if !radius_ok(self.goal.radius) || !self.goal.center.iter().all(|c| c.is_finite()) {
            return Err(PlotError::validation(
                "goal must have a finite center and positive radius",
            ));
        }
        if !radius_ok(self.style.point_radius_px) || !radius_ok(self.style.marker_radius_px) {
            return Err(PlotError::validation("marker radii must be positive"));
        }
        Ok(())
    }

    /// Frame rate implied by `interval_ms`.
    pub fn fps(&self) -> PlotResult<Fps> {
        Fps::from_interval_ms(self.interval_ms)
    }

    /// Look up a scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Obstacles drawn for `scenario` (empty unless its name carries the marker).
    pub fn obstacles_for(&self, scenario: &Scenario) -> &[Obstacle] {
        if scenario.has_obstacles(&self.obstacle_marker) {
            &self.obstacles
        } else {
            &[]
        }
    }

    /// `<results_dir>/<name>_data.txt`
    pub fn data_path(&self, scenario: &Scenario) -> PathBuf {
        self.results_dir.join(scenario.data_file_name())
    }

    /// `<results_dir>/<name>_path.txt`
    pub fn path_path(&self, scenario: &Scenario) -> PathBuf {
        self.results_dir.join(scenario.path_file_name())
    }

    /// `<images_dir>/<name>.png`
    pub fn image_path(&self, scenario: &Scenario) -> PathBuf {
        self.images_dir.join(format!("{}.png", scenario.name))
    }

    /// `<videos_dir>/<name>.mp4`
    pub fn video_path(&self, scenario: &Scenario) -> PathBuf {
        self.videos_dir.join(format!("{}.mp4", scenario.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_layout() {
        let cfg = SceneConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.scenarios.len(), 6);
        assert_eq!(cfg.obstacles.len(), 10);
        assert_eq!(cfg.fps().unwrap(), Fps { num: 10, den: 1 });

        let s = cfg.scenario("simplegeo").unwrap();
        assert_eq!(cfg.data_path(s), Path::new("results/simplegeo_data.txt"));
        assert_eq!(cfg.path_path(s), Path::new("results/simplegeo_path.txt"));
        assert_eq!(cfg.image_path(s), Path::new("images/simplegeo.png"));
        assert_eq!(cfg.video_path(s), Path::new("videos/simplegeo.mp4"));
        assert!(cfg.obstacles_for(s).is_empty());
        assert_eq!(cfg.obstacles_for(cfg.scenario("forestacc").unwrap()).len(), 10);
    }

    #[test]
    fn empty_json_object_is_the_default() {
        let cfg: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let cfg: SceneConfig = serde_json::from_str(
            r##"{
                "results_dir": "out/results",
                "scenarios": ["forestgeo"],
                "goal": { "center": [5.0, 5.0], "radius": 1.0 },
                "style": { "marker_color": "#0000ff" }
            }"##,
        )
        .unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.scenarios, vec![Scenario::new("forestgeo")]);
        assert_eq!(cfg.goal.center, [5.0, 5.0]);
        assert_eq!(cfg.style.marker_color, Rgba8::rgb(0, 0, 255));
        assert_eq!(cfg.style.path_color, PlotStyle::default().path_color);
        assert_eq!(
            cfg.data_path(&cfg.scenarios[0]),
            Path::new("out/results/forestgeo_data.txt")
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<SceneConfig>(r#"{ "fps": 30 }"#).is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let odd = SceneConfig {
            canvas: Canvas {
                width: 641,
                height: 480,
            },
            ..Default::default()
        };
        assert!(odd.validate().is_err());

        let zero_interval = SceneConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(zero_interval.validate().is_err());

        let dup = SceneConfig {
            scenarios: vec![Scenario::new("a"), Scenario::new("a")],
            ..Default::default()
        };
        assert!(dup.validate().unwrap_err().to_string().contains("duplicate"));

        let sep = SceneConfig {
            scenarios: vec![Scenario::new("../x")],
            ..Default::default()
        };
        assert!(sep.validate().is_err());

        let mut bad_obstacle = SceneConfig::default();
        bad_obstacle.obstacles[0].radius = 0.0;
        assert!(bad_obstacle.validate().is_err());
    }

    #[test]
    fn from_path_reads_and_validates() {
        let dir = PathBuf::from("target").join("scene_config_test");
        std::fs::create_dir_all(&dir).unwrap();

        let ok = dir.join("ok.json");
        std::fs::write(&ok, r#"{ "interval_ms": 40 }"#).unwrap();
        let cfg = SceneConfig::from_path(&ok).unwrap();
        assert_eq!(cfg.fps().unwrap(), Fps { num: 25, den: 1 });

        let bad = dir.join("bad.json");
        std::fs::write(&bad, r#"{ "canvas": { "width": 0, "height": 10 } }"#).unwrap();
        assert!(SceneConfig::from_path(&bad).is_err());

        let err = SceneConfig::from_path(&dir.join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
