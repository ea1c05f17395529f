use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;

/// Circle radius used for every forest obstacle.
pub const OBSTACLE_RADIUS: f64 = 1.0;

/// Obstacle centers of the forest scenarios.
pub const FOREST_OBSTACLES: [[f64; 2]; 10] = [
    [2.0, 2.0],
    [5.0, 2.0],
    [8.0, 2.0],
    [0.5, 5.0],
    [3.5, 5.0],
    [6.5, 5.0],
    [9.5, 5.0],
    [2.0, 8.0],
    [5.0, 8.0],
    [8.0, 8.0],
];

/// Scenario names in rendering order.
pub const DEFAULT_SCENARIOS: [&str; 6] = [
    "simplegeo",
    "simplevel",
    "simpleacc",
    "forestgeo",
    "forestvel",
    "forestacc",
];

/// Static circular exclusion zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center in data coordinates.
    pub center: [f64; 2],
    /// Radius in data units.
    #[serde(default = "default_obstacle_radius")]
    pub radius: f64,
}

fn default_obstacle_radius() -> f64 {
    OBSTACLE_RADIUS
}

impl Obstacle {
    /// Obstacle at `(x, y)` with the default radius.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            center: [x, y],
            radius: OBSTACLE_RADIUS,
        }
    }

    /// Center as a point.
    pub fn center_point(&self) -> Point {
        Point::new(self.center[0], self.center[1])
    }
}

/// The ten forest obstacles.
pub fn forest_obstacles() -> Vec<Obstacle> {
    FOREST_OBSTACLES
        .iter()
        .map(|&[x, y]| Obstacle::at(x, y))
        .collect()
}

/// Goal region marker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Center in data coordinates.
    pub center: [f64; 2],
    /// Radius in data units.
    pub radius: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            center: [9.5, 9.5],
            radius: 0.5,
        }
    }
}

impl Goal {
    /// Center as a point.
    pub fn center_point(&self) -> Point {
        Point::new(self.center[0], self.center[1])
    }
}

/// One `(data, path)` input pair, identified by its name.
///
/// `forestgeo` reads `forestgeo_data.txt` and `forestgeo_path.txt` and writes `forestgeo.png` /
/// `forestgeo.mp4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    /// Scenario name (file stem prefix).
    pub name: String,
}

impl Scenario {
    /// Create a scenario by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// File name of the sampled-states input.
    pub fn data_file_name(&self) -> String {
        format!("{}_data.txt", self.name)
    }

    /// File name of the solution path input.
    pub fn path_file_name(&self) -> String {
        format!("{}_path.txt", self.name)
    }

    /// Whether obstacles are drawn: the name contains `marker`.
    pub fn has_obstacles(&self, marker: &str) -> bool {
        !marker.is_empty() && self.name.contains(marker)
    }
}

/// The six scenarios in their default order.
pub fn default_scenarios() -> Vec<Scenario> {
    DEFAULT_SCENARIOS.iter().map(|&n| Scenario::new(n)).collect()
}
