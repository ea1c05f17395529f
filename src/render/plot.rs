use crate::data::parse::XySeries;
use crate::foundation::core::Point;
use crate::layout::axes::DataExtent;
use crate::scene::model::{Goal, Obstacle};

/// Where the moving marker sits before the animation starts.
pub const MARKER_ORIGIN: Point = Point::new(0.0, 0.0);

/// Everything drawn for one scenario, borrowed from the loaded inputs.
#[derive(Clone, Copy, Debug)]
pub struct PlotScene<'a> {
    /// Sampled states (drawn first).
    pub data: &'a XySeries,
    /// Solution path (drawn over the samples; the marker walks it).
    pub path: &'a XySeries,
    /// Obstacles to draw; empty for obstacle-free scenarios.
    pub obstacles: &'a [Obstacle],
    /// Goal marker.
    pub goal: Goal,
}

impl PlotScene<'_> {
    /// Data extent of all artists, including the marker at its initial position.
    pub fn extent(&self) -> DataExtent {
        let mut e = DataExtent::new();
        for o in self.obstacles {
            e.add_circle(o.center_point(), o.radius);
        }
        e.add_circle(self.goal.center_point(), self.goal.radius);
        for p in self.data.points().chain(self.path.points()) {
            e.add_point(p);
        }
        e.add_point(MARKER_ORIGIN);
        e
    }
}
