use crate::foundation::core::{Affine, Canvas, Point, Rect};
use crate::layout::ticks::{bins_for_axis, format_ticks, nice_ticks};

/// Axes placement inside the figure, as fractions of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge (measured from the bottom of the figure).
    pub bottom: f64,
    /// Top edge (measured from the bottom of the figure).
    pub top: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
        }
    }
}

/// Fraction of the data span added on each side of the autoscaled limits.
pub const MARGIN: f64 = 0.05;

/// Tick label font size in points.
pub const TICK_FONT_PT: f64 = 10.0;

/// Accumulates the data extent of everything drawn in the axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataExtent {
    rect: Option<Rect>,
}

impl DataExtent {
    /// An empty extent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include one point. Non-finite points are ignored.
    pub fn add_point(&mut self, p: Point) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return;
        }
        self.rect = Some(match self.rect {
            None => Rect::from_points(p, p),
            Some(r) => r.union_pt(p),
        });
    }

    /// Include a disk.
    pub fn add_circle(&mut self, center: Point, radius: f64) {
        let r = radius.abs();
        self.add_point(Point::new(center.x - r, center.y - r));
        self.add_point(Point::new(center.x + r, center.y + r));
    }

    /// Current extent, if anything was added.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// View limits: the extent widened by [`MARGIN`] on every side.
    ///
    /// A zero-width dimension is first expanded by 5% of its magnitude (or by 1 when it sits at
    /// 0). An empty extent maps to `[0, 1] x [0, 1]`.
    pub fn view_limits(&self) -> Rect {
        let Some(r) = self.rect else {
            return Rect::new(0.0, 0.0, 1.0, 1.0);
        };
        let (x0, x1) = with_margin(nonsingular(r.x0, r.x1));
        let (y0, y1) = with_margin(nonsingular(r.y0, r.y1));
        Rect::new(x0, y0, x1, y1)
    }
}

fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo > f64::EPSILON * hi.abs().max(lo.abs()).max(1.0) {
        return (lo, hi);
    }
    if lo == 0.0 && hi == 0.0 {
        return (-1.0, 1.0);
    }
    (lo - 0.05 * lo.abs(), hi + 0.05 * hi.abs())
}

fn with_margin((lo, hi): (f64, f64)) -> (f64, f64) {
    let pad = (hi - lo) * MARGIN;
    (lo - pad, hi + pad)
}

/// Ticks along one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    /// Tick positions in data units.
    pub values: Vec<f64>,
    /// Formatted labels, one per value.
    pub labels: Vec<String>,
}

/// Fixed axes geometry for one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesLayout {
    canvas: Canvas,
    /// Axes rectangle in pixels (top-left origin).
    plot_px: Rect,
    /// Visible data range.
    limits: Rect,
    /// X axis ticks.
    pub x_ticks: AxisTicks,
    /// Y axis ticks.
    pub y_ticks: AxisTicks,
}

impl AxesLayout {
    /// Build a layout showing `limits` on `canvas`.
    pub fn new(canvas: Canvas, params: SubplotParams, limits: Rect) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let plot_px = Rect::new(
            params.left * w,
            (1.0 - params.top) * h,
            params.right * w,
            (1.0 - params.bottom) * h,
        );

        let x_values = nice_ticks(
            limits.x0,
            limits.x1,
            bins_for_axis(plot_px.width(), TICK_FONT_PT * 3.0),
        );
        let y_values = nice_ticks(
            limits.y0,
            limits.y1,
            bins_for_axis(plot_px.height(), TICK_FONT_PT * 2.0),
        );

        Self {
            canvas,
            plot_px,
            limits,
            x_ticks: AxisTicks {
                labels: format_ticks(&x_values),
                values: x_values,
            },
            y_ticks: AxisTicks {
                labels: format_ticks(&y_values),
                values: y_values,
            },
        }
    }

    /// Autoscale to `extent` with default subplot placement.
    pub fn autoscaled(canvas: Canvas, extent: &DataExtent) -> Self {
        Self::new(canvas, SubplotParams::default(), extent.view_limits())
    }

    /// Canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Axes rectangle in pixels.
    pub fn plot_px(&self) -> Rect {
        self.plot_px
    }

    /// Visible data limits.
    pub fn limits(&self) -> Rect {
        self.limits
    }

    /// Data-to-pixel transform (y grows upward in data space, downward in pixels).
    pub fn data_to_px(&self) -> Affine {
        let sx = self.plot_px.width() / self.limits.width();
        let sy = self.plot_px.height() / self.limits.height();
        Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            self.plot_px.x0 - self.limits.x0 * sx,
            self.plot_px.y1 + self.limits.y0 * sy,
        ])
    }

    /// Map one data point to pixels.
    pub fn to_px(&self, p: Point) -> Point {
        self.data_to_px() * p
    }
}
