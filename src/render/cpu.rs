use kurbo::{Circle, Shape};

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{PlotError, PlotResult};
use crate::layout::axes::AxesLayout;
use crate::render::backend::FrameRGBA;
use crate::render::chrome::{AxisLabels, ChromeColors, ChromeRasterizer};
use crate::render::composite::over_in_place;
use crate::render::plot::PlotScene;
use crate::scene::config::PlotStyle;

/// Flattening tolerance for disks built in pixel space.
const PX_TOLERANCE: f64 = 0.05;

/// CPU renderer for one scenario, powered by `vello_cpu`.
///
/// Everything except the moving marker is rasterized once in [`PlotRenderer::new`]; each frame
/// composites the marker and the axes decoration over that cached background.
pub struct PlotRenderer {
    layout: AxesLayout,
    marker_color: Rgba8,
    marker_radius_px: f64,
    width: u16,
    height: u16,

    ctx: Option<vello_cpu::RenderContext>,
    background: Vec<u8>,
    chrome_plain: Vec<u8>,
    chrome_labeled: Vec<u8>,
}

impl PlotRenderer {
    /// Rasterize the static parts of `scene` for `layout`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(
        scene: &PlotScene<'_>,
        layout: AxesLayout,
        style: &PlotStyle,
        chrome: &ChromeRasterizer,
    ) -> PlotResult<Self> {
        let (width, height) = canvas_u16(layout.canvas())?;

        let colors = ChromeColors {
            background: style.background,
            foreground: style.axes_color,
        };
        let chrome_plain = chrome.rasterize(&layout, colors, None)?;
        let chrome_labeled = chrome.rasterize(
            &layout,
            colors,
            Some(AxisLabels {
                x: &style.x_label,
                y: &style.y_label,
            }),
        )?;

        let mut out = Self {
            layout,
            marker_color: style.marker_color,
            marker_radius_px: style.marker_radius_px,
            width,
            height,
            ctx: None,
            background: Vec::new(),
            chrome_plain,
            chrome_labeled,
        };

        let to_px = out.layout.data_to_px();
        out.background = out.raster(|ctx| {
            let (w, h) = (f64::from(width), f64::from(height));
            fill_path(
                ctx,
                style.background,
                &Rect::new(0.0, 0.0, w, h).to_path(PX_TOLERANCE),
            );

            let obstacles = data_disks(
                to_px,
                scene
                    .obstacles
                    .iter()
                    .map(|o| (o.center_point(), o.radius)),
            );
            fill_path(ctx, style.obstacle_color, &obstacles);

            let goal = data_disks(
                to_px,
                std::iter::once((scene.goal.center_point(), scene.goal.radius)),
            );
            fill_path(ctx, style.goal_color, &goal);

            let samples = pixel_disks(to_px, scene.data.points(), style.point_radius_px);
            fill_path(ctx, style.data_color, &samples);

            let path = pixel_disks(to_px, scene.path.points(), style.point_radius_px);
            fill_path(ctx, style.path_color, &path);
        })?;

        Ok(out)
    }

    /// Axes geometry in use.
    pub fn layout(&self) -> &AxesLayout {
        &self.layout
    }

    /// Render one frame with the marker at `marker` (data coordinates).
    ///
    /// `axis_labels` adds the axis titles to the decoration.
    pub fn render_frame(&mut self, marker: Point, axis_labels: bool) -> PlotResult<FrameRGBA> {
        let to_px = self.layout.data_to_px();
        let (color, radius) = (self.marker_color, self.marker_radius_px);
        let layer = self.raster(|ctx| {
            let disk = pixel_disks(to_px, std::iter::once(marker), radius);
            fill_path(ctx, color, &disk);
        })?;

        let mut data = self.background.clone();
        over_in_place(&mut data, &layer)?;
        let chrome = if axis_labels {
            &self.chrome_labeled
        } else {
            &self.chrome_plain
        };
        over_in_place(&mut data, chrome)?;

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }

    fn raster(&mut self, draw: impl FnOnce(&mut vello_cpu::RenderContext)) -> PlotResult<Vec<u8>> {
        let (width, height) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        draw(&mut ctx);
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        let bytes = pixmap.data_as_u8_slice().to_vec();
        if bytes.len() != usize::from(width) * usize::from(height) * 4 {
            return Err(PlotError::render("pixmap byte length mismatch"));
        }
        Ok(bytes)
    }
}

fn canvas_u16(canvas: Canvas) -> PlotResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| PlotError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| PlotError::render("canvas height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(PlotError::render("canvas width/height must be non-zero"));
    }
    Ok((w, h))
}

/// Disks with radii in data units, so they stretch with the axes scale.
fn data_disks(to_px: Affine, disks: impl Iterator<Item = (Point, f64)>) -> BezPath {
    let data_tolerance = PX_TOLERANCE / to_px.as_coeffs()[0].abs().max(1e-12);
    let mut out = BezPath::new();
    for (c, r) in disks {
        if !(c.x.is_finite() && c.y.is_finite() && r.is_finite() && r > 0.0) {
            continue;
        }
        out.extend(to_px * Circle::new(c, r).to_path(data_tolerance));
    }
    out
}

/// Disks with a fixed pixel radius centered on data points.
fn pixel_disks(to_px: Affine, centers: impl Iterator<Item = Point>, radius_px: f64) -> BezPath {
    let mut out = BezPath::new();
    for c in centers {
        if !(c.x.is_finite() && c.y.is_finite()) {
            continue;
        }
        out.extend(Circle::new(to_px * c, radius_px).path_elements(PX_TOLERANCE));
    }
    out
}

fn fill_path(ctx: &mut vello_cpu::RenderContext, color: Rgba8, path: &BezPath) {
    if path.elements().is_empty() {
        return;
    }
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
