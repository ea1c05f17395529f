//! Axes decoration (frame mask, spines, ticks, labels) rendered through `usvg`/`resvg`.
//!
//! The decoration is drawn on top of the plot content. Its outer region is filled with the
//! figure background so that markers near the limits are clipped to the axes rectangle.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{PlotError, PlotResult};
use crate::layout::axes::{AxesLayout, TICK_FONT_PT};

const PT_TO_PX: f64 = 100.0 / 72.0;
const SPINE_WIDTH_PT: f64 = 0.8;
const TICK_LENGTH_PT: f64 = 3.5;
const TICK_PAD_PT: f64 = 3.5;
const LABEL_PAD_PT: f64 = 4.0;
const FONT_FAMILY: &str = "DejaVu Sans, Bitstream Vera Sans, Arial, Helvetica, sans-serif";

/// Axis titles drawn by [`ChromeRasterizer::rasterize`].
#[derive(Clone, Copy, Debug)]
pub struct AxisLabels<'a> {
    /// Horizontal axis title.
    pub x: &'a str,
    /// Vertical axis title.
    pub y: &'a str,
}

/// Parses and rasterizes axes decoration SVG. Holds the font database, which is expensive to
/// build, so one instance should be shared across scenarios.
pub struct ChromeRasterizer {
    options: usvg::Options<'static>,
}

impl ChromeRasterizer {
    /// Build a rasterizer backed by the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts for axes text");
        Self::with_fontdb(db)
    }

    /// Build a rasterizer with system fonts plus every font file under `dir`.
    pub fn with_font_dir(dir: &Path) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        db.load_fonts_dir(dir);
        Self::with_fontdb(db)
    }

    /// Build a rasterizer over an explicit font database. An empty database renders no text.
    pub fn with_fontdb(db: usvg::fontdb::Database) -> Self {
        Self {
            options: usvg::Options {
                fontdb: Arc::new(db),
                ..Default::default()
            },
        }
    }

    /// Number of font faces available for text.
    pub fn font_faces(&self) -> usize {
        self.options.fontdb.len()
    }

    /// Rasterize the decoration for `layout` into premultiplied RGBA8 bytes.
    pub fn rasterize(
        &self,
        layout: &AxesLayout,
        colors: ChromeColors,
        labels: Option<AxisLabels<'_>>,
    ) -> PlotResult<Vec<u8>> {
        let svg = chrome_svg(layout, colors, labels);
        let tree = usvg::Tree::from_str(&svg, &self.options).context("parse axes svg")?;
        rasterize_svg_to_premul_rgba8(&tree, layout.canvas())
    }
}

/// Colors used by the decoration.
#[derive(Clone, Copy, Debug)]
pub struct ChromeColors {
    /// Fill outside the axes rectangle.
    pub background: Rgba8,
    /// Spines, ticks, and text.
    pub foreground: Rgba8,
}

pub(crate) fn chrome_svg(
    layout: &AxesLayout,
    colors: ChromeColors,
    labels: Option<AxisLabels<'_>>,
) -> String {
    let Canvas { width, height } = layout.canvas();
    let (w, h) = (f64::from(width), f64::from(height));
    let r = layout.plot_px();
    let to_px = layout.data_to_px();

    let fg = colors.foreground.to_hex();
    let bg = colors.background.to_hex();
    let spine = SPINE_WIDTH_PT * PT_TO_PX;
    let tick_len = TICK_LENGTH_PT * PT_TO_PX;
    let font_px = TICK_FONT_PT * PT_TO_PX;
    let pad = TICK_PAD_PT * PT_TO_PX;

    let mut s = String::with_capacity(4096);
    s.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    s.push_str(&format!(
        r#"<path fill="{bg}" fill-rule="evenodd" d="M0 0H{w}V{h}H0Z M{x0} {y0}H{x1}V{y1}H{x0}Z"/>"#,
        x0 = r.x0,
        y0 = r.y0,
        x1 = r.x1,
        y1 = r.y1,
    ));
    s.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{fg}" stroke-width="{spine}"/>"#,
        r.x0,
        r.y0,
        r.width(),
        r.height()
    ));

    s.push_str(&format!(
        r#"<g stroke="{fg}" stroke-width="{spine}" fill="none">"#
    ));
    for &v in &layout.x_ticks.values {
        let x = (to_px * Point::new(v, 0.0)).x;
        s.push_str(&format!(
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
            r.y1,
            r.y1 + tick_len
        ));
    }
    for &v in &layout.y_ticks.values {
        let y = (to_px * Point::new(0.0, v)).y;
        s.push_str(&format!(
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
            r.x0 - tick_len,
            r.x0
        ));
    }
    s.push_str("</g>");

    s.push_str(&format!(
        r#"<g fill="{fg}" font-family="{FONT_FAMILY}" font-size="{font_px}">"#
    ));
    for (&v, label) in layout.x_ticks.values.iter().zip(&layout.x_ticks.labels) {
        let x = (to_px * Point::new(v, 0.0)).x;
        s.push_str(&format!(
            r#"<text x="{x}" y="{}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
            r.y1 + tick_len + pad,
            escape_xml(label)
        ));
    }
    for (&v, label) in layout.y_ticks.values.iter().zip(&layout.y_ticks.labels) {
        let y = (to_px * Point::new(0.0, v)).y;
        s.push_str(&format!(
            r#"<text x="{}" y="{y}" text-anchor="end" dominant-baseline="central">{}</text>"#,
            r.x0 - tick_len - pad,
            escape_xml(label)
        ));
    }

    if let Some(labels) = labels {
        let label_pad = LABEL_PAD_PT * PT_TO_PX;
        let x_title_y = r.y1 + tick_len + pad + font_px + label_pad;
        let widest_y_label = layout
            .y_ticks
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(1) as f64;
        // Approximate label width at ~0.6em per glyph.
        let y_title_x = r.x0 - tick_len - pad - widest_y_label * font_px * 0.6 - label_pad;
        let cy = (r.y0 + r.y1) / 2.0;
        s.push_str(&format!(
            r#"<text x="{}" y="{x_title_y}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
            (r.x0 + r.x1) / 2.0,
            escape_xml(labels.x)
        ));
        s.push_str(&format!(
            r#"<text x="{y_title_x}" y="{cy}" text-anchor="middle" transform="rotate(-90 {y_title_x} {cy})">{}</text>"#,
            escape_xml(labels.y)
        ));
    }
    s.push_str("</g></svg>");
    s
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn rasterize_svg_to_premul_rgba8(tree: &usvg::Tree, canvas: Canvas) -> PlotResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| PlotError::render("failed to allocate axes pixmap"))?;

    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.take())
}
