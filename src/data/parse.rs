use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{PlotError, PlotResult};

/// Ordered `(x, y)` samples held as two parallel sequences.
///
/// Order is significant: for a path it is the trajectory order and the animation frame order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XySeries {
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates, same length as `x`.
    pub y: Vec<f64>,
}

impl XySeries {
    /// Build a series from points.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self { x, y }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Return `true` when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th sample, if any.
    pub fn point(&self, i: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Samples in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Bounding box of the finite samples, or `None` when there are none.
    pub fn bounds(&self) -> Option<Rect> {
        self.points()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(None, |acc: Option<Rect>, p| match acc {
                None => Some(Rect::from_points(p, p)),
                Some(r) => Some(r.union_pt(p)),
            })
    }

    /// Total Euclidean length of the polyline through the samples.
    pub fn path_length(&self) -> f64 {
        crate::data::metrics::path_length(&self.x, &self.y)
    }
}

/// Read a comma-delimited file of `x,y` rows (no header).
///
/// Columns past the second are ignored. A blank or whitespace-only row is an error; the final
/// line terminator is optional.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn parse_xy(path: &Path) -> PlotResult<XySeries> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read coordinate file '{}'", path.display()))?;
    let series = parse_xy_str(&text, path)?;
    tracing::debug!(samples = series.len(), "parsed coordinate file");
    Ok(series)
}

/// Parse `x,y` rows from in-memory text. `origin` is only used in error messages.
pub fn parse_xy_str(text: &str, origin: &Path) -> PlotResult<XySeries> {
    let mut out = XySeries::default();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        if raw.trim().is_empty() {
            return Err(PlotError::parse(origin, line_no, "blank row"));
        }

        let mut fields = raw.split(',');
        let mut next_value = |axis: &str| -> PlotResult<f64> {
            let field = fields.next().ok_or_else(|| {
                PlotError::parse(origin, line_no, format!("missing {axis} column"))
            })?;
            let field = field.trim();
            field.parse::<f64>().map_err(|_| {
                PlotError::parse(
                    origin,
                    line_no,
                    format!("{axis} value \"{field}\" is not a number"),
                )
            })
        };

        let x = next_value("x")?;
        let y = next_value("y")?;
        out.x.push(x);
        out.y.push(y);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> PlotResult<XySeries> {
        parse_xy_str(text, Path::new("mem.txt"))
    }

    #[test]
    fn parses_two_columns_in_order() {
        let s = parse("1.0,2.0\n3.5,-1.2\n").unwrap();
        assert_eq!(s.x, vec![1.0, 3.5]);
        assert_eq!(s.y, vec![2.0, -1.2]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.point(1), Some(Point::new(3.5, -1.2)));
        assert_eq!(s.point(2), None);
    }

    #[test]
    fn tolerates_whitespace_crlf_and_extra_columns() {
        let s = parse(" 1 , 2 ,ignored\r\n4e-1,5\r\n").unwrap();
        assert_eq!(s.x, vec![1.0, 0.4]);
        assert_eq!(s.y, vec![2.0, 5.0]);

        let unterminated = parse("1,2\n3,4").unwrap();
        assert_eq!(unterminated.x, vec![1.0, 3.0]);
    }

    #[test]
    fn blank_rows_are_rejected_with_their_line() {
        for (text, line) in [
            ("1,2\n\n3,4\n", 2),
            ("1,2\n   \n", 2),
            ("1,2\r\n\r\n", 2),
            ("\n1,2\n", 1),
        ] {
            match parse(text).unwrap_err() {
                PlotError::Parse { line: got, msg, .. } => {
                    assert_eq!(got, line, "{text:?}");
                    assert!(msg.contains("blank"));
                }
                other => panic!("unexpected error for {text:?}: {other}"),
            }
        }
    }

    #[test]
    fn empty_text_is_an_empty_series() {
        let s = parse("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.bounds(), None);
    }

    #[test]
    fn reports_line_number_for_bad_rows() {
        let err = parse("1,2\n3\n").unwrap_err();
        match err {
            PlotError::Parse { line, msg, .. } => {
                assert_eq!(line, 2);
                assert!(msg.contains("missing y column"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse("1,2\n5,6\nabc,4\n").unwrap_err();
        assert!(err.to_string().contains("mem.txt:3"));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = parse_xy(Path::new("target/does-not-exist/xy.txt")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn bounds_cover_all_samples() {
        let s = XySeries::from_points([(1.0, -2.0), (4.0, 3.0), (-1.0, 0.5)]);
        let b = s.bounds().unwrap();
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (-1.0, -2.0, 4.0, 3.0));
    }
}
