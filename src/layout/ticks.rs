/// Candidate step multipliers, per decade.
const STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Upper bound on the number of intervals between ticks.
pub const MAX_BINS: usize = 9;

/// Tick positions for `[vmin, vmax]` using at most `max_bins` intervals.
///
/// Ticks are multiples of a step drawn from `{1, 2, 2.5, 5, 10} * 10^k` and are restricted to the
/// closed interval (with a small tolerance for rounding).
pub fn nice_ticks(vmin: f64, vmax: f64, max_bins: usize) -> Vec<f64> {
    if !vmin.is_finite() || !vmax.is_finite() || vmax <= vmin {
        return Vec::new();
    }
    let max_bins = max_bins.clamp(1, MAX_BINS);
    let span = vmax - vmin;
    let raw_step = span / max_bins as f64;
    let scale = 10f64.powf(raw_step.log10().floor());
    let tol = span * 1e-10;

    for decade in [scale, scale * 10.0] {
        for mult in STEPS {
            let step = mult * decade;
            if step < raw_step * (1.0 - 1e-9) {
                continue;
            }
            let ticks = ticks_for_step(vmin, vmax, step, tol);
            if ticks.len() <= max_bins + 1 {
                return ticks;
            }
        }
    }

    vec![vmin, vmax]
}

fn ticks_for_step(vmin: f64, vmax: f64, step: f64, tol: f64) -> Vec<f64> {
    let first = (vmin / step).ceil() as i64;
    let last = (vmax / step).floor() as i64;
    let mut out: Vec<f64> = (first - 1..=last + 1)
        .map(|k| k as f64 * step)
        .filter(|&t| t >= vmin - tol && t <= vmax + tol)
        .collect();
    // Snap near-zero noise (e.g. 3 * 0.1 - 0.3).
    for t in &mut out {
        if t.abs() < step * 1e-9 {
            *t = 0.0;
        }
    }
    out
}

/// Format ticks with the fewest decimals that represent every value exactly (up to 1e-9).
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let decimals = (0..=10usize)
        .find(|&d| {
            let p = 10f64.powi(d as i32);
            ticks
                .iter()
                .all(|&t| ((t * p).round() / p - t).abs() <= 1e-9 * t.abs().max(1.0))
        })
        .unwrap_or(10);

    ticks
        .iter()
        .map(|&t| {
            let s = format!("{t:.decimals$}");
            let s = if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
                s.trim_start_matches('-').to_owned()
            } else {
                s
            };
            s.replacen('-', "\u{2212}", 1)
        })
        .collect()
}

/// Maximum interval count that fits an axis of `length_px` pixels at 100 dpi, given the label
/// spacing in points (`3 * font_size` horizontally, `2 * font_size` vertically).
pub fn bins_for_axis(length_px: f64, spacing_pt: f64) -> usize {
    if spacing_pt <= 0.0 || !length_px.is_finite() {
        return MAX_BINS;
    }
    let length_pt = length_px * 72.0 / 100.0;
    ((length_pt / spacing_pt).floor() as usize).clamp(1, MAX_BINS)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ticks.rs"]
mod tests;
