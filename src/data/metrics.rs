/// Sum of Euclidean distances between consecutive `(x[i], y[i])` points.
///
/// Returns `0.0` for fewer than two points. Mismatched slices are truncated to the shorter one.
pub fn path_length(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    (1..n)
        .map(|i| {
            let dx = x[i] - x[i - 1];
            let dy = y[i] - y[i - 1];
            dx.hypot(dy)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse::XySeries;

    #[test]
    fn empty_and_single_point_have_zero_length() {
        assert_eq!(path_length(&[], &[]), 0.0);
        assert_eq!(path_length(&[4.0], &[2.0]), 0.0);
    }

    #[test]
    fn collinear_segments_add_up() {
        assert_eq!(path_length(&[0.0, 1.0, 3.0], &[0.0, 0.0, 0.0]), 3.0);
    }

    #[test]
    fn three_four_five_triangle() {
        assert_eq!(path_length(&[0.0, 3.0], &[0.0, 4.0]), 5.0);
    }

    #[test]
    fn back_and_forth_counts_both_legs() {
        let s = XySeries::from_points([(0.0, 0.0), (0.0, 2.0), (0.0, 0.0)]);
        assert_eq!(s.path_length(), 4.0);
    }

    #[test]
    fn mismatched_lengths_use_shorter_slice() {
        assert_eq!(path_length(&[0.0, 3.0, 100.0], &[0.0, 4.0]), 5.0);
    }
}
