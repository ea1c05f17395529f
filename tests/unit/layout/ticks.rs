use super::*;

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn unit_square_with_margins_gets_even_ticks() {
    let t = nice_ticks(-0.5, 10.5, 9);
    assert!(approx(&t, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]), "{t:?}");
}

#[test]
fn small_spans_use_fractional_steps() {
    let t = nice_ticks(0.0, 1.0, 9);
    assert!(approx(&t, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]), "{t:?}");

    let t = nice_ticks(-1.1, 1.1, 4);
    assert!(approx(&t, &[-1.0, 0.0, 1.0]), "{t:?}");
}

#[test]
fn respects_bin_limit() {
    for bins in 1..=9 {
        let t = nice_ticks(-3.7, 123.4, bins);
        assert!(t.len() <= bins + 1, "bins={bins} ticks={t:?}");
        assert!(!t.is_empty());
        assert!(t.iter().all(|&v| (-3.7..=123.4).contains(&v)));
    }
}

#[test]
fn degenerate_ranges_have_no_ticks() {
    assert!(nice_ticks(1.0, 1.0, 9).is_empty());
    assert!(nice_ticks(2.0, 1.0, 9).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 9).is_empty());
}

#[test]
fn labels_use_shared_precision() {
    assert_eq!(
        format_ticks(&[0.0, 2.5, 5.0, 7.5, 10.0]),
        vec!["0.0", "2.5", "5.0", "7.5", "10.0"]
    );
    assert_eq!(format_ticks(&[0.0, 2.0, 4.0]), vec!["0", "2", "4"]);
    assert_eq!(format_ticks(&[-1.0, 0.0]), vec!["\u{2212}1", "0"]);
    assert_eq!(format_ticks(&[-0.0]), vec!["0"]);
}

#[test]
fn bins_scale_with_axis_length() {
    assert_eq!(bins_for_axis(496.0, 30.0), 9);
    assert_eq!(bins_for_axis(100.0, 30.0), 2);
    assert_eq!(bins_for_axis(1.0, 30.0), 1);
}
