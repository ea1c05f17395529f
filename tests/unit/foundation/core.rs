use super::*;

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
}

#[test]
fn empty_range_yields_no_frames() {
    let r = FrameRange::new(FrameIndex(0), FrameIndex(0)).unwrap();
    assert_eq!(r.len_frames(), 0);
    assert_eq!(r.iter().count(), 0);
}

#[test]
fn fps_from_interval_reduces_fraction() {
    assert_eq!(Fps::from_interval_ms(100).unwrap(), Fps { num: 10, den: 1 });
    assert_eq!(Fps::from_interval_ms(40).unwrap(), Fps { num: 25, den: 1 });
    assert_eq!(Fps::from_interval_ms(30).unwrap(), Fps { num: 100, den: 3 });
    assert!(Fps::from_interval_ms(0).is_err());
}

#[test]
fn fps_new_validates_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(1, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap(), Fps { num: 30, den: 1 });
}

#[test]
fn rgba8_hex_parse_and_format() {
    let c = Rgba8::parse_hex("#1f77b4").unwrap();
    assert_eq!(c, Rgba8::rgb(0x1f, 0x77, 0xb4));
    assert_eq!(c.to_hex(), "#1f77b4");

    let c = Rgba8::parse_hex("FF000080").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_hex(), "#ff000080");

    assert!(Rgba8::parse_hex("#123").is_err());
    assert!(Rgba8::parse_hex("#zz0000").is_err());
}

#[test]
fn rgba8_serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_str("\"#008000\"").unwrap();
    assert_eq!(c, Rgba8::rgb(0, 128, 0));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#008000\"");
    assert!(serde_json::from_str::<Rgba8>("\"green\"").is_err());
}
