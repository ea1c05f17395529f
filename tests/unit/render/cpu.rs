use super::*;
use crate::data::parse::XySeries;
use crate::layout::axes::SubplotParams;
use crate::scene::model::{Goal, Obstacle};

fn canvas() -> Canvas {
    Canvas {
        width: 160,
        height: 120,
    }
}

fn chrome() -> ChromeRasterizer {
    ChromeRasterizer::with_fontdb(usvg::fontdb::Database::new())
}

fn layout() -> AxesLayout {
    AxesLayout::new(
        canvas(),
        SubplotParams::default(),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    )
}

fn px(frame: &FrameRGBA, p: Point) -> [u8; 4] {
    frame
        .pixel(p.x.round() as u32, p.y.round() as u32)
        .expect("pixel inside frame")
}

#[test]
fn frame_has_canvas_size_and_opaque_background() {
    let data = XySeries::default();
    let path = XySeries::default();
    let scene = PlotScene {
        data: &data,
        path: &path,
        obstacles: &[],
        goal: Goal::default(),
    };
    let mut r = PlotRenderer::new(&scene, layout(), &PlotStyle::default(), &chrome()).unwrap();
    let f = r.render_frame(Point::new(5.0, 5.0), false).unwrap();
    assert_eq!((f.width, f.height), (160, 120));
    assert_eq!(f.data.len(), 160 * 120 * 4);
    assert!(f.premultiplied);
    assert!(f.data.chunks_exact(4).all(|p| p[3] == 255));
    assert_eq!(f.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn marker_obstacle_and_goal_use_their_colors() {
    let data = XySeries::default();
    let path = XySeries::default();
    let obstacles = [Obstacle::at(2.0, 2.0)];
    let scene = PlotScene {
        data: &data,
        path: &path,
        obstacles: &obstacles,
        goal: Goal {
            center: [8.0, 8.0],
            radius: 1.0,
        },
    };
    let l = layout();
    let mut r = PlotRenderer::new(&scene, l.clone(), &PlotStyle::default(), &chrome()).unwrap();
    let f = r.render_frame(Point::new(5.0, 5.0), false).unwrap();

    assert_eq!(px(&f, l.to_px(Point::new(2.0, 2.0))), [0, 0, 0, 255]);
    assert_eq!(px(&f, l.to_px(Point::new(8.0, 8.0))), [0, 128, 0, 255]);
    assert_eq!(px(&f, l.to_px(Point::new(5.0, 5.0))), [255, 0, 0, 255]);
    assert_eq!(px(&f, l.to_px(Point::new(5.0, 2.0))), [255, 255, 255, 255]);
}

#[test]
fn marker_moves_between_frames_over_a_fixed_background() {
    let data = XySeries::from_points([(1.0, 9.0)]);
    let path = XySeries::from_points([(3.0, 3.0), (7.0, 7.0)]);
    let scene = PlotScene {
        data: &data,
        path: &path,
        obstacles: &[],
        goal: Goal::default(),
    };
    let l = layout();
    let style = PlotStyle::default();
    let mut r = PlotRenderer::new(&scene, l.clone(), &style, &chrome()).unwrap();

    let a = r.render_frame(path.point(0).unwrap(), true).unwrap();
    let b = r.render_frame(path.point(1).unwrap(), true).unwrap();
    assert_ne!(a.data, b.data);

    assert_eq!(px(&a, l.to_px(Point::new(3.0, 3.0))), [255, 0, 0, 255]);
    // Once the marker leaves, the path sample underneath shows again.
    assert_eq!(px(&b, l.to_px(Point::new(3.0, 3.0))), [255, 127, 14, 255]);
    assert_eq!(px(&b, l.to_px(Point::new(1.0, 9.0))), [31, 119, 180, 255]);

    let again = r.render_frame(path.point(1).unwrap(), true).unwrap();
    assert_eq!(again, b);
}

#[test]
fn marker_outside_limits_is_clipped_by_the_axes_frame() {
    let data = XySeries::default();
    let path = XySeries::default();
    let scene = PlotScene {
        data: &data,
        path: &path,
        obstacles: &[],
        goal: Goal::default(),
    };
    let l = layout();
    let mut r = PlotRenderer::new(&scene, l.clone(), &PlotStyle::default(), &chrome()).unwrap();
    let plain = r.render_frame(Point::new(-100.0, -100.0), false).unwrap();
    let nan = r.render_frame(Point::new(f64::NAN, 0.0), false).unwrap();
    assert_eq!(plain, nan);
}

#[test]
fn autoscaled_layout_renders() {
    let data = XySeries::from_points([(0.0, 0.0), (10.0, 10.0)]);
    let path = XySeries::from_points([(0.0, 0.0)]);
    let scene = PlotScene {
        data: &data,
        path: &path,
        obstacles: &[],
        goal: Goal::default(),
    };
    let l = AxesLayout::autoscaled(canvas(), &scene.extent());
    let mut r = PlotRenderer::new(&scene, l, &PlotStyle::default(), &chrome()).unwrap();
    assert!(r.render_frame(Point::new(0.0, 0.0), true).is_ok());
}
