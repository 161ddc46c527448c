// Host-side tests for the layer translation math and CSS output.

use glam::DVec2;
use parallax_core::{compute_delta, css_translate, format_px};

const CENTER: DVec2 = DVec2::new(200.0, 150.0);

#[test]
fn translation_never_exceeds_max_range() {
    let inputs = [-1e6, -50.0, -1.0, -0.3, 0.0, 0.3, 1.0, 50.0, 1e6];
    for &x in &inputs {
        for &y in &inputs {
            for depth in [0.1, 0.5, 1.0, 4.0] {
                for max_range in [0.0, 5.0, 20.0, 300.0] {
                    let d = compute_delta(DVec2::new(x, y), depth, 0.13, CENTER, max_range);
                    assert!(d.x.abs() <= max_range && d.y.abs() <= max_range, "{d:?}");
                }
            }
        }
    }
}

#[test]
fn zero_depth_layer_is_stationary() {
    for input in [DVec2::new(1.0, -1.0), DVec2::new(1e9, 1e9), DVec2::new(-0.5, 0.25)] {
        assert_eq!(compute_delta(input, 0.0, 0.13, CENTER, 50.0), DVec2::ZERO);
        assert_eq!(compute_delta(input, 0.0, 0.1, CENTER, 50.0), DVec2::ZERO);
    }
    assert_eq!(css_translate(compute_delta(DVec2::new(-1.0, -1.0), 0.0, 0.13, CENTER, 20.0)), "translate(0px, 0px)");
}

#[test]
fn deeper_layers_move_at_least_as_far() {
    let input = DVec2::new(0.4, -0.7);
    let mut prev = DVec2::ZERO;
    for depth in [0.0, 0.1, 0.25, 0.5, 1.0, 2.0, 8.0] {
        let d = compute_delta(input, depth, 0.13, CENTER, 20.0);
        assert!(d.x.abs() >= prev.x.abs());
        assert!(d.y.abs() >= prev.y.abs());
        prev = d;
    }
    // the deepest layer has hit the clamp
    assert_eq!(prev.y, -20.0);
}

#[test]
fn negative_max_range_is_treated_as_magnitude() {
    let d = compute_delta(DVec2::new(5.0, -5.0), 1.0, 1.0, CENTER, -10.0);
    assert_eq!(d, DVec2::new(10.0, -10.0));
}

#[test]
fn px_formatting() {
    assert_eq!(format_px(6.5), "6.5px");
    assert_eq!(format_px(6.499999999999999), "6.5px");
    assert_eq!(format_px(20.0), "20px");
    assert_eq!(format_px(-0.0), "0px");
    assert_eq!(format_px(-0.00001), "0px");
    assert_eq!(format_px(-3.25), "-3.25px");
    assert_eq!(css_translate(DVec2::new(6.5, 3.25)), "translate(6.5px, 3.25px)");
}
