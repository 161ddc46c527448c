// Host-side end-to-end tests: pointer and sensor input through the registry
// to layer transforms.

mod common;

use common::{MockContainer, MockElement};
use glam::DVec2;
use parallax_core::{
    apply_transforms, InputSource, LayerParams, LayerRegistry, ParallaxController,
    ParallaxOptions, TiltSample, MOTION_DAMPING, ORIENTATION_DAMPING,
};

const BASE_SIZE: DVec2 = DVec2::new(400.0, 300.0);
const BASE_CENTER: DVec2 = DVec2::new(200.0, 150.0);

fn single_layer() -> (MockElement, LayerRegistry<MockElement>) {
    let layer = MockElement::layer("0.5", "20").with_size(BASE_SIZE.x, BASE_SIZE.y);
    let container = MockContainer::new(vec![layer.clone()]);
    let registry = LayerRegistry::discover(&container).unwrap();
    (layer, registry)
}

fn controller() -> ParallaxController {
    let mut opts = ParallaxOptions::new("parallaxContainer");
    opts.smoothing_factor = 0.13;
    ParallaxController::new(opts.resolve(DVec2::new(1024.0, 768.0)).unwrap())
}

#[test]
fn pointer_offset_scenario() {
    let (layer, registry) = single_layer();
    let mut controller = controller();
    assert!(controller.on_pointer(BASE_CENTER + DVec2::new(100.0, 50.0), DVec2::ZERO, BASE_SIZE));
    apply_transforms(&registry, &controller);
    assert_eq!(layer.transform().as_deref(), Some("translate(6.5px, 3.25px)"));
}

#[test]
fn pointer_reference_ignores_written_translation() {
    // the base doubles as the only layer, so it moves with its own output
    let (layer, registry) = single_layer();
    let mut controller = controller();
    let container_origin = DVec2::new(30.0, 10.0);
    let pointer = container_origin + BASE_CENTER + DVec2::new(100.0, 50.0);
    for _ in 0..3 {
        let (origin, size) = registry.pointer_rect(container_origin);
        assert_eq!((origin, size), (container_origin, BASE_SIZE));
        assert!(controller.on_pointer(pointer, origin, size));
        apply_transforms(&registry, &controller);
        assert_eq!(layer.transform().as_deref(), Some("translate(6.5px, 3.25px)"));
    }
}

#[test]
fn pointer_far_right_is_clamped() {
    let (layer, registry) = single_layer();
    let mut controller = controller();
    controller.on_pointer(BASE_CENTER + DVec2::new(1000.0, 50.0), DVec2::ZERO, BASE_SIZE);
    apply_transforms(&registry, &controller);
    assert_eq!(layer.transform().as_deref(), Some("translate(20px, 3.25px)"));
}

#[test]
fn pointer_is_relative_to_base_rect_origin() {
    let mut controller = controller();
    let origin = DVec2::new(50.0, 80.0);
    controller.on_pointer(origin + BASE_CENTER, origin, BASE_SIZE);
    assert_eq!(controller.input(), DVec2::ZERO);
    controller.on_pointer(origin + BASE_SIZE, origin, BASE_SIZE);
    assert_eq!(controller.input(), DVec2::ONE);
    assert_eq!(controller.source(), InputSource::Pointer);
}

#[test]
fn pointer_over_empty_base_is_ignored() {
    let mut controller = controller();
    assert!(!controller.on_pointer(DVec2::new(10.0, 10.0), DVec2::ZERO, DVec2::ZERO));
    assert_eq!(controller.input(), DVec2::ZERO);
}

#[test]
fn partial_sensor_events_leave_input_untouched() {
    let mut controller = controller();
    controller.on_pointer(BASE_CENTER + DVec2::new(40.0, 0.0), DVec2::ZERO, BASE_SIZE);
    let before = controller.input();

    let partial = TiltSample {
        beta: Some(20.0),
        gamma: None,
    };
    assert!(!controller.on_orientation(partial));
    assert!(!controller.on_motion(TiltSample::default()));
    assert!(!controller.on_orientation(TiltSample {
        beta: Some(f64::NAN),
        gamma: Some(3.0),
    }));
    assert_eq!(controller.input(), before);
    assert_eq!(controller.source(), InputSource::Pointer);
}

#[test]
fn flat_device_zeroes_input() {
    let mut controller = controller();
    controller.on_pointer(BASE_CENTER + DVec2::new(40.0, 0.0), DVec2::ZERO, BASE_SIZE);
    assert!(controller.on_orientation(TiltSample::new(2.0, -1.0)));
    assert_eq!(controller.input(), DVec2::ZERO);
    assert_eq!(controller.source(), InputSource::Orientation);
}

#[test]
fn sensor_sources_use_damped_modifiers() {
    let mut controller = controller();
    controller.on_orientation(TiltSample::new(30.0, 20.0));
    assert_eq!(controller.modifier(), ORIENTATION_DAMPING);
    controller.on_motion(TiltSample::new(30.0, 20.0));
    assert_eq!(controller.modifier(), ORIENTATION_DAMPING);
    assert_eq!(controller.motion().modifier, MOTION_DAMPING);
    controller.on_pointer(BASE_CENTER, DVec2::ZERO, BASE_SIZE);
    assert_eq!(controller.modifier(), 0.13);
}

#[test]
fn still_motion_keeps_tilt_offset() {
    let (layer, registry) = single_layer();
    let mut controller = controller();
    controller.on_orientation(TiltSample::new(40.0, 30.0));
    apply_transforms(&registry, &controller);
    let tilted = layer.transform();
    assert_ne!(tilted.as_deref(), Some("translate(0px, 0px)"));

    assert!(controller.on_motion(TiltSample::new(0.0, 0.0)));
    apply_transforms(&registry, &controller);
    assert_eq!(layer.transform(), tilted);
    assert_eq!(controller.source(), InputSource::Orientation);
}

#[test]
fn motion_adds_to_tilt_offset() {
    let params = LayerParams {
        depth: 1.0,
        max_range: 1000.0,
        calibrate_x: None,
        calibrate_y: None,
    };
    let center = BASE_SIZE * 0.5;
    let mut controller = controller();
    controller.on_orientation(TiltSample::new(40.0, 30.0));
    let tilt = controller.layer_translation(&params, center);

    controller.on_motion(TiltSample::new(10.0, 20.0));
    let motion = controller.motion();
    let expected = tilt + motion.input * motion.modifier * center;
    let combined = controller.layer_translation(&params, center);
    assert!((combined - expected).length() < 1e-9);
    assert!(combined.x > tilt.x && combined.y > tilt.y);
}

#[test]
fn orientation_moves_layers_within_range() {
    let (layer, registry) = single_layer();
    let mut controller = controller();
    controller.on_orientation(TiltSample::new(60.0, -45.0));
    apply_transforms(&registry, &controller);
    let delta = controller.layer_translation(&registry.layers()[0].params, BASE_SIZE * 0.5);
    assert!(delta.x < 0.0 && delta.y > 0.0);
    assert!(delta.x.abs() <= 20.0 && delta.y.abs() <= 20.0);
    assert!(layer.transform().is_some());
}

#[test]
fn layer_can_opt_out_of_calibration_per_axis() {
    let mut controller = controller();
    // re-anchor so the next sample becomes the zero point
    controller.request_reanchor();
    controller.on_orientation(TiltSample::new(40.0, 20.0));
    assert_eq!(controller.input(), DVec2::ZERO);

    let calibrated = LayerParams {
        depth: 1.0,
        max_range: 1000.0,
        calibrate_x: None,
        calibrate_y: None,
    };
    let raw_x = LayerParams {
        calibrate_x: Some(false),
        ..calibrated
    };
    assert_eq!(controller.layer_input(&calibrated), DVec2::ZERO);
    let input = controller.layer_input(&raw_x);
    assert!(input.x > 0.0);
    assert_eq!(input.y, 0.0);
}
