// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use web_constants::*;
use parallax_core::*;

#[test]
fn selectors_match_attribute_contract() {
    assert_eq!(LAYER_SELECTOR, format!("[{ATTR_DEPTH}]"));
    assert_eq!(BASE_SELECTOR, format!("[{ATTR_BASE}]"));
    assert_eq!(PERMISSION_TRIGGER_SELECTOR, format!("[{ATTR_PERMISSION_TRIGGER}]"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sensor_sources_are_damped_harder_than_pointer() {
    assert!(ORIENTATION_DAMPING * DEFAULT_GYRO_EFFECT_MODIFIER < DEFAULT_SMOOTHING_FACTOR);
    assert!(MOTION_DAMPING < ORIENTATION_DAMPING);
    assert!(MOTION_DAMPING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_sane() {
    assert!(DEFAULT_CALIBRATION_SAMPLES > 0);
    assert!(SENSITIVITY_ASPECT_FACTOR > 0.0);
    assert!(FLAT_THRESHOLD_DEG < SUPINE_THRESHOLD_DEG);
    assert!(DEFAULT_POINTER_DEBOUNCE_MS < DEFAULT_RESIZE_DEBOUNCE_MS);
    assert!(CSS_PX_PRECISION >= 1.0);
}
