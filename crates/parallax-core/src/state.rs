//! Controller state shared by all input sources.
//!
//! Pointer and orientation share the primary term; whichever fired last wins.
//! Rotation rate feeds a separate motion term that is added on top, so a
//! still device keeps its tilt. All access happens on the UI thread.

use crate::calibration::Calibrator;
use crate::constants::{MOTION_DAMPING, ORIENTATION_DAMPING};
use crate::input::{normalize_tilt, pointer_input, InputSource, ScreenOrientation, TiltSample};
use crate::layer::LayerParams;
use crate::options::ResolvedOptions;
use crate::transform::compute_delta;
use glam::DVec2;

/// One source's share of the layer offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputTerm {
    /// Calibrated, normalized input.
    pub input: DVec2,
    /// Normalized input before calibration.
    pub raw_input: DVec2,
    pub modifier: f64,
}

impl InputTerm {
    pub const fn idle(modifier: f64) -> Self {
        Self {
            input: DVec2::ZERO,
            raw_input: DVec2::ZERO,
            modifier,
        }
    }

    /// Input as seen by one layer, honouring its per-axis calibration flags.
    fn for_layer(&self, params: &LayerParams) -> DVec2 {
        let pick = |flag: Option<bool>, calibrated: f64, raw: f64| {
            if flag == Some(false) {
                raw
            } else {
                calibrated
            }
        };
        DVec2::new(
            pick(params.calibrate_x, self.input.x, self.raw_input.x),
            pick(params.calibrate_y, self.input.y, self.raw_input.y),
        )
    }
}

pub struct ParallaxController {
    options: ResolvedOptions,
    primary: InputTerm,
    motion: InputTerm,
    source: InputSource,
    screen_orientation: ScreenOrientation,
    orientation_calibrator: Box<dyn Calibrator>,
    motion_calibrator: Box<dyn Calibrator>,
}

impl ParallaxController {
    pub fn new(options: ResolvedOptions) -> Self {
        let policy = options.calibration_policy;
        let window = options.calibration_samples;
        Self {
            primary: InputTerm::idle(options.smoothing_factor),
            motion: InputTerm::idle(options.gyro_effect_modifier * MOTION_DAMPING),
            options,
            source: InputSource::Pointer,
            screen_orientation: ScreenOrientation::default(),
            orientation_calibrator: policy.build(window),
            motion_calibrator: policy.build(window),
        }
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Calibrated, normalized pointer or orientation input.
    pub fn input(&self) -> DVec2 {
        self.primary.input
    }

    /// Primary input before calibration. Equal to `input` for the pointer.
    pub fn raw_input(&self) -> DVec2 {
        self.primary.raw_input
    }

    /// Modifier of the primary term.
    pub fn modifier(&self) -> f64 {
        self.primary.modifier
    }

    /// Source that last wrote the primary term.
    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Rotation-rate term layered on top of the primary one.
    pub fn motion(&self) -> InputTerm {
        self.motion
    }

    pub fn orientation_offset(&self) -> DVec2 {
        self.orientation_calibrator.offset()
    }

    pub fn motion_offset(&self) -> DVec2 {
        self.motion_calibrator.offset()
    }

    pub fn set_screen_orientation(&mut self, orientation: ScreenOrientation) {
        self.screen_orientation = orientation;
    }

    /// Pointer at `pointer` (client px) over a reference rect starting at
    /// `origin` with size `size`.
    pub fn on_pointer(&mut self, pointer: DVec2, origin: DVec2, size: DVec2) -> bool {
        let Some(input) = pointer_input(pointer, origin, size) else {
            log::debug!("[input] pointer ignored: reference rect has no size");
            return false;
        };
        self.source = InputSource::Pointer;
        self.primary = InputTerm {
            input,
            raw_input: input,
            modifier: self.options.smoothing_factor,
        };
        true
    }

    /// Device tilt. Events without both angles leave the state untouched.
    pub fn on_orientation(&mut self, sample: TiltSample) -> bool {
        let Some((beta, gamma)) = sample.angles() else {
            return false;
        };
        let modifier = self.options.gyro_effect_modifier * ORIENTATION_DAMPING;
        self.source = InputSource::Orientation;
        self.primary = match normalize_tilt(beta, gamma, self.screen_orientation) {
            None => InputTerm::idle(modifier),
            Some(screen) => {
                let calibrated = self.orientation_calibrator.calibrate(screen);
                let sensitivity = self.options.sensitivity;
                InputTerm {
                    input: calibrated / sensitivity,
                    raw_input: screen / sensitivity,
                    modifier,
                }
            }
        };
        true
    }

    /// Device rotation rate. Uses its own calibrator so rates and angles are
    /// never averaged together, and only replaces the motion term.
    pub fn on_motion(&mut self, sample: TiltSample) -> bool {
        let Some((beta, gamma)) = sample.angles() else {
            return false;
        };
        let screen = self.screen_orientation.to_screen(beta, gamma);
        let calibrated = self.motion_calibrator.calibrate(screen);
        let sensitivity = self.options.sensitivity;
        self.motion = InputTerm {
            input: calibrated / sensitivity,
            raw_input: screen / sensitivity,
            modifier: self.options.gyro_effect_modifier * MOTION_DAMPING,
        };
        true
    }

    pub fn request_orientation_reanchor(&mut self) {
        self.orientation_calibrator.request_reanchor();
    }

    pub fn request_reanchor(&mut self) {
        self.orientation_calibrator.request_reanchor();
        self.motion_calibrator.request_reanchor();
    }

    /// Primary input as seen by one layer, honouring its per-axis
    /// calibration flags.
    pub fn layer_input(&self, params: &LayerParams) -> DVec2 {
        self.primary.for_layer(params)
    }

    /// Sum of both terms, clamped once to the layer's range.
    pub fn layer_translation(&self, params: &LayerParams, axis_center: DVec2) -> DVec2 {
        let combined = self.primary.for_layer(params) * self.primary.modifier
            + self.motion.for_layer(params) * self.motion.modifier;
        compute_delta(combined, params.depth, 1.0, axis_center, params.max_range)
    }
}
