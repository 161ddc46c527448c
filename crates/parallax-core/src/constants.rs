// Shared tuning constants for the parallax pipeline.

// Attribute contract consumed from the host page
pub const ATTR_DEPTH: &str = "data-depth";
pub const ATTR_MAX_RANGE: &str = "data-max-range";
pub const ATTR_BASE: &str = "data-parallax-base";
pub const ATTR_CALIBRATE_X: &str = "data-calibrate-x";
pub const ATTR_CALIBRATE_Y: &str = "data-calibrate-y";
pub const ATTR_PERMISSION_TRIGGER: &str = "data-gyroscope-permission";
pub const ATTR_PLACEHOLDER: &str = "data-parallax-placeholder";

// Option defaults
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.13;
pub const DEFAULT_GYRO_EFFECT_MODIFIER: f64 = 1.0;
pub const DEFAULT_POINTER_DEBOUNCE_MS: u32 = 5;
pub const DEFAULT_ORIENTATION_DEBOUNCE_MS: u32 = 10;
pub const DEFAULT_MOTION_DEBOUNCE_MS: u32 = 10;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_CALIBRATION_SAMPLES: usize = 100;

// sensitivity = viewport width / viewport height * factor
pub const SENSITIVITY_ASPECT_FACTOR: f64 = 30.0;

// Per-source damping applied on top of the gyro effect modifier.
// Sensor signals are noisier and wider-range than pointer input.
pub const ORIENTATION_DAMPING: f64 = 0.1;
pub const MOTION_DAMPING: f64 = 0.02;

// Posture thresholds (degrees)
pub const FLAT_THRESHOLD_DEG: f64 = 10.0;
pub const SUPINE_THRESHOLD_DEG: f64 = 90.0;

// CSS pixel values are rounded to 1 / CSS_PX_PRECISION
pub const CSS_PX_PRECISION: f64 = 1e4;
