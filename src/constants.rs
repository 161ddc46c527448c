// DOM wiring constants for the web front end

// Selectors matching the attribute contract in `parallax_core::constants`
pub const LAYER_SELECTOR: &str = "[data-depth]";
pub const BASE_SELECTOR: &str = "[data-parallax-base]";
pub const PERMISSION_TRIGGER_SELECTOR: &str = "[data-gyroscope-permission]";

pub const PLACEHOLDER_TAG: &str = "div";

// Event names
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_DEVICE_ORIENTATION: &str = "deviceorientation";
pub const EVENT_DEVICE_MOTION: &str = "devicemotion";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_CLICK: &str = "click";
pub const EVENT_TOUCH_END: &str = "touchend";

// Sensor APIs probed on `window`
pub const API_DEVICE_ORIENTATION: &str = "DeviceOrientationEvent";
pub const API_DEVICE_MOTION: &str = "DeviceMotionEvent";
pub const REQUEST_PERMISSION_FN: &str = "requestPermission";

// Style properties written
pub const STYLE_TRANSFORM: &str = "transform";
pub const STYLE_WIDTH: &str = "width";
pub const STYLE_HEIGHT: &str = "height";
