use crate::constants::{ATTR_CALIBRATE_X, ATTR_CALIBRATE_Y, ATTR_DEPTH, ATTR_MAX_RANGE};
use crate::element::ParallaxElement;

/// Static per-layer parameters, parsed once when the registry is built.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerParams {
    pub depth: f64,
    /// Per-axis clamp in px, always non-negative.
    pub max_range: f64,
    /// `Some(false)` makes the layer follow uncalibrated sensor input on X.
    pub calibrate_x: Option<bool>,
    pub calibrate_y: Option<bool>,
}

impl LayerParams {
    pub fn from_element<E: ParallaxElement>(element: &E) -> Self {
        Self::from_attributes(
            element.attribute(ATTR_DEPTH).as_deref(),
            element.attribute(ATTR_MAX_RANGE).as_deref(),
            element.attribute(ATTR_CALIBRATE_X).as_deref(),
            element.attribute(ATTR_CALIBRATE_Y).as_deref(),
        )
    }

    pub fn from_attributes(
        depth: Option<&str>,
        max_range: Option<&str>,
        calibrate_x: Option<&str>,
        calibrate_y: Option<&str>,
    ) -> Self {
        Self {
            depth: parse_number(depth),
            max_range: parse_number(max_range).abs(),
            calibrate_x: parse_flag(calibrate_x),
            calibrate_y: parse_flag(calibrate_y),
        }
    }
}

/// Attribute value as a float; missing, unparseable or non-finite is 0.
#[inline]
pub fn parse_number(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[inline]
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
