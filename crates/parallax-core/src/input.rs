use crate::constants::{FLAT_THRESHOLD_DEG, SUPINE_THRESHOLD_DEG};
use glam::DVec2;

/// Which producer last wrote the controller input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Pointer,
    Orientation,
    Motion,
}

/// Screen orientation as reported by `screen.orientation.angle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    LandscapePrimary,
    PortraitFlipped,
    LandscapeSecondary,
}

impl ScreenOrientation {
    pub fn from_angle(angle: i32) -> Self {
        match angle.rem_euclid(360) {
            90 => ScreenOrientation::LandscapePrimary,
            180 => ScreenOrientation::PortraitFlipped,
            270 => ScreenOrientation::LandscapeSecondary,
            _ => ScreenOrientation::Portrait,
        }
    }

    /// Map device-relative (beta, gamma) onto screen axes (x right, y down).
    #[inline]
    pub fn to_screen(self, beta: f64, gamma: f64) -> DVec2 {
        match self {
            ScreenOrientation::Portrait => DVec2::new(gamma, beta),
            ScreenOrientation::LandscapePrimary => DVec2::new(beta, -gamma),
            ScreenOrientation::PortraitFlipped => DVec2::new(-gamma, -beta),
            ScreenOrientation::LandscapeSecondary => DVec2::new(-beta, gamma),
        }
    }
}

/// A beta/gamma pair from an orientation (angles) or motion (rotation
/// rate) event. Browsers report missing axes as null.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltSample {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl TiltSample {
    pub fn new(beta: f64, gamma: f64) -> Self {
        Self {
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Both angles, if present and finite.
    #[inline]
    pub fn angles(&self) -> Option<(f64, f64)> {
        match (self.beta, self.gamma) {
            (Some(b), Some(g)) if b.is_finite() && g.is_finite() => Some((b, g)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Posture {
    /// Lying flat on a surface; produces no input.
    Flat,
    Upright,
    /// Held upside down or face down.
    Supine,
}

#[inline]
pub fn classify_posture(beta: f64, gamma: f64) -> Posture {
    if beta.abs() < FLAT_THRESHOLD_DEG && gamma.abs() < FLAT_THRESHOLD_DEG {
        Posture::Flat
    } else if beta.abs() > SUPINE_THRESHOLD_DEG {
        Posture::Supine
    } else {
        Posture::Upright
    }
}

/// Posture-correct an orientation reading and map it to screen axes.
/// Returns `None` for a flat device.
pub fn normalize_tilt(beta: f64, gamma: f64, orientation: ScreenOrientation) -> Option<DVec2> {
    let (beta, gamma) = match classify_posture(beta, gamma) {
        Posture::Flat => return None,
        Posture::Upright => (beta, gamma),
        Posture::Supine if beta > 0.0 => (180.0 - beta, -gamma),
        Posture::Supine => (-180.0 - beta, -gamma),
    };
    Some(orientation.to_screen(beta, gamma))
}

/// Pointer position relative to the center of a rect, scaled so the rect's
/// edges map to -1 and 1. `None` for an empty rect.
#[inline]
pub fn pointer_input(pointer: DVec2, rect_origin: DVec2, rect_size: DVec2) -> Option<DVec2> {
    let half = rect_size * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return None;
    }
    let center = rect_origin + half;
    Some((pointer - center) / half)
}
