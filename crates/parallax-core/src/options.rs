//! Construction-time configuration.
//!
//! `ParallaxOptions` is what the host page passes in (camelCase keys, every
//! field but `containerId` optional). `resolve` fills in derived values and
//! validates, producing the immutable `ResolvedOptions` the controller keeps.

use crate::calibration::CalibrationPolicy;
use crate::constants::*;
use crate::error::{ParallaxError, Result};
use glam::DVec2;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParallaxOptions {
    pub container_id: String,
    pub smoothing_factor: f64,
    pub gyro_effect_modifier: f64,
    pub sensitivity: Option<f64>,
    pub pointer_debounce_ms: u32,
    pub orientation_debounce_ms: u32,
    pub motion_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub calibration_policy: CalibrationPolicy,
    pub calibration_samples: usize,
    pub recalibration_delay_ms: Option<u32>,
    pub enable_orientation: bool,
    pub enable_motion: bool,
    pub match_viewport_width: bool,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            container_id: String::new(),
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            gyro_effect_modifier: DEFAULT_GYRO_EFFECT_MODIFIER,
            sensitivity: None,
            pointer_debounce_ms: DEFAULT_POINTER_DEBOUNCE_MS,
            orientation_debounce_ms: DEFAULT_ORIENTATION_DEBOUNCE_MS,
            motion_debounce_ms: DEFAULT_MOTION_DEBOUNCE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            calibration_policy: CalibrationPolicy::default(),
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES,
            recalibration_delay_ms: None,
            enable_orientation: true,
            enable_motion: true,
            match_viewport_width: false,
        }
    }
}

/// Options after defaults and derived values have been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub container_id: String,
    pub smoothing_factor: f64,
    pub gyro_effect_modifier: f64,
    pub sensitivity: f64,
    pub pointer_debounce_ms: u32,
    pub orientation_debounce_ms: u32,
    pub motion_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub calibration_policy: CalibrationPolicy,
    pub calibration_samples: usize,
    pub recalibration_delay_ms: Option<u32>,
    pub enable_orientation: bool,
    pub enable_motion: bool,
    pub match_viewport_width: bool,
}

impl ParallaxOptions {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Self::default()
        }
    }

    /// Validate and fill in derived values. `viewport` is the window's inner
    /// size in CSS pixels and only matters when `sensitivity` is unset.
    pub fn resolve(&self, viewport: DVec2) -> Result<ResolvedOptions> {
        if self.container_id.trim().is_empty() {
            return Err(invalid("containerId", "must not be empty"));
        }
        non_negative("smoothingFactor", self.smoothing_factor)?;
        non_negative("gyroEffectModifier", self.gyro_effect_modifier)?;
        if self.calibration_samples == 0 {
            return Err(invalid("calibrationSamples", "must be at least 1"));
        }
        let sensitivity = match self.sensitivity {
            Some(s) if s.is_finite() && s > 0.0 => s,
            Some(s) => return Err(invalid("sensitivity", format!("must be > 0, got {s}"))),
            None => derive_sensitivity(viewport),
        };

        Ok(ResolvedOptions {
            container_id: self.container_id.clone(),
            smoothing_factor: self.smoothing_factor,
            gyro_effect_modifier: self.gyro_effect_modifier,
            sensitivity,
            pointer_debounce_ms: self.pointer_debounce_ms,
            orientation_debounce_ms: self.orientation_debounce_ms,
            motion_debounce_ms: self.motion_debounce_ms,
            resize_debounce_ms: self.resize_debounce_ms,
            calibration_policy: self.calibration_policy,
            calibration_samples: self.calibration_samples,
            recalibration_delay_ms: self.recalibration_delay_ms,
            enable_orientation: self.enable_orientation,
            enable_motion: self.enable_motion,
            match_viewport_width: self.match_viewport_width,
        })
    }
}

/// Default sensitivity from the viewport aspect ratio. Degenerate viewports
/// fall back to the bare factor.
pub fn derive_sensitivity(viewport: DVec2) -> f64 {
    if viewport.x > 0.0 && viewport.y > 0.0 && viewport.is_finite() {
        viewport.x / viewport.y * SENSITIVITY_ASPECT_FACTOR
    } else {
        SENSITIVITY_ASPECT_FACTOR
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be a finite, non-negative number, got {value}")))
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ParallaxError {
    ParallaxError::InvalidOption {
        name,
        reason: reason.into(),
    }
}
