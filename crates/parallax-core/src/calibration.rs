//! Orientation bias removal.
//!
//! Samples arriving here are already posture-normalized and in
//! screen-relative coordinates (x = horizontal tilt, y = vertical tilt), so
//! the offsets computed below are comparable across holding postures.
//!
//! Two policies are available:
//!
//! - [`MovingAverageCalibrator`] (default): the offset is the mean of the last
//!   full window of samples and keeps tracking the user's resting tilt.
//! - [`BaselineCalibrator`]: the first sample becomes a permanent zero point.
//!
//! Both honour a re-anchor request: the next sample becomes the new offset.

use glam::DVec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CalibrationPolicy {
    #[default]
    MovingAverage,
    Baseline,
}

impl CalibrationPolicy {
    pub fn build(self, window: usize) -> Box<dyn Calibrator> {
        match self {
            CalibrationPolicy::MovingAverage => Box::new(MovingAverageCalibrator::new(window)),
            CalibrationPolicy::Baseline => Box::new(BaselineCalibrator::default()),
        }
    }
}

pub trait Calibrator {
    /// Feed one screen-relative sample and return it with the current offset
    /// subtracted.
    fn calibrate(&mut self, sample: DVec2) -> DVec2;

    /// Offset currently subtracted from every sample.
    fn offset(&self) -> DVec2;

    /// Treat the next sample as a fresh zero point.
    fn request_reanchor(&mut self);
}

#[derive(Clone, Debug)]
pub struct MovingAverageCalibrator {
    window: usize,
    samples: Vec<DVec2>,
    offset: DVec2,
    reanchor: bool,
}

impl MovingAverageCalibrator {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            samples: Vec::with_capacity(window),
            offset: DVec2::ZERO,
            reanchor: false,
        }
    }

    /// Samples collected in the current (incomplete) window.
    pub fn pending(&self) -> usize {
        self.samples.len()
    }
}

impl Calibrator for MovingAverageCalibrator {
    fn calibrate(&mut self, sample: DVec2) -> DVec2 {
        if std::mem::take(&mut self.reanchor) {
            self.samples.clear();
            self.offset = sample;
            log::debug!("[calibration] re-anchored at ({:.2},{:.2})", sample.x, sample.y);
            return DVec2::ZERO;
        }

        self.samples.push(sample);
        if self.samples.len() >= self.window {
            let sum = self.samples.iter().fold(DVec2::ZERO, |acc, s| acc + *s);
            self.offset = sum / self.samples.len() as f64;
            self.samples.clear();
            log::debug!(
                "[calibration] offset=({:.2},{:.2})",
                self.offset.x,
                self.offset.y
            );
        }
        sample - self.offset
    }

    fn offset(&self) -> DVec2 {
        self.offset
    }

    fn request_reanchor(&mut self) {
        self.reanchor = true;
    }
}

#[derive(Clone, Debug, Default)]
pub struct BaselineCalibrator {
    baseline: Option<DVec2>,
}

impl Calibrator for BaselineCalibrator {
    fn calibrate(&mut self, sample: DVec2) -> DVec2 {
        let baseline = *self.baseline.get_or_insert(sample);
        sample - baseline
    }

    fn offset(&self) -> DVec2 {
        self.baseline.unwrap_or(DVec2::ZERO)
    }

    fn request_reanchor(&mut self) {
        self.baseline = None;
    }
}
