//! Sensor permission flow.
//!
//! `AwaitingConsent` is left exactly once; the gesture listeners that lead
//! out of it are torn down at that moment, so the page prompts at most once
//! per gesture scaffolding. After a denial, only an explicit call from the
//! host page can start a new request.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    AwaitingConsent,
    Requesting,
    Attached,
    Denied,
    Unsupported,
}

/// Returned when a prompt may be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestStart {
    /// The gesture listeners are still attached and must be removed now.
    pub detach_gesture: bool,
}

#[derive(Clone, Debug)]
pub struct PermissionFlow {
    state: PermissionState,
    gesture_attached: bool,
}

impl PermissionFlow {
    pub fn awaiting_consent() -> Self {
        Self {
            state: PermissionState::AwaitingConsent,
            gesture_attached: true,
        }
    }

    /// Sensors readable without a prompt.
    pub fn attached() -> Self {
        Self {
            state: PermissionState::Attached,
            gesture_attached: false,
        }
    }

    pub fn unsupported() -> Self {
        Self {
            state: PermissionState::Unsupported,
            gesture_attached: false,
        }
    }

    pub fn state(&self) -> PermissionState {
        self.state
    }

    pub fn begin_request(&mut self) -> Option<RequestStart> {
        match self.state {
            PermissionState::AwaitingConsent | PermissionState::Denied => {
                self.state = PermissionState::Requesting;
                Some(RequestStart {
                    detach_gesture: std::mem::take(&mut self.gesture_attached),
                })
            }
            PermissionState::Requesting | PermissionState::Attached | PermissionState::Unsupported => None,
        }
    }

    /// Record the outcome. Returns `true` when sensor listeners should be
    /// attached now.
    pub fn finish(&mut self, granted: bool) -> bool {
        if self.state != PermissionState::Requesting {
            return false;
        }
        self.state = if granted {
            PermissionState::Attached
        } else {
            PermissionState::Denied
        };
        granted
    }
}

/// Outcome of one request round across the sensor APIs that need a prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermissionTally {
    prompted: u32,
    granted: u32,
}

impl PermissionTally {
    /// One API that needed a prompt. A call that failed before prompting
    /// counts as refused.
    pub fn record(&mut self, granted: bool) {
        self.prompted += 1;
        if granted {
            self.granted += 1;
        }
    }

    /// Granted when no API needed a prompt or at least one prompt succeeded.
    pub fn granted(&self) -> bool {
        self.prompted == 0 || self.granted > 0
    }
}

/// `DeviceOrientationEvent.requestPermission()` resolves to this string.
#[inline]
pub fn is_granted(response: &str) -> bool {
    response == "granted"
}
