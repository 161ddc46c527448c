//! Scheduling contracts, independent of any timer facility.
//!
//! The front end pairs [`Debounce`] with `setTimeout`/`clearTimeout` and
//! [`FrameGate`] with `requestAnimationFrame`.

/// Latest-wins holder for a debounced payload.
///
/// Each `push` supersedes the previous one and returns a generation token.
/// Only the timer carrying the latest token gets the payload, so a stale
/// timeout that slipped past cancellation is a no-op.
#[derive(Debug)]
pub struct Debounce<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> Debounce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    pub fn take(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take()
    }
}

/// At most one pending frame callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    scheduled: bool,
}

impl FrameGate {
    /// Returns `true` when the caller must schedule a new frame.
    #[inline]
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.scheduled, true)
    }

    /// Call at the top of the frame callback, before applying.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.scheduled = false;
    }
}
