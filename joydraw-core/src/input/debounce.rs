//! Edge debouncing
//!
//! A `DebounceClock` remembers when it last accepted an edge and rejects
//! anything arriving within the settling window after it. The timestamp is
//! atomic so handlers running in different contexts can share one clock.
//!
//! Times are microseconds since boot.

use portable_atomic::{AtomicU64, Ordering};

use super::Button;

/// Settling window of the reference board, 300 ms
pub const DEFAULT_WINDOW_US: u64 = 300_000;

/// Marker for "no edge accepted yet"
const NEVER: u64 = u64::MAX;

/// Last-accepted timestamp plus settling window
#[derive(Debug)]
pub struct DebounceClock {
    window_us: u64,
    last_accepted_us: AtomicU64,
}

impl DebounceClock {
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: AtomicU64::new(NEVER),
        }
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_us(&self) -> Option<u64> {
        match self.last_accepted_us.load(Ordering::Acquire) {
            NEVER => None,
            us => Some(us),
        }
    }

    /// Accept the edge at `now_us` if more than one window has elapsed
    ///
    /// Accepted edges restart the window; rejected edges leave the clock
    /// untouched. The first edge is always accepted.
    pub fn try_accept(&self, now_us: u64) -> bool {
        self.last_accepted_us
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                if last == NEVER || now_us.saturating_sub(last) > self.window_us {
                    Some(now_us)
                } else {
                    None
                }
            })
            .is_ok()
    }
}

impl Default for DebounceClock {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_US)
    }
}

/// Debounce clocks for both buttons
///
/// When `shared` is set every button consults the first clock, so a press
/// on one button also holds off the other for a window.
#[derive(Debug)]
pub struct DebounceClocks {
    shared: bool,
    button_a: DebounceClock,
    joystick: DebounceClock,
}

impl DebounceClocks {
    pub const fn new(window_us: u64, shared: bool) -> Self {
        Self {
            shared,
            button_a: DebounceClock::new(window_us),
            joystick: DebounceClock::new(window_us),
        }
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// Clock consulted for `button`
    pub fn clock(&self, button: Button) -> &DebounceClock {
        match (self.shared, button) {
            (true, _) | (false, Button::A) => &self.button_a,
            (false, Button::Joystick) => &self.joystick,
        }
    }
}
