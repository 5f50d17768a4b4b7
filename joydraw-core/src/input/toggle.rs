//! Toggle flags shared between the button handlers and the render loop
//!
//! Handlers flip these only after the debounce clock accepts an edge; the
//! render loop only reads them. All fields are single-word atomics.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::render::BorderStyle;

/// LED output, border style and status LED flags
#[derive(Debug)]
pub struct ToggleState {
    leds_enabled: AtomicBool,
    border_style: AtomicU8,
    status_led: AtomicBool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleState {
    /// Power-on state: LEDs enabled, dashed border, status LED off
    pub const fn new() -> Self {
        Self {
            leds_enabled: AtomicBool::new(true),
            border_style: AtomicU8::new(0),
            status_led: AtomicBool::new(false),
        }
    }

    pub fn leds_enabled(&self) -> bool {
        self.leds_enabled.load(Ordering::Acquire)
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_index(self.border_style.load(Ordering::Acquire))
    }

    pub fn status_led(&self) -> bool {
        self.status_led.load(Ordering::Acquire)
    }

    /// Flip LED output, returning the new state
    pub fn toggle_leds(&self) -> bool {
        !self.leds_enabled.fetch_not(Ordering::AcqRel)
    }

    /// Flip the status LED, returning the new state
    pub fn toggle_status_led(&self) -> bool {
        !self.status_led.fetch_not(Ordering::AcqRel)
    }

    /// Advance the border style modulo the style count, returning the new style
    pub fn advance_border(&self) -> BorderStyle {
        let previous = self
            .border_style
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |index| {
                Some(BorderStyle::from_index(index).next().index())
            })
            .unwrap_or_else(|index| index);
        BorderStyle::from_index(previous).next()
    }
}
