//! Debounced button toggles
//!
//! Each falling edge goes through a `ToggleHandler`: if the debounce clock
//! accepts it, the matching toggle is applied to the shared `ToggleState`
//! and the resulting effect is returned for the caller to act on. Rejected
//! edges change nothing.

pub mod debounce;
pub mod toggle;

pub use debounce::{DebounceClock, DebounceClocks, DEFAULT_WINDOW_US};
pub use toggle::ToggleState;

use crate::render::BorderStyle;

/// Buttons wired to edge interrupts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Enables and disables LED output
    A,
    /// Joystick push; cycles the border and the status LED
    Joystick,
}

/// What an accepted edge changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleEffect {
    /// Both LED channels must follow this state together
    LedsEnabled(bool),
    /// Border needs a full redraw; status LED takes the new level
    BorderChanged {
        style: BorderStyle,
        status_led: bool,
    },
}

/// Applies debounced edges to the shared toggle state
#[derive(Debug, Clone, Copy)]
pub struct ToggleHandler<'a> {
    clocks: &'a DebounceClocks,
    state: &'a ToggleState,
}

impl<'a> ToggleHandler<'a> {
    pub const fn new(clocks: &'a DebounceClocks, state: &'a ToggleState) -> Self {
        Self { clocks, state }
    }

    /// Handle a falling edge on `button` at `now_us` microseconds
    ///
    /// Returns `None` when the edge falls inside the settling window.
    pub fn on_falling_edge(&self, button: Button, now_us: u64) -> Option<ToggleEffect> {
        if !self.clocks.clock(button).try_accept(now_us) {
            return None;
        }

        let effect = match button {
            Button::A => ToggleEffect::LedsEnabled(self.state.toggle_leds()),
            Button::Joystick => ToggleEffect::BorderChanged {
                status_led: self.state.toggle_status_led(),
                style: self.state.advance_border(),
            },
        };
        Some(effect)
    }
}
