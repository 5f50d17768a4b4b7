//! State shared between the button tasks and the sketch task
//!
//! Button tasks apply debounced toggles to `TOGGLES` and raise a signal;
//! the sketch task owns the display and the LEDs and acts on the signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use joydraw_core::input::{DebounceClocks, ToggleState};

use crate::config::BOARD;

/// LED output, border style and status LED flags
pub static TOGGLES: ToggleState = ToggleState::new();

/// Last accepted edge time, shared or per button depending on board.toml
pub static DEBOUNCE: DebounceClocks =
    DebounceClocks::new(BOARD.debounce_window_us(), BOARD.shared_debounce);

/// Border style changed; redraw it with the current style
pub static BORDER_REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// LED output enable flipped
pub static LED_OUTPUT_CHANGED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
