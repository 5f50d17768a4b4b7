//! Button edge tasks
//!
//! One task instance per button. Each waits for a falling edge, runs it
//! through the debounce clocks and publishes the resulting toggle. The
//! joystick button also drives the green status LED directly.

use defmt::*;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::Instant;

use joydraw_core::input::{Button, ToggleEffect, ToggleHandler};

use crate::channels::{BORDER_REDRAW, DEBOUNCE, LED_OUTPUT_CHANGED, TOGGLES};

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    button: Button,
    mut input: Input<'static>,
    mut status_led: Option<Output<'static>>,
) {
    let clock = DEBOUNCE.clock(button);
    info!(
        "Button task started: {:?}, window {}us, shared={}",
        button,
        clock.window_us(),
        DEBOUNCE.is_shared()
    );

    let handler = ToggleHandler::new(&DEBOUNCE, &TOGGLES);

    loop {
        input.wait_for_falling_edge().await;
        let now_us = Instant::now().as_micros();

        match handler.on_falling_edge(button, now_us) {
            Some(ToggleEffect::LedsEnabled(enabled)) => {
                debug!("LED output enabled={}", enabled);
                LED_OUTPUT_CHANGED.signal(());
            }
            Some(ToggleEffect::BorderChanged {
                style,
                status_led: on,
            }) => {
                if let Some(led) = status_led.as_mut() {
                    led.set_level(Level::from(on));
                }
                debug!("Border style {:?}, status LED {}", style, on);
                BORDER_REDRAW.signal(());
            }
            None => trace!(
                "{:?} edge at {}us ignored, last accepted {}us",
                button,
                now_us,
                clock.last_accepted_us()
            ),
        }
    }
}
