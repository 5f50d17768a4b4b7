//! Sketch task
//!
//! Owns the joystick, the display and the deflection LEDs. Captures the
//! rest position once, then loops: apply pending toggles, sample, move the
//! marker, set LED duty, flush.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;

use joydraw_core::mapping::{CenterOffsets, JoystickMapper, JoystickSample};
use joydraw_core::render::{draw_border, MarkerRenderer, BORDER_RECT};
use joydraw_core::traits::DeflectionLeds;
use joydraw_drivers::Ssd1306;
use joydraw_hal_rp2040::{Joystick, PwmLedPair};

use crate::channels::{BORDER_REDRAW, LED_OUTPUT_CHANGED, TOGGLES};

/// SSD1306 on the async I2C1 bus
pub type Display = Ssd1306<I2c<'static, I2C1, Async>>;

#[embassy_executor::task]
pub async fn sketch_task(
    mut joystick: Joystick<'static>,
    mut display: Display,
    mut leds: PwmLedPair<'static>,
) {
    info!("Sketch task started");

    // Stick must be at rest during boot
    let offsets = match joystick.sample().await {
        Ok(sample) => CenterOffsets::from(sample),
        Err(e) => {
            warn!("Center read failed: {:?}, assuming mid-scale", e);
            CenterOffsets::default()
        }
    };
    let mapper = JoystickMapper::new(offsets);
    info!("Joystick center: {:?}", mapper.offsets());
    let mut marker = MarkerRenderer::new();
    let mut last = JoystickSample::new(offsets.x, offsets.y);

    redraw_border(&mut display).await;

    loop {
        if BORDER_REDRAW.try_take().is_some() {
            redraw_border(&mut display).await;
        }
        if LED_OUTPUT_CHANGED.try_take().is_some() {
            leds.set_enabled(TOGGLES.leds_enabled());
            info!("LED output {}", if leds.is_enabled() { "on" } else { "off" });
        }

        let sample = match joystick.sample().await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Joystick read failed: {:?}", e);
                last
            }
        };
        last = sample;

        let mapped = mapper.map(sample);
        leds.show(mapped.leds);

        let Ok(()) = marker.update(display.buffer_mut(), mapped.marker);
        trace!("Marker {:?}, LEDs {:?}", mapped.marker, leds.slice());
        flush(&mut display).await;
    }
}

async fn redraw_border(display: &mut Display) {
    let style = TOGGLES.border_style();
    let Ok(()) = draw_border(display.buffer_mut(), &BORDER_RECT, style);
    debug!("Border drawn: {:?}", style);
    flush(display).await;
}

async fn flush(display: &mut Display) {
    if let Err(e) = display.flush().await {
        warn!("Display flush failed: {:?}", e);
    }
}
