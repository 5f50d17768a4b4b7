//! Joystick sampling
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! Samples are 12-bit (0-4095). The joystick axes are read one after the
//! other, so the two values of a sample are a few microseconds apart.

use embassy_rp::adc::{Adc, Async, Channel, Error};
use joydraw_core::mapping::JoystickSample;

/// Two-axis analog joystick on the shared ADC
pub struct Joystick<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> Joystick<'d> {
    /// Create a sampler from the ADC and one channel per axis
    pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>) -> Self {
        Self { adc, x, y }
    }

    /// Read X then Y
    pub async fn sample(&mut self) -> Result<JoystickSample, Error> {
        let x = self.adc.read(&mut self.x).await?;
        let y = self.adc.read(&mut self.y).await?;
        Ok(JoystickSample::new(x, y))
    }
}
