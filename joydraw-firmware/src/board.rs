//! Pin map of the reference board
//!
//! Two push buttons with pull-ups, an RGB LED on GPIO11-13, a 128x64
//! SSD1306 on I2C1 and an analog joystick on GPIO26/27. The numbers are
//! read back from the pin peripherals `main` hands to the drivers.

use defmt::*;

/// GPIO number of every pin in use
#[derive(Debug, Clone, Copy, Format)]
pub struct PinMap {
    /// Button A, active low
    pub button_a: u8,
    /// Joystick push button, active low
    pub joystick_button: u8,
    /// Green channel of the RGB LED
    pub status_led: u8,
    /// Red channel, shows X deflection
    pub led_red: u8,
    /// Blue channel, shows Y deflection
    pub led_blue: u8,
    pub i2c_sda: u8,
    pub i2c_scl: u8,
    /// Horizontal axis
    pub joystick_x: u8,
    /// Vertical axis
    pub joystick_y: u8,
}

impl PinMap {
    pub fn log(&self) {
        info!(
            "Buttons: A=GPIO{} joystick=GPIO{}",
            self.button_a, self.joystick_button
        );
        info!(
            "LEDs: red=GPIO{} blue=GPIO{} status=GPIO{}",
            self.led_red, self.led_blue, self.status_led
        );
        info!("Display: SDA=GPIO{} SCL=GPIO{}", self.i2c_sda, self.i2c_scl);
        info!(
            "Joystick: x=GPIO{} y=GPIO{}",
            self.joystick_x, self.joystick_y
        );
    }
}
