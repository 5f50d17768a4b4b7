//! PWM-dimmed deflection LEDs
//!
//! RP2040 has 8 PWM slices with two outputs each. GPIO `n` is driven by
//! slice `(n / 2) % 8`, output A for even pins and B for odd pins. The two
//! deflection LEDs sit on the same slice, so one config write updates both
//! duty cycles and one enable bit switches both outputs.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;
use joydraw_core::leds::{LedSlice, SliceOutput};
use joydraw_core::traits::DeflectionLeds;

/// Slice driving `gpio`
pub const fn pwm_slice(gpio: u8) -> u8 {
    (gpio >> 1) & 0x07
}

/// Slice output driving `gpio`
pub const fn pwm_output(gpio: u8) -> SliceOutput {
    if gpio & 1 == 0 {
        SliceOutput::A
    } else {
        SliceOutput::B
    }
}

/// Errors when pairing LED pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Pins are driven by different slices
    SliceMismatch { red: u8, blue: u8 },
    /// Both pins map to the same output
    SameOutput,
}

/// Slice config for the LEDs: counter wraps at `wrap`, clock divided by
/// `divider`, both outputs at zero duty and enabled
pub fn led_pwm_config(wrap: u16, divider: u8) -> Config {
    let mut config = Config::default();
    config.top = wrap;
    config.divider = U12F4::from_num(divider);
    config.compare_a = 0;
    config.compare_b = 0;
    config.enable = true;
    config
}

/// Red and blue LEDs on the two outputs of one slice
pub struct PwmLedPair<'d> {
    pwm: Pwm<'d>,
    config: Config,
    slice: LedSlice,
}

impl<'d> PwmLedPair<'d> {
    /// Pair the LEDs on `red_gpio` and `blue_gpio`
    ///
    /// `pwm` must already own both pins. `config` supplies wrap, divider
    /// and the initial enable bit; both duties start at zero.
    pub fn new(
        pwm: Pwm<'d>,
        red_gpio: u8,
        blue_gpio: u8,
        config: Config,
    ) -> Result<Self, PwmError> {
        if pwm_slice(red_gpio) != pwm_slice(blue_gpio) {
            return Err(PwmError::SliceMismatch {
                red: red_gpio,
                blue: blue_gpio,
            });
        }
        let red = pwm_output(red_gpio);
        if red == pwm_output(blue_gpio) {
            return Err(PwmError::SameOutput);
        }

        let mut pair = Self {
            pwm,
            slice: LedSlice::new(red, config.enable),
            config,
        };
        pair.apply();
        Ok(pair)
    }

    pub fn slice(&self) -> &LedSlice {
        &self.slice
    }

    /// Write the slice image in one config update
    fn apply(&mut self) {
        self.config.compare_a = self.slice.compare_a();
        self.config.compare_b = self.slice.compare_b();
        self.config.enable = self.slice.is_enabled();
        self.pwm.set_config(&self.config);
    }
}

impl DeflectionLeds for PwmLedPair<'_> {
    fn set_levels(&mut self, red: u16, blue: u16) {
        if self.slice.set_levels(red, blue) {
            self.apply();
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.slice.set_enabled(enabled) {
            self.apply();
        }
    }

    fn is_enabled(&self) -> bool {
        self.slice.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_pins_share_slice_six() {
        // Blue on GPIO12, red on GPIO13
        assert_eq!(pwm_slice(12), 6);
        assert_eq!(pwm_slice(13), 6);
        assert_eq!(pwm_output(12), SliceOutput::A);
        assert_eq!(pwm_output(13), SliceOutput::B);
    }

    #[test]
    fn test_slice_wraps_above_gpio15() {
        assert_eq!(pwm_slice(16), 0);
        assert_eq!(pwm_slice(29), 6);
        // Green status LED is on another slice
        assert_ne!(pwm_slice(11), pwm_slice(12));
    }
}
