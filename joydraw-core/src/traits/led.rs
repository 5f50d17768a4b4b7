//! Deflection LED output trait

use crate::mapping::LedIntensity;

/// Pair of PWM-dimmed LEDs showing joystick deflection
///
/// Implementations must switch both channels with a single operation so
/// they never disagree about being enabled.
pub trait DeflectionLeds {
    /// Set the duty level of both channels (0 to the PWM wrap value)
    fn set_levels(&mut self, red: u16, blue: u16);

    /// Enable or disable both channels together
    fn set_enabled(&mut self, enabled: bool);

    /// Check whether output is enabled
    fn is_enabled(&self) -> bool;

    /// Show a mapped intensity
    fn show(&mut self, intensity: LedIntensity) {
        self.set_levels(intensity.red, intensity.blue);
    }
}
