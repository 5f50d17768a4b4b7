//! Board configuration types
//!
//! The firmware reads `board.toml` at build time and turns it into a
//! `BoardConfig` constant. Validation lives here so the build script and
//! the host tests share the same rules.

/// Lowest I2C clock accepted for the display bus
pub const MIN_I2C_FREQUENCY_HZ: u32 = 10_000;

/// Highest I2C clock accepted for the display bus (fast mode plus)
pub const MAX_I2C_FREQUENCY_HZ: u32 = 1_000_000;

/// Longest accepted debounce window
pub const MAX_DEBOUNCE_MS: u32 = 5_000;

/// SSD1306 modules answer on one of these two addresses
pub const DISPLAY_ADDRESSES: [u8; 2] = [0x3C, 0x3D];

/// Longest prefix of `text` holding at most `max_chars` characters
///
/// The build script prints config errors in a fixed-width box; the cut
/// always lands on a character boundary.
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Tunable hardware parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Display bus clock in Hz
    pub i2c_frequency_hz: u32,
    /// 7-bit display address
    pub display_address: u8,
    /// PWM counter wrap (top) value
    pub pwm_wrap: u16,
    /// PWM integer clock divider
    pub pwm_divider: u8,
    /// Settling window after an accepted button edge
    pub debounce_ms: u32,
    /// Both buttons share one debounce clock
    pub shared_debounce: bool,
}

impl BoardConfig {
    /// Reference hardware: 100 kHz bus at 0x3C, 12-bit PWM divided by 255,
    /// 300 ms shared debounce window
    pub const DEFAULT: Self = Self {
        i2c_frequency_hz: 100_000,
        display_address: 0x3C,
        pwm_wrap: 4095,
        pwm_divider: 255,
        debounce_ms: 300,
        shared_debounce: true,
    };

    /// Debounce window in the microsecond units the edge clocks use
    pub const fn debounce_window_us(&self) -> u64 {
        self.debounce_ms as u64 * 1_000
    }

    /// Check every field against the limits of the hardware
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_I2C_FREQUENCY_HZ..=MAX_I2C_FREQUENCY_HZ).contains(&self.i2c_frequency_hz) {
            return Err(ConfigError::I2cFrequency(self.i2c_frequency_hz));
        }
        if !DISPLAY_ADDRESSES.contains(&self.display_address) {
            return Err(ConfigError::DisplayAddress(self.display_address));
        }
        if self.pwm_wrap == 0 {
            return Err(ConfigError::PwmWrap);
        }
        if self.pwm_divider == 0 {
            return Err(ConfigError::PwmDivider);
        }
        if self.debounce_ms == 0 || self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceWindow(self.debounce_ms));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reasons a board configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bus clock outside 10 kHz..=1 MHz
    I2cFrequency(u32),
    /// Not an SSD1306 address
    DisplayAddress(u8),
    /// Wrap of zero leaves no duty range
    PwmWrap,
    /// Divider of zero stops the counter
    PwmDivider,
    /// Window is zero or longer than `MAX_DEBOUNCE_MS`
    DebounceWindow(u32),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::I2cFrequency(hz) => write!(
                f,
                "i2c frequency {} Hz outside {}..={} Hz",
                hz, MIN_I2C_FREQUENCY_HZ, MAX_I2C_FREQUENCY_HZ
            ),
            ConfigError::DisplayAddress(addr) => {
                write!(f, "display address {:#04x} is not 0x3c or 0x3d", addr)
            }
            ConfigError::PwmWrap => write!(f, "pwm wrap must be non-zero"),
            ConfigError::PwmDivider => write!(f, "pwm divider must be non-zero"),
            ConfigError::DebounceWindow(ms) => write!(
                f,
                "debounce window {} ms outside 1..={} ms",
                ms, MAX_DEBOUNCE_MS
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(BoardConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(BoardConfig::default(), BoardConfig::DEFAULT);
    }

    #[test]
    fn test_clip_chars_ascii() {
        assert_eq!(clip_chars("divider = 0", 7), "divider");
        assert_eq!(clip_chars("wrap", 10), "wrap");
        assert_eq!(clip_chars("", 3), "");
    }

    #[test]
    fn test_clip_chars_keeps_multibyte_intact() {
        // Byte 59 falls inside a two-byte character
        let line = "é".repeat(70);
        let clipped = clip_chars(&line, 59);
        assert_eq!(clipped.chars().count(), 59);
        assert!(clipped.ends_with('é'));

        assert_eq!(clip_chars("café = 1", 4), "café");
    }

    #[test]
    fn test_debounce_window_in_micros() {
        assert_eq!(BoardConfig::DEFAULT.debounce_window_us(), 300_000);
        let config = BoardConfig {
            debounce_ms: 25,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.debounce_window_us(), 25_000);
    }

    #[test]
    fn test_rejects_bad_frequency() {
        let config = BoardConfig {
            i2c_frequency_hz: 5_000,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::I2cFrequency(5_000)));

        let config = BoardConfig {
            i2c_frequency_hz: 400_000,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_address() {
        let config = BoardConfig {
            display_address: 0x50,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::DisplayAddress(0x50)));
    }

    #[test]
    fn test_rejects_zero_pwm() {
        let config = BoardConfig {
            pwm_wrap: 0,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::PwmWrap));

        let config = BoardConfig {
            pwm_divider: 0,
            ..BoardConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::PwmDivider));
    }

    #[test]
    fn test_debounce_window_limits() {
        for ms in [0, MAX_DEBOUNCE_MS + 1] {
            let config = BoardConfig {
                debounce_ms: ms,
                ..BoardConfig::DEFAULT
            };
            assert_eq!(config.validate(), Err(ConfigError::DebounceWindow(ms)));
        }
    }
}
