//! Joystick to display mapping
//!
//! Converts raw 12-bit joystick samples into a marker position inside the
//! border and an LED intensity per axis. The transform is a fixed integer
//! affine map chosen so the full ADC range lands on the border interior.
//! Results are not clamped: a stick that never reaches its mechanical
//! extremes never reaches the border either.

/// Largest value the 12-bit ADC returns
pub const SAMPLE_MAX: u16 = 4095;

/// Neutral value assumed before calibration
pub const SAMPLE_MID: u16 = 2048;

/// X: `sample / 39 + 8`
const X_DIVISOR: u16 = 39;
const X_ORIGIN: u16 = 8;

/// Y: `(4096 - sample) / 91 + 7`, inverted so pushing up moves up
const Y_SPAN: u16 = 4096;
const Y_DIVISOR: u16 = 91;
const Y_ORIGIN: u16 = 7;

/// Leftmost marker column (sample 0)
pub const MARKER_X_MIN: u16 = X_ORIGIN;
/// Rightmost marker column (sample 4095)
pub const MARKER_X_MAX: u16 = SAMPLE_MAX / X_DIVISOR + X_ORIGIN;
/// Topmost marker row (sample 4095)
pub const MARKER_Y_MIN: u16 = (Y_SPAN - SAMPLE_MAX) / Y_DIVISOR + Y_ORIGIN;
/// Bottom marker row (sample 0)
pub const MARKER_Y_MAX: u16 = Y_SPAN / Y_DIVISOR + Y_ORIGIN;

/// One reading of both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}

impl JoystickSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Stick at rest, before any reading
    pub const CENTERED: Self = Self::new(SAMPLE_MID, SAMPLE_MID);
}

/// Neutral position captured once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CenterOffsets {
    pub x: u16,
    pub y: u16,
}

impl From<JoystickSample> for CenterOffsets {
    fn from(sample: JoystickSample) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
        }
    }
}

impl Default for CenterOffsets {
    fn default() -> Self {
        JoystickSample::CENTERED.into()
    }
}

/// Top-left corner of the marker block, in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerPosition {
    pub x: u16,
    pub y: u16,
}

impl MarkerPosition {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// PWM levels for the two deflection LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedIntensity {
    /// Driven by the X axis
    pub red: u16,
    /// Driven by the Y axis
    pub blue: u16,
}

/// Result of mapping one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MappedInput {
    pub marker: MarkerPosition,
    pub leds: LedIntensity,
}

/// Map an X sample to a marker column
pub const fn map_x(sample: u16) -> u16 {
    sample / X_DIVISOR + X_ORIGIN
}

/// Map a Y sample to a marker row
///
/// Samples above the 12-bit range saturate to the top row instead of
/// underflowing.
pub const fn map_y(sample: u16) -> u16 {
    Y_SPAN.saturating_sub(sample) / Y_DIVISOR + Y_ORIGIN
}

/// Deflection of one axis from its neutral position
pub const fn intensity(sample: u16, center: u16) -> u16 {
    sample.abs_diff(center)
}

/// Coordinate mapper bound to the startup calibration
#[derive(Debug, Clone, Copy)]
pub struct JoystickMapper {
    offsets: CenterOffsets,
}

impl JoystickMapper {
    pub const fn new(offsets: CenterOffsets) -> Self {
        Self { offsets }
    }

    pub fn offsets(&self) -> CenterOffsets {
        self.offsets
    }

    /// Map a sample to marker position and LED levels
    pub fn map(&self, sample: JoystickSample) -> MappedInput {
        MappedInput {
            marker: MarkerPosition::new(map_x(sample.x), map_y(sample.y)),
            leds: LedIntensity {
                red: intensity(sample.x, self.offsets.x),
                blue: intensity(sample.y, self.offsets.y),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_range_constants() {
        assert_eq!(MARKER_X_MIN, 8);
        assert_eq!(MARKER_X_MAX, 113);
        assert_eq!(MARKER_Y_MIN, 7);
        assert_eq!(MARKER_Y_MAX, 52);
    }

    #[test]
    fn test_full_deflection_right() {
        let mapper = JoystickMapper::new(CenterOffsets { x: 2048, y: 2048 });
        let mapped = mapper.map(JoystickSample::new(4095, 2048));

        assert_eq!(mapped.marker.x, 113);
        assert_eq!(mapped.leds.red, 2047);
        assert_eq!(mapped.leds.blue, 0);
    }

    #[test]
    fn test_centered_stick_is_dark() {
        let offsets = CenterOffsets { x: 1990, y: 2105 };
        let mapper = JoystickMapper::new(offsets);
        let mapped = mapper.map(JoystickSample::new(1990, 2105));

        assert_eq!(mapped.leds, LedIntensity::default());
        assert_eq!(mapped.marker, MarkerPosition::new(59, 28));
    }

    #[test]
    fn test_y_is_inverted() {
        assert_eq!(map_y(0), MARKER_Y_MAX);
        assert_eq!(map_y(SAMPLE_MAX), MARKER_Y_MIN);
        assert!(map_y(1000) > map_y(3000));
    }

    #[test]
    fn test_out_of_range_y_saturates() {
        assert_eq!(map_y(u16::MAX), Y_ORIGIN);
    }

    proptest! {
        #[test]
        fn x_stays_in_range_and_is_monotonic(a in 0..=SAMPLE_MAX, b in 0..=SAMPLE_MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!((MARKER_X_MIN..=MARKER_X_MAX).contains(&map_x(lo)));
            prop_assert!((MARKER_X_MIN..=MARKER_X_MAX).contains(&map_x(hi)));
            prop_assert!(map_x(lo) <= map_x(hi));
        }

        #[test]
        fn y_stays_in_range_and_decreases(a in 0..=SAMPLE_MAX, b in 0..=SAMPLE_MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!((MARKER_Y_MIN..=MARKER_Y_MAX).contains(&map_y(lo)));
            prop_assert!((MARKER_Y_MIN..=MARKER_Y_MAX).contains(&map_y(hi)));
            prop_assert!(map_y(lo) >= map_y(hi));
        }

        #[test]
        fn intensity_is_absolute_deflection(
            sample in 0..=SAMPLE_MAX,
            center in 0..=SAMPLE_MAX,
        ) {
            let expected = (sample as i32 - center as i32).unsigned_abs() as u16;
            prop_assert_eq!(intensity(sample, center), expected);
            prop_assert!(intensity(sample, center) <= SAMPLE_MAX);
        }
    }
}
