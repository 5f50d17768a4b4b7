//! Deflection LEDs on a two-output PWM slice
//!
//! `LedSlice` holds what the slice registers should contain: one compare
//! value per output and a single enable bit. The chip HAL copies it into
//! the peripheral after every change.

/// Output of a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliceOutput {
    A,
    B,
}

impl SliceOutput {
    /// The slice's other output
    pub const fn other(self) -> Self {
        match self {
            SliceOutput::A => SliceOutput::B,
            SliceOutput::B => SliceOutput::A,
        }
    }
}

/// Register image of a slice driving the red and blue LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedSlice {
    red: SliceOutput,
    compare_a: u16,
    compare_b: u16,
    enabled: bool,
}

impl LedSlice {
    /// Red on `red`, blue on the other output, both at zero duty
    pub const fn new(red: SliceOutput, enabled: bool) -> Self {
        Self {
            red,
            compare_a: 0,
            compare_b: 0,
            enabled,
        }
    }

    pub fn red_output(&self) -> SliceOutput {
        self.red
    }

    pub fn blue_output(&self) -> SliceOutput {
        self.red.other()
    }

    pub fn compare_a(&self) -> u16 {
        self.compare_a
    }

    pub fn compare_b(&self) -> u16 {
        self.compare_b
    }

    /// Current `(red, blue)` duty levels
    pub fn levels(&self) -> (u16, u16) {
        match self.red {
            SliceOutput::A => (self.compare_a, self.compare_b),
            SliceOutput::B => (self.compare_b, self.compare_a),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Route `red` and `blue` to their outputs
    ///
    /// Returns `true` if either compare value changed.
    pub fn set_levels(&mut self, red: u16, blue: u16) -> bool {
        let (a, b) = match self.red {
            SliceOutput::A => (red, blue),
            SliceOutput::B => (blue, red),
        };
        let changed = (a, b) != (self.compare_a, self.compare_b);
        self.compare_a = a;
        self.compare_b = b;
        changed
    }

    /// Switch both outputs; duty levels are kept
    ///
    /// Returns `true` if the enable bit changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_red_on_b_blue_on_a() {
        // Reference board: blue GPIO12 is output A, red GPIO13 is output B
        let mut slice = LedSlice::new(SliceOutput::B, true);
        assert_eq!(slice.blue_output(), SliceOutput::A);

        assert!(slice.set_levels(1500, 200));
        assert_eq!(slice.compare_b(), 1500);
        assert_eq!(slice.compare_a(), 200);
        assert_eq!(slice.levels(), (1500, 200));
    }

    #[test]
    fn test_red_on_a() {
        let mut slice = LedSlice::new(SliceOutput::A, true);
        slice.set_levels(7, 9);
        assert_eq!((slice.compare_a(), slice.compare_b()), (7, 9));
    }

    #[test]
    fn test_unchanged_levels_report_no_change() {
        let mut slice = LedSlice::new(SliceOutput::B, true);
        assert!(!slice.set_levels(0, 0));
        assert!(slice.set_levels(10, 0));
        assert!(!slice.set_levels(10, 0));
    }

    #[test]
    fn test_one_enable_switches_both() {
        let mut slice = LedSlice::new(SliceOutput::B, true);
        slice.set_levels(2047, 1024);

        assert!(slice.set_enabled(false));
        assert!(!slice.is_enabled());
        assert_eq!(slice.levels(), (2047, 1024));

        assert!(!slice.set_enabled(false));
        assert!(slice.set_enabled(true));
        assert_eq!(slice.levels(), (2047, 1024));
    }

    proptest! {
        #[test]
        fn levels_survive_any_toggle_sequence(
            red in 0u16..=4095,
            blue in 0u16..=4095,
            toggles in proptest::collection::vec(any::<bool>(), 0..12),
        ) {
            let mut slice = LedSlice::new(SliceOutput::B, true);
            slice.set_levels(red, blue);
            for enabled in toggles {
                slice.set_enabled(enabled);
                prop_assert_eq!(slice.is_enabled(), enabled);
                prop_assert_eq!(slice.levels(), (red, blue));
            }
        }
    }
}
