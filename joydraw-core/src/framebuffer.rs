//! Monochrome frame buffer
//!
//! 128x64 pixels, 1 bit per pixel, laid out the way SSD1306-class
//! controllers expect it: 8 pages of 128 column bytes, bit 0 at the top
//! of each page. Implements `DrawTarget` so the renderers can use
//! `embedded-graphics` primitives directly.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Full-frame pixel buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Set or clear one pixel
    ///
    /// Coordinates outside the display are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((page, col, mask)) = Self::locate(x, y) else {
            return;
        };
        if on {
            self.pages[page][col] |= mask;
        } else {
            self.pages[page][col] &= !mask;
        }
    }

    /// Read one pixel, `false` outside the display
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y)
            .map(|(page, col, mask)| self.pages[page][col] & mask != 0)
            .unwrap_or(false)
    }

    /// Set every pixel to the same state
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(byte);
        }
    }

    /// Column bytes of one page, ready to be sent to the controller
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_set_and_clear_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(5, 10, true);
        assert!(fb.pixel(5, 10));
        assert_eq!(fb.lit_count(), 1);

        // Page 1, bit 2
        assert_eq!(fb.page(1)[5], 0b0000_0100);

        fb.set_pixel(5, 10, false);
        assert!(!fb.pixel(5, 10));
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, -1, true);
        fb.set_pixel(WIDTH as i32, 0, true);
        fb.set_pixel(0, HEIGHT as i32, true);
        assert_eq!(fb.lit_count(), 0);
        assert!(!fb.pixel(200, 200));
    }

    #[test]
    fn test_fill() {
        let mut fb = FrameBuffer::new();
        fb.fill(true);
        assert_eq!(fb.lit_count(), WIDTH * HEIGHT);
        fb.fill(false);
        assert_eq!(fb, FrameBuffer::new());
    }

    #[test]
    fn test_draw_target_rectangle() {
        let mut fb = FrameBuffer::new();
        let Ok(()) = Rectangle::new(Point::new(2, 6), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb);

        assert_eq!(fb.lit_count(), 16);
        // Spans the page 0 / page 1 boundary
        assert!(fb.pixel(2, 7));
        assert!(fb.pixel(5, 9));
        assert!(!fb.pixel(6, 9));
    }
}
