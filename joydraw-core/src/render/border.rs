//! Decorative border
//!
//! A fixed rectangle a few pixels inside the panel edge, drawn as a
//! pixel-skip pattern along each of its four edges.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Border rectangle: 3 px margin on a 128x64 panel
pub const BORDER_RECT: Rectangle = Rectangle::new(Point::new(3, 3), Size::new(122, 60));

/// Border pattern, selected by the joystick button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// One pixel every 4
    #[default]
    Dashed,
    /// One pixel every 2
    Dotted,
}

impl BorderStyle {
    /// Number of styles the toggle cycles through
    pub const COUNT: u8 = 2;

    /// Distance between plotted pixels along an edge
    pub const fn period(self) -> usize {
        match self {
            BorderStyle::Dashed => 4,
            BorderStyle::Dotted => 2,
        }
    }

    /// Persistent style index (0 or 1)
    pub const fn index(self) -> u8 {
        match self {
            BorderStyle::Dashed => 0,
            BorderStyle::Dotted => 1,
        }
    }

    /// Style for an index, wrapping modulo the style count
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => BorderStyle::Dashed,
            _ => BorderStyle::Dotted,
        }
    }

    /// Next style in the cycle
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Points plotted along the edges of `rect`, every `step` pixels
///
/// Horizontal edges are walked from the left edge, vertical edges from
/// the top edge; corners therefore appear once per edge that reaches them.
fn edge_points(rect: &Rectangle, step: usize) -> impl Iterator<Item = Point> {
    let left = rect.top_left.x;
    let top = rect.top_left.y;
    let right = left + rect.size.width as i32 - 1;
    let bottom = top + rect.size.height as i32 - 1;

    let horizontal = (left..=right)
        .step_by(step)
        .flat_map(move |x| [Point::new(x, top), Point::new(x, bottom)]);
    let vertical = (top..=bottom)
        .step_by(step)
        .flat_map(move |y| [Point::new(left, y), Point::new(right, y)]);

    horizontal.chain(vertical)
}

/// Pixels lit by `style` on `rect`
pub fn border_pixels(rect: &Rectangle, style: BorderStyle) -> impl Iterator<Item = Point> {
    edge_points(rect, style.period())
}

/// Draw the border in `style`
///
/// The edges are cleared first so switching from the denser pattern back
/// to the sparser one leaves no stale pixels.
pub fn draw_border<D>(target: &mut D, rect: &Rectangle, style: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.draw_iter(edge_points(rect, 1).map(|p| Pixel(p, BinaryColor::Off)))?;
    target.draw_iter(border_pixels(rect, style).map(|p| Pixel(p, BinaryColor::On)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use proptest::prelude::*;

    fn on_edge(rect: &Rectangle, p: Point) -> bool {
        let left = rect.top_left.x;
        let top = rect.top_left.y;
        let right = left + rect.size.width as i32 - 1;
        let bottom = top + rect.size.height as i32 - 1;
        let in_x = (left..=right).contains(&p.x);
        let in_y = (top..=bottom).contains(&p.y);
        (in_x && (p.y == top || p.y == bottom)) || (in_y && (p.x == left || p.x == right))
    }

    /// Pixel the pattern should light, following the per-edge walk
    fn expected(rect: &Rectangle, style: BorderStyle, p: Point) -> bool {
        let left = rect.top_left.x;
        let top = rect.top_left.y;
        let right = left + rect.size.width as i32 - 1;
        let bottom = top + rect.size.height as i32 - 1;
        let period = style.period() as i32;

        let horizontal = (p.y == top || p.y == bottom)
            && (left..=right).contains(&p.x)
            && (p.x - left) % period == 0;
        let vertical = (p.x == left || p.x == right)
            && (top..=bottom).contains(&p.y)
            && (p.y - top) % period == 0;
        horizontal || vertical
    }

    fn render(style: BorderStyle) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        let Ok(()) = draw_border(&mut fb, &BORDER_RECT, style);
        fb
    }

    #[test]
    fn test_style_cycle() {
        assert_eq!(BorderStyle::default(), BorderStyle::Dashed);
        assert_eq!(BorderStyle::Dashed.next(), BorderStyle::Dotted);
        assert_eq!(BorderStyle::Dotted.next(), BorderStyle::Dashed);
        assert_eq!(BorderStyle::from_index(2), BorderStyle::Dashed);
        assert_eq!(BorderStyle::from_index(3), BorderStyle::Dotted);
    }

    #[test]
    fn test_dashed_pattern_exact() {
        let fb = render(BorderStyle::Dashed);
        for x in 0..128 {
            for y in 0..64 {
                let p = Point::new(x, y);
                assert_eq!(
                    fb.pixel(x, y),
                    expected(&BORDER_RECT, BorderStyle::Dashed, p),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_dotted_pattern_exact() {
        let fb = render(BorderStyle::Dotted);
        for x in 0..128 {
            for y in 0..64 {
                let p = Point::new(x, y);
                assert_eq!(fb.pixel(x, y), expected(&BORDER_RECT, BorderStyle::Dotted, p));
            }
        }
    }

    #[test]
    fn test_dashed_corners_and_counts() {
        let fb = render(BorderStyle::Dashed);
        // Top edge x = 3, 7, ..., 123 and bottom edge at y = 62
        assert!(fb.pixel(3, 3));
        assert!(fb.pixel(7, 3));
        assert!(!fb.pixel(5, 3));
        assert!(fb.pixel(123, 62));
        // Right edge at x = 124, walked from y = 3 in steps of 4
        assert!(fb.pixel(124, 3));
        assert!(fb.pixel(124, 59));
        assert!(!fb.pixel(124, 62));
        // 31 columns on two rows, 15 rows on two columns, top-left counted once
        assert_eq!(fb.lit_count(), 31 * 2 + 15 * 2 - 1);
    }

    #[test]
    fn test_switching_back_to_dashed_clears_dots() {
        let mut fb = FrameBuffer::new();
        let Ok(()) = draw_border(&mut fb, &BORDER_RECT, BorderStyle::Dotted);
        let Ok(()) = draw_border(&mut fb, &BORDER_RECT, BorderStyle::Dashed);
        assert_eq!(fb, render(BorderStyle::Dashed));
    }

    #[test]
    fn test_interior_untouched() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(60, 30, true);
        let Ok(()) = draw_border(&mut fb, &BORDER_RECT, BorderStyle::Dotted);
        assert!(fb.pixel(60, 30));
    }

    proptest! {
        #[test]
        fn pattern_matches_period_on_any_rect(
            x in 0i32..20,
            y in 0i32..10,
            w in 1u32..100,
            h in 1u32..50,
            dotted in any::<bool>(),
        ) {
            let rect = Rectangle::new(Point::new(x, y), Size::new(w, h));
            let style = if dotted { BorderStyle::Dotted } else { BorderStyle::Dashed };
            let mut fb = FrameBuffer::new();
            let Ok(()) = draw_border(&mut fb, &rect, style);

            for px in 0..128 {
                for py in 0..64 {
                    let p = Point::new(px, py);
                    if fb.pixel(px, py) {
                        prop_assert!(on_edge(&rect, p));
                    }
                    prop_assert_eq!(fb.pixel(px, py), expected(&rect, style, p));
                }
            }
        }
    }
}
