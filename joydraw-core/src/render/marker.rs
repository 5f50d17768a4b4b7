//! Joystick marker
//!
//! An 8x8 solid block. Each update erases the block drawn last frame
//! before drawing the new one, so exactly one block is ever lit.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::mapping::MarkerPosition;

/// Marker edge length in pixels
pub const MARKER_SIZE: u32 = 8;

/// Area covered by a marker at `position`
pub fn marker_block(position: MarkerPosition) -> Rectangle {
    Rectangle::new(
        Point::new(position.x as i32, position.y as i32),
        Size::new(MARKER_SIZE, MARKER_SIZE),
    )
}

/// Tracks the last drawn marker so it can be erased
#[derive(Debug, Clone, Default)]
pub struct MarkerRenderer {
    previous: Option<MarkerPosition>,
}

impl MarkerRenderer {
    /// Nothing drawn yet
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Position drawn by the last update
    pub fn previous(&self) -> Option<MarkerPosition> {
        self.previous
    }

    /// Erase the previous block, then draw one at `position`
    pub fn update<D>(&mut self, target: &mut D, position: MarkerPosition) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if let Some(previous) = self.previous {
            target.fill_solid(&marker_block(previous), BinaryColor::Off)?;
        }
        target.fill_solid(&marker_block(position), BinaryColor::On)?;
        self.previous = Some(position);
        Ok(())
    }
}
