//! Rendering into the frame buffer
//!
//! Both renderers draw into any `embedded-graphics` target with
//! `BinaryColor` pixels. Flushing to the panel is the caller's job.

pub mod border;
pub mod marker;

pub use border::{border_pixels, draw_border, BorderStyle, BORDER_RECT};
pub use marker::{marker_block, MarkerRenderer, MARKER_SIZE};
