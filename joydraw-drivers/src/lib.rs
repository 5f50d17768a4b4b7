//! Hardware driver implementations
//!
//! Concrete drivers that implement the output side of the firmware:
//!
//! - SSD1306 128x64 OLED over async I2C, owning the core frame buffer

#![cfg_attr(not(test), no_std)]

pub mod ssd1306;

pub use ssd1306::Ssd1306;
