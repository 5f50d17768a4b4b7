//! Board-agnostic core logic for the joystick sketch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Joystick to display coordinate mapping and LED intensity
//! - 1-bpp frame buffer (an `embedded-graphics` draw target)
//! - Border and marker rendering
//! - Debounced toggle handling shared between button handlers
//! - Board configuration types
//! - Register image of the PWM slice driving the deflection LEDs
//! - Output traits implemented by the chip HAL

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod framebuffer;
pub mod input;
pub mod leds;
pub mod mapping;
pub mod render;
pub mod traits;
