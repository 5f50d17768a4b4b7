//! RP2040-specific HAL for the joystick sketch firmware
//!
//! This crate provides RP2040-specific implementations of the core
//! traits, plus RP2040-specific functionality:
//!
//! - Two-axis joystick sampler on the async ADC
//! - PWM slice/output map and the deflection LED pair
//!   (implements `joydraw_core::traits::DeflectionLeds`)

#![no_std]

pub mod adc;
pub mod pwm;

pub use adc::Joystick;
pub use pwm::{led_pwm_config, pwm_output, pwm_slice, PwmError, PwmLedPair};
