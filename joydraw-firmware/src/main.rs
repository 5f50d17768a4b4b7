//! Joydraw - Joystick Sketch Firmware
//!
//! Main firmware binary for RP2040 hobby boards. Moves an 8x8 marker
//! around a bordered SSD1306 screen with an analog joystick, shows axis
//! deflection on two PWM LEDs and toggles LED output and border style
//! with two debounced buttons.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use joydraw_core::input::Button;
use joydraw_drivers::Ssd1306;
use joydraw_hal_rp2040::{led_pwm_config, Joystick, PwmLedPair};

use crate::board::PinMap;
use crate::config::BOARD;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joydraw firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    info!("Board config: {:?}", BOARD);

    let pins = PinMap {
        button_a: p.PIN_5.pin(),
        joystick_button: p.PIN_22.pin(),
        status_led: p.PIN_11.pin(),
        led_red: p.PIN_13.pin(),
        led_blue: p.PIN_12.pin(),
        i2c_sda: p.PIN_14.pin(),
        i2c_scl: p.PIN_15.pin(),
        joystick_x: p.PIN_27.pin(),
        joystick_y: p.PIN_26.pin(),
    };
    pins.log();

    // Status LED starts off
    let status_led = Output::new(p.PIN_11, Level::Low);

    // Buttons short to ground when pressed
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let joystick_button = Input::new(p.PIN_22, Pull::Up);

    // Deflection LEDs share PWM slice 6: blue on A (GPIO12), red on B (GPIO13)
    let pwm_config = led_pwm_config(BOARD.pwm_wrap, BOARD.pwm_divider);
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone());
    let leds = unwrap!(PwmLedPair::new(
        pwm,
        pins.led_red,
        pins.led_blue,
        pwm_config,
    ));
    info!(
        "LED PWM: wrap={} divider={}",
        BOARD.pwm_wrap, BOARD.pwm_divider
    );

    // Joystick: X on GPIO27 (ADC1), Y on GPIO26 (ADC0)
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let joystick = Joystick::new(adc, x, y);

    // Display on I2C1: SCL GPIO15, SDA GPIO14
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = BOARD.i2c_frequency_hz;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Ssd1306::new(i2c, BOARD.display_address);
    match display.init().await {
        Ok(()) => info!("Display initialized at {:#x}", display.address()),
        Err(e) => warn!("Display init failed: {:?}", e),
    }
    display.fill(false);
    if let Err(e) = display.flush().await {
        warn!("Display clear failed: {:?}", e);
    }

    // Spawn tasks
    spawner
        .spawn(tasks::sketch_task(joystick, display, leds))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Button::A, button_a, None))
        .unwrap();
    spawner
        .spawn(tasks::button_task(
            Button::Joystick,
            joystick_button,
            Some(status_led),
        ))
        .unwrap();

    info!("All tasks spawned");
}
