//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via async I2C.
//! Drawing happens in a core `FrameBuffer`; `flush` pushes the whole
//! buffer to the panel page by page.

use embedded_hal_async::i2c::I2c;
use joydraw_core::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (0x3C, or 0x3D with the address pin pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: the rest of the write is commands
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the rest of the write is display RAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x64 panel with the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02,                  // Page addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: FrameBuffer,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver with a blank buffer
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd]).await
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Buffer to draw into; changes appear on the next `flush`
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    pub fn fill(&mut self, on: bool) {
        self.buffer.fill(on);
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.buffer.page(page));
            self.i2c.write(self.address, &data).await?;
        }

        Ok(())
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}
