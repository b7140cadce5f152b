//! MLX90614 non-contact IR thermometer driver.
//!
//! Minimal SMBus word reads of the two RAM registers the appliance
//! displays: ambient die temperature (Ta) and object temperature
//! (Tobj1). Generic over `embedded_hal::i2c::I2c` so it runs against
//! the real TWIM on target and a mock bus in host tests.

use embedded_hal::i2c::I2c;

use crate::config::MLX90614_ADDR;
use crate::error::Error;

/// RAM register: ambient (die) temperature.
const REG_TA: u8 = 0x06;
/// RAM register: object temperature, IR channel 1.
const REG_TOBJ1: u8 = 0x07;

/// MSB flag set by the sensor when a reading is invalid.
const ERROR_FLAG: u16 = 0x8000;

/// Linearized temperatures come back in units of 0.02 K.
fn raw_to_celsius(raw: u16) -> f32 {
    raw as f32 * 0.02 - 273.15
}

pub struct Mlx90614<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> Mlx90614<I2C> {
    /// Probe the sensor at its factory address.
    ///
    /// Performs one ambient read; if the device does not acknowledge,
    /// returns [`Error::SensorNotDetected`]. The appliance treats that
    /// as fatal and never enters the control loop.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let mut dev = Self {
            i2c,
            addr: MLX90614_ADDR,
        };
        match dev.read_word(REG_TA) {
            Ok(_) => Ok(dev),
            Err(_) => Err(Error::SensorNotDetected),
        }
    }

    /// Object (beverage) temperature in °C.
    pub fn object_temp_c(&mut self) -> Result<f32, Error> {
        self.read_temp(REG_TOBJ1)
    }

    /// Ambient (die) temperature in °C.
    pub fn ambient_temp_c(&mut self) -> Result<f32, Error> {
        self.read_temp(REG_TA)
    }

    fn read_temp(&mut self, reg: u8) -> Result<f32, Error> {
        let raw = self.read_word(reg)?;
        if raw & ERROR_FLAG != 0 {
            return Err(Error::SensorBus);
        }
        Ok(raw_to_celsius(raw))
    }

    /// SMBus read word: data low, data high, PEC (PEC not verified).
    fn read_word(&mut self, reg: u8) -> Result<u16, Error> {
        let mut buf = [0u8; 3];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .map_err(|_| Error::SensorBus)?;
        Ok(u16::from_le_bytes([buf[0], buf[1]]))
    }
}
