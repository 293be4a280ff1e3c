#![no_std]

mod conf;
mod register;

use core::fmt::Debug;

use embedded_hal as hal;

use hal::blocking::i2c::{Write, WriteRead};

pub use accelerometer::{
    error,
    vector::{F32x3, I16x3},
    Accelerometer, Error, RawAccelerometer,
};

pub use conf::*;
pub use register::Register;

/// Slave address with the SEL pad tied low
const I2C_SAD: u8 = 0x1D;

/// Slave address with the SEL pad tied high
const I2C_SAD_ALT: u8 = 0x1E;

/// ODR 3.125 Hz, block data update, X/Y/Z enabled
const CTRL_REG4_INIT: u8 = 0x1F;

const SAMPLE_RATE_HZ: f32 = 3.125;

/// Standard gravity in m/s²
const GRAVITY_MS2: f32 = 9.80665;

/// Possible slave addresses
#[derive(Copy, Clone, Debug)]
pub enum SlaveAddr {
    /// Default slave address (SEL low)
    Default,
    /// Alternative slave address providing the bit value for SEL
    Alternative(bool),
}

impl SlaveAddr {
    fn addr(self) -> u8 {
        // 0x1D and 0x1E differ in the low two bits, so the SEL level
        // selects between the two constants rather than setting a bit
        match self {
            SlaveAddr::Default => I2C_SAD,
            SlaveAddr::Alternative(sel) => {
                if sel {
                    I2C_SAD_ALT
                } else {
                    I2C_SAD
                }
            }
        }
    }
}

/// LIS3DSH driver
///
/// Owns the I2C peripheral for its whole lifetime, so all bus access is
/// serialised through one driver instance. The two bytes of an axis
/// sample are read in separate transactions; a second bus master could
/// tear them.
pub struct Lis3dsh<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C, E> Lis3dsh<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
{
    /// Creates a driver from the given `I2C` peripheral and wakes the
    /// device up, sampling all three axes at 3.125 Hz
    pub fn new(i2c: I2C, addr: SlaveAddr) -> Result<Self, E> {
        let mut lis3dsh = Lis3dsh {
            i2c,
            addr: addr.addr(),
        };

        lis3dsh.write_register(Register::CTRL_REG4, CTRL_REG4_INIT)?;

        Ok(lis3dsh)
    }

    /// Destroy driver instance, return the `I2C` bus instance
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Reads the low and high output registers of one axis and combines
    /// them into a signed sample.
    ///
    /// `reg` is the low register; the high byte sits one address above.
    pub fn read_axis_raw(&mut self, reg: Register) -> Result<i16, E> {
        let low = self.read_addr(reg.addr())?;
        let high = self.read_addr(reg.addr() + 1)?;
        Ok(combine(low, high))
    }

    /// Reads the range the accelerometer is set to.
    ///
    /// With `raw` set the unmodified `CTRL_REG5` byte is returned,
    /// otherwise the byte is decoded into a [`Range`]. Unrecognised
    /// bytes decode to [`Range::Unknown`], never an error.
    pub fn accel_range(&mut self, raw: bool) -> Result<RangeReading, E> {
        let bits = self.read_reg(Register::CTRL_REG5)?;
        if raw {
            Ok(RangeReading::Raw(bits))
        } else {
            Ok(RangeReading::Decoded(Range::from_bits(bits)))
        }
    }

    /// Reads the X, Y and Z axes and converts them to the requested
    /// unit using the range the device is configured to at this moment.
    ///
    /// The range register is read on every call because it can change
    /// at run time underneath the driver. An unrecognised range byte
    /// does not fail the read; the samples are scaled with the 2g
    /// divisor instead (see [`Range::scale_modifier`]).
    pub fn accel_data(&mut self, unit: Unit) -> Result<F32x3, E> {
        let x = self.read_axis_raw(Register::OUT_X_L)?;
        let y = self.read_axis_raw(Register::OUT_Y_L)?;
        let z = self.read_axis_raw(Register::OUT_Z_L)?;

        let bits = self.read_reg(Register::CTRL_REG5)?;
        let modifier = Range::from_bits(bits).scale_modifier();

        let mut x = x as f32 / modifier;
        let mut y = y as f32 / modifier;
        let mut z = z as f32 / modifier;

        if let Unit::MeterPerSecondSquared = unit {
            x *= GRAVITY_MS2;
            y *= GRAVITY_MS2;
            z *= GRAVITY_MS2;
        }

        Ok(F32x3::new(x, y, z))
    }

    /// Writes a value to any register
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), E> {
        self.i2c.write(self.addr, &[reg.addr(), value])
    }

    fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        self.read_addr(reg.addr())
    }

    fn read_addr(&mut self, addr: u8) -> Result<u8, E> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(self.addr, &[addr], &mut buffer)?;
        Ok(buffer[0])
    }
}

/// Combines the two bytes of an output register pair into a
/// two's-complement sample
fn combine(low: u8, high: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

impl<I2C, E> RawAccelerometer<I16x3> for Lis3dsh<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Gets the raw acceleration vector from the accelerometer
    fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        let x = self.read_axis_raw(Register::OUT_X_L)?;
        let y = self.read_axis_raw(Register::OUT_Y_L)?;
        let z = self.read_axis_raw(Register::OUT_Z_L)?;

        Ok(I16x3::new(x, y, z))
    }
}

impl<I2C, E> Accelerometer for Lis3dsh<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
    E: Debug,
{
    type Error = E;

    fn accel_norm(&mut self) -> Result<F32x3, Error<Self::Error>> {
        Ok(self.accel_data(Unit::G)?)
    }

    fn sample_rate(&mut self) -> Result<f32, Error<Self::Error>> {
        // Fixed by the CTRL_REG4 write at construction
        Ok(SAMPLE_RATE_HZ)
    }
}
