//! LIS3DSH register addresses
#![allow(non_camel_case_types)]

#[allow(dead_code)]
#[derive(Copy, Clone)]
#[repr(u8)]
pub enum Register {
    /// Output data rate and axis enable bits
    CTRL_REG4   = 0x20,
    /// Full-scale selection and anti-aliasing filter bandwidth
    CTRL_REG5   = 0x24,
    OUT_X_L     = 0x28,
    OUT_X_H     = 0x29,
    OUT_Y_L     = 0x2A,
    OUT_Y_H     = 0x2B,
    OUT_Z_L     = 0x2C,
    OUT_Z_H     = 0x2D,
}

impl Register {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }
}
