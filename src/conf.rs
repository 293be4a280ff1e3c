#![allow(non_camel_case_types)]

/// Full-scale selection bits as read from `CTRL_REG5`
pub const RANGE_2G: u8 = 0x00;
pub const RANGE_4G: u8 = 0x08;
pub const RANGE_6G: u8 = 0x10;
pub const RANGE_8G: u8 = 0x18;
pub const RANGE_16G: u8 = 0x20;

/// Measurement range the device is configured to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Range {
    _2G,
    _4G,
    _6G,
    _8G,
    _16G,
    /// `CTRL_REG5` held a byte that is none of the five known
    /// full-scale values
    Unknown,
}

impl Range {
    /// Decode the raw `CTRL_REG5` byte. Only the five exact full-scale
    /// values are recognised; everything else is `Unknown`. Total over
    /// all 256 byte values.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            RANGE_2G => Range::_2G,
            RANGE_4G => Range::_4G,
            RANGE_6G => Range::_6G,
            RANGE_8G => Range::_8G,
            RANGE_16G => Range::_16G,
            _ => Range::Unknown,
        }
    }

    /// Range span in g, `-1` for an unrecognised configuration byte
    pub fn g(self) -> i8 {
        match self {
            Range::_2G => 2,
            Range::_4G => 4,
            Range::_6G => 6,
            Range::_8G => 8,
            Range::_16G => 16,
            Range::Unknown => -1,
        }
    }

    /// Divisor turning a raw signed count into g-units.
    ///
    /// An `Unknown` range resolves to the 2g divisor so sampling keeps
    /// going instead of failing; the readings will be mis-scaled until
    /// the device reports a recognised range byte again.
    pub fn scale_modifier(self) -> f32 {
        match self {
            Range::_2G => 16384.0,
            Range::_4G => 8192.0,
            Range::_6G => 5461.33333,
            Range::_8G => 4096.0,
            Range::_16G => 2048.0,
            Range::Unknown => 16384.0,
        }
    }
}

/// Result of a range read, either the raw `CTRL_REG5` byte or the
/// decoded range
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeReading {
    Raw(u8),
    Decoded(Range),
}

/// Unit of the acceleration samples returned by
/// [`accel_data`](crate::Lis3dsh::accel_data)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Multiples of standard gravity
    G,
    /// Metres per second squared (g-units times 9.80665)
    MeterPerSecondSquared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_decode_is_total() {
        let mut known = 0;
        for bits in 0..=255u8 {
            let range = Range::from_bits(bits);
            match bits {
                RANGE_2G => assert_eq!(range, Range::_2G),
                RANGE_4G => assert_eq!(range, Range::_4G),
                RANGE_6G => assert_eq!(range, Range::_6G),
                RANGE_8G => assert_eq!(range, Range::_8G),
                RANGE_16G => assert_eq!(range, Range::_16G),
                _ => assert_eq!(range, Range::Unknown),
            }
            if range != Range::Unknown {
                known += 1;
            }
        }
        assert_eq!(known, 5);
    }

    #[test]
    fn range_in_g() {
        assert_eq!(Range::_2G.g(), 2);
        assert_eq!(Range::_4G.g(), 4);
        assert_eq!(Range::_6G.g(), 6);
        assert_eq!(Range::_8G.g(), 8);
        assert_eq!(Range::_16G.g(), 16);
        assert_eq!(Range::Unknown.g(), -1);
    }

    #[test]
    fn scale_modifiers() {
        assert_eq!(16384.0 / Range::_2G.scale_modifier(), 1.0);
        assert_eq!(Range::_6G.scale_modifier(), 5461.33333);
        assert_eq!(Range::_16G.scale_modifier(), 2048.0);
        // unknown bytes fall back to the 2g divisor
        assert_eq!(Range::Unknown.scale_modifier(), Range::_2G.scale_modifier());
    }
}
