//! Output frame decoding and unit conversion.

use nalgebra::Vector3;

use crate::scale::Resolution;

/// Six little-endian words, three per sensor
pub const FRAME_LEN: usize = 12;

/// Which sensor occupies the first half of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisOrder {
    AccelFirst,
    GyroFirst,
}

/// Undecorated sensor output in LSB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub accel: [i16; 3],
    pub gyro: [i16; 3],
}

/// Accelerometer in g, gyroscope in dps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuData {
    pub accel: Vector3<f64>,
    pub gyro: Vector3<f64>,
}

/// Two's complement word from its low and high byte
#[inline]
pub fn decode_word(lo: u8, hi: u8) -> i16 {
    i16::from_le_bytes([lo, hi])
}

impl RawSample {
    pub fn decode(frame: &[u8; FRAME_LEN], order: AxisOrder) -> Self {
        let mut words = [0i16; 6];
        for (word, bytes) in words.iter_mut().zip(frame.chunks_exact(2)) {
            *word = decode_word(bytes[0], bytes[1]);
        }

        let first = [words[0], words[1], words[2]];
        let second = [words[3], words[4], words[5]];

        match order {
            AxisOrder::AccelFirst => Self {
                accel: first,
                gyro: second,
            },
            AxisOrder::GyroFirst => Self {
                accel: second,
                gyro: first,
            },
        }
    }

    /// Scales raw counts into g and dps, no bias applied
    pub fn to_physical(&self, resolution: Resolution) -> ImuData {
        ImuData {
            accel: scale(&self.accel, resolution.accel),
            gyro: scale(&self.gyro, resolution.gyro),
        }
    }
}

fn scale(raw: &[i16; 3], resolution: f64) -> Vector3<f64> {
    Vector3::new(
        raw[0] as f64 * resolution,
        raw[1] as f64 * resolution,
        raw[2] as f64 * resolution,
    )
}
