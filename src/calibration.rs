//! Stationary bias estimation.
//!
//! The device rests flat while a fixed number of frames is read back to back.
//! Each axis is averaged in physical units. Any accelerometer axis whose mean
//! lies beyond the gravity threshold is assumed to be the vertical one and has
//! 1 g taken off (or added back when it points down).

use nalgebra::Vector3;

use crate::sample::RawSample;
use crate::scale::Resolution;

pub const DEFAULT_CALIBRATION_SAMPLES: u16 = 128;

/// Mean acceleration (g) above which an axis is treated as vertical
pub const DEFAULT_GRAVITY_THRESHOLD: f64 = 0.8;

/// Standard gravity in g
pub const GRAVITY: f64 = 1.0;

/// Offsets subtracted from every calibrated reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bias {
    /// g
    pub accel: Vector3<f64>,
    /// dps
    pub gyro: Vector3<f64>,
}

impl Default for Bias {
    fn default() -> Self {
        Self {
            accel: Vector3::zeros(),
            gyro: Vector3::zeros(),
        }
    }
}

/// Removes the gravity component from one accelerometer axis mean.
/// The comparison is strict: a mean of exactly `threshold` is kept.
pub fn remove_gravity(mean: f64, threshold: f64) -> f64 {
    if mean > threshold {
        mean - GRAVITY
    } else if mean < -threshold {
        mean + GRAVITY
    } else {
        mean
    }
}

/// Running per-axis sums in raw LSB
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    accel: [i64; 3],
    gyro: [i64; 3],
    count: u32,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: &RawSample) {
        for (sum, value) in self.accel.iter_mut().zip(sample.accel) {
            *sum += value as i64;
        }
        for (sum, value) in self.gyro.iter_mut().zip(sample.gyro) {
            *sum += value as i64;
        }
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Averages what was pushed so far. `None` until at least one sample.
    pub fn bias(&self, resolution: Resolution, gravity_threshold: f64) -> Option<Bias> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;

        let accel = mean(&self.accel, resolution.accel, n)
            .map(|axis| remove_gravity(axis, gravity_threshold));
        let gyro = mean(&self.gyro, resolution.gyro, n);

        Some(Bias { accel, gyro })
    }
}

fn mean(sums: &[i64; 3], resolution: f64, n: f64) -> Vector3<f64> {
    Vector3::new(
        sums[0] as f64 * resolution / n,
        sums[1] as f64 * resolution / n,
        sums[2] as f64 * resolution / n,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES: Resolution = Resolution {
        accel: 2.0 / 32768.0,
        gyro: 250.0 / 32768.0,
    };

    #[test]
    fn gravity_boundary_is_strict() {
        assert_eq!(remove_gravity(0.8, 0.8), 0.8);
        assert_eq!(remove_gravity(-0.8, 0.8), -0.8);
        assert_eq!(remove_gravity(0.80000001, 0.8), 0.80000001 - 1.0);
        assert_eq!(remove_gravity(-0.80000001, 0.8), -0.80000001 + 1.0);
    }

    #[test]
    fn gravity_inside_threshold_untouched() {
        assert_eq!(remove_gravity(0.0, 0.8), 0.0);
        assert_eq!(remove_gravity(0.02, 0.8), 0.02);
        assert_eq!(remove_gravity(1.01, 0.8), 1.01 - 1.0);
        assert_eq!(remove_gravity(0.5, 0.4), 0.5 - 1.0);
    }

    #[test]
    fn empty_accumulator_has_no_bias() {
        assert!(Accumulator::new().bias(RES, 0.8).is_none());
    }

    #[test]
    fn constant_stream_averages_to_value() {
        let sample = RawSample {
            accel: [100, -200, 300],
            gyro: [-7, 0, 13],
        };
        let mut acc = Accumulator::new();
        for _ in 0..DEFAULT_CALIBRATION_SAMPLES {
            acc.push(&sample);
        }
        assert_eq!(acc.count(), 128);

        let bias = acc.bias(RES, 0.8).unwrap();
        assert_eq!(bias.accel.x, 100.0 * RES.accel);
        assert_eq!(bias.accel.y, -200.0 * RES.accel);
        assert_eq!(bias.accel.z, 300.0 * RES.accel);
        assert_eq!(bias.gyro.x, -7.0 * RES.gyro);
        assert_eq!(bias.gyro.y, 0.0);
        assert_eq!(bias.gyro.z, 13.0 * RES.gyro);
    }

    #[test]
    fn vertical_axis_loses_one_g() {
        // 16384 LSB is exactly 1 g at 2 g full scale
        let sample = RawSample {
            accel: [0, 16, 16384],
            gyro: [0, 0, 16384],
        };
        let mut acc = Accumulator::new();
        acc.push(&sample);
        acc.push(&sample);

        let bias = acc.bias(RES, 0.8).unwrap();
        assert_eq!(bias.accel.z, 0.0);
        assert_eq!(bias.accel.y, 16.0 * RES.accel);
        // gyro never gets a gravity correction
        assert_eq!(bias.gyro.z, 125.0);
    }

    #[test]
    fn upside_down_axis_gains_one_g() {
        let sample = RawSample {
            accel: [-16384, 0, 0],
            gyro: [0; 3],
        };
        let mut acc = Accumulator::new();
        acc.push(&sample);

        let bias = acc.bias(RES, 0.8).unwrap();
        assert_eq!(bias.accel.x, 0.0);
    }

    #[test]
    fn identical_streams_give_identical_bias() {
        let stream = [
            RawSample {
                accel: [12, -40, 16100],
                gyro: [3, -5, 9],
            },
            RawSample {
                accel: [15, -38, 16420],
                gyro: [4, -6, 8],
            },
            RawSample {
                accel: [9, -41, 16388],
                gyro: [2, -5, 10],
            },
        ];

        let run = || {
            let mut acc = Accumulator::new();
            for sample in &stream {
                acc.push(sample);
            }
            acc.bias(RES, DEFAULT_GRAVITY_THRESHOLD).unwrap()
        };

        assert_eq!(run(), run());
    }
}
