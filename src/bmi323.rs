//! Bosch BMI323.
//!
//! Both sensors are configured through one 16-bit register each. The low
//! byte carries bandwidth, range and ODR, the high byte mode and averaging.
//! Reads return two dummy bytes before the payload.

use crate::imu::{Imu, Part, RegisterWrite};
use crate::reg_data::bmi323::*;
use crate::sample::AxisOrder;
use crate::scale::RangeTable;

pub use crate::reg_data::bmi323::{
    AccelMode, AccelRange, Averaging, Bandwidth, GyroMode, GyroRange, Odr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    pub mode: AccelMode,
    pub averaging: Averaging,
    pub bandwidth: Bandwidth,
    pub range: AccelRange,
    pub odr: Odr,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            mode: AccelMode::HighPerformance,
            averaging: Averaging::NoAvg,
            bandwidth: Bandwidth::OdrQuarter,
            range: AccelRange::G2,
            odr: Odr::Hz100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    pub mode: GyroMode,
    pub averaging: Averaging,
    pub bandwidth: Bandwidth,
    pub range: GyroRange,
    pub odr: Odr,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            mode: GyroMode::HighPerformance,
            averaging: Averaging::NoAvg,
            bandwidth: Bandwidth::OdrQuarter,
            range: GyroRange::D250,
            odr: Odr::Hz100,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub accel: AccelConfig,
    pub gyro: GyroConfig,
}

impl AccelConfig {
    /// ACC_CONF as (low, high) byte
    pub fn encode(&self) -> (u8, u8) {
        (
            self.bandwidth as u8 | self.range as u8 | self.odr as u8,
            self.mode as u8 | self.averaging as u8,
        )
    }
}

impl GyroConfig {
    /// GYR_CONF as (low, high) byte
    pub fn encode(&self) -> (u8, u8) {
        (
            self.bandwidth as u8 | self.range as u8 | self.odr as u8,
            self.mode as u8 | self.averaging as u8,
        )
    }
}

/// Accelerometer full scale in g
pub const ACCEL_RANGES: RangeTable = RangeTable::new(&[
    (AccelRange::G2 as u8, 2.0),
    (AccelRange::G4 as u8, 4.0),
    (AccelRange::G8 as u8, 8.0),
    (AccelRange::G16 as u8, 16.0),
]);

/// Gyroscope full scale in dps
pub const GYRO_RANGES: RangeTable = RangeTable::new(&[
    (GyroRange::D125 as u8, 125.0),
    (GyroRange::D250 as u8, 250.0),
    (GyroRange::D500 as u8, 500.0),
    (GyroRange::D1000 as u8, 1000.0),
    (GyroRange::D2000 as u8, 2000.0),
]);

pub struct Bmi323;

impl Part for Bmi323 {
    type Config = Config;
    type Writes = [RegisterWrite; 2];

    const NAME: &'static str = "BMI323";
    const PID: [u8; 6] = PID;
    const I2C_ADDRESS: u8 = I2C_ADDRESS;
    const DATA_REG: u8 = ACC_DATA_X;
    const AXIS_ORDER: AxisOrder = AxisOrder::AccelFirst;
    const DUMMY_BYTES: usize = DUMMY_BYTES;

    const ACCEL_RANGES: RangeTable = ACCEL_RANGES;
    const GYRO_RANGES: RangeTable = GYRO_RANGES;

    fn encode(config: &Config) -> [RegisterWrite; 2] {
        let (acc_lo, acc_hi) = config.accel.encode();
        let (gyr_lo, gyr_hi) = config.gyro.encode();
        [
            RegisterWrite::word(ACC_CONF, acc_lo, acc_hi),
            RegisterWrite::word(GYR_CONF, gyr_lo, gyr_hi),
        ]
    }

    fn accel_range_code(config: &Config) -> u8 {
        config.accel.range as u8
    }

    fn gyro_range_code(config: &Config) -> u8 {
        config.gyro.range as u8
    }
}

pub type Bmi323Imu<B> = Imu<B, Bmi323>;
