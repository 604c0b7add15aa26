//! STMicroelectronics LSM6DSV.
//!
//! Mode and ODR share one control register per sensor, full scale lives in a
//! separate one. Output registers start with the gyroscope.

use crate::imu::{Imu, Part, RegisterWrite};
use crate::reg_data::lsm6dsv::*;
use crate::sample::AxisOrder;
use crate::scale::RangeTable;

pub use crate::reg_data::lsm6dsv::{AccelMode, AccelOdr, AccelRange, GyroMode, GyroOdr, GyroRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    pub mode: AccelMode,
    pub odr: AccelOdr,
    pub range: AccelRange,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            mode: AccelMode::HighPerformance,
            odr: AccelOdr::Hz240,
            range: AccelRange::G2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    pub mode: GyroMode,
    pub odr: GyroOdr,
    pub range: GyroRange,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            mode: GyroMode::HighPerformance,
            odr: GyroOdr::Hz240,
            range: GyroRange::D250,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub accel: AccelConfig,
    pub gyro: GyroConfig,
}

pub const ACCEL_RANGES: RangeTable = RangeTable::new(&[
    (AccelRange::G2 as u8, 2.0),
    (AccelRange::G4 as u8, 4.0),
    (AccelRange::G8 as u8, 8.0),
    (AccelRange::G16 as u8, 16.0),
]);

pub const GYRO_RANGES: RangeTable = RangeTable::new(&[
    (GyroRange::D125 as u8, 125.0),
    (GyroRange::D250 as u8, 250.0),
    (GyroRange::D500 as u8, 500.0),
    (GyroRange::D1000 as u8, 1000.0),
    (GyroRange::D2000 as u8, 2000.0),
    (GyroRange::D4000 as u8, 4000.0),
]);

pub struct Lsm6dsv;

impl Part for Lsm6dsv {
    type Config = Config;
    type Writes = [RegisterWrite; 4];

    const NAME: &'static str = "LSM6DSV";
    const PID: [u8; 6] = PID;
    const I2C_ADDRESS: u8 = I2C_ADDRESS;
    const DATA_REG: u8 = OUTX_L_G;
    const AXIS_ORDER: AxisOrder = AxisOrder::GyroFirst;
    const DUMMY_BYTES: usize = DUMMY_BYTES;

    const ACCEL_RANGES: RangeTable = ACCEL_RANGES;
    const GYRO_RANGES: RangeTable = GYRO_RANGES;

    fn encode(config: &Config) -> [RegisterWrite; 4] {
        let accel = &config.accel;
        let gyro = &config.gyro;
        [
            RegisterWrite::byte(CTRL1, accel.mode as u8 | accel.odr as u8),
            RegisterWrite::byte(CTRL8, accel.range as u8),
            RegisterWrite::byte(CTRL2, gyro.mode as u8 | gyro.odr as u8),
            RegisterWrite::byte(CTRL6, gyro.range as u8),
        ]
    }

    fn accel_range_code(config: &Config) -> u8 {
        config.accel.range as u8
    }

    fn gyro_range_code(config: &Config) -> u8 {
        config.gyro.range as u8
    }
}

pub type Lsm6dsvImu<B> = Imu<B, Lsm6dsv>;
