//! Register-level drivers for the BMI323 and LSM6DSV IMUs on an I3C bus,
//! with stationary bias calibration.
//!
//! ```ignore
//! let mut imu = Bmi323Imu::discover(i3c, bmi323::Config::default()).await?;
//! imu.init_device().await?;
//! imu.calibrate(DEFAULT_CALIBRATION_SAMPLES).await?;
//! let data = imu.read().await?;
//! ```
#![cfg_attr(not(test), no_std)]

// must be first so the log macros are visible everywhere
mod fmt;

pub(crate) mod reg_data;

pub mod bus;
pub mod calibration;
pub mod imu;
pub mod sample;
pub mod scale;

pub mod bmi323;
pub mod lsm6dsv;

pub use bmi323::{Bmi323, Bmi323Imu};
pub use bus::{Bus, I2cBus, Registry, TargetInfo};
pub use calibration::{Bias, DEFAULT_CALIBRATION_SAMPLES};
pub use imu::{Error, Imu, Part, State};
pub use lsm6dsv::{Lsm6dsv, Lsm6dsvImu};
pub use sample::{ImuData, RawSample};
