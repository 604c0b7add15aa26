use core::marker::PhantomData;

use crate::bus::{find_target, Bus, Registry, TargetInfo, PID_LEN};
use crate::calibration::{Accumulator, Bias, DEFAULT_GRAVITY_THRESHOLD};
use crate::sample::{AxisOrder, ImuData, RawSample, FRAME_LEN};
use crate::scale::{RangeTable, Resolution};

/// Largest dummy byte prefix any part may declare
pub const MAX_DUMMY_BYTES: usize = 4;

/// One configuration register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    pub reg: u8,
    data: [u8; 2],
    len: usize,
}

impl RegisterWrite {
    pub const fn byte(reg: u8, value: u8) -> Self {
        Self {
            reg,
            data: [value, 0],
            len: 1,
        }
    }

    /// 16-bit register, low byte first
    pub const fn word(reg: u8, lo: u8, hi: u8) -> Self {
        Self {
            reg,
            data: [lo, hi],
            len: 2,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Register map and encoding of a supported sensor
pub trait Part {
    type Config: Copy + Default;
    type Writes: AsRef<[RegisterWrite]>;

    const NAME: &'static str;
    const PID: [u8; PID_LEN];
    /// Default static address when wired as a plain I2C target
    const I2C_ADDRESS: u8;
    /// First register of the six-word output frame
    const DATA_REG: u8;
    const AXIS_ORDER: AxisOrder;
    /// Leading bytes to discard from every read, at most [`MAX_DUMMY_BYTES`].
    /// Reads through a part that exceeds it fail with [`Error::InvalidLength`].
    const DUMMY_BYTES: usize;

    const ACCEL_RANGES: RangeTable;
    const GYRO_RANGES: RangeTable;

    /// Writes that apply `config`, in issue order
    fn encode(config: &Self::Config) -> Self::Writes;

    fn accel_range_code(config: &Self::Config) -> u8;
    fn gyro_range_code(config: &Self::Config) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No target with this part's PID was found
    Unbound,
    Bound,
    /// Configuration written, resolution known
    Configured,
    /// Bias known, ready for `read`
    Calibrated,
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transport error
    Bus(E),

    /// Operation not allowed in the current state
    NotReady(State),

    /// Full-scale code has no entry in the part's range table
    UnsupportedFullScale(u8),

    /// Calibration asked for zero samples
    NoSamples,

    /// Register read back differs from what was written
    ConfigMismatch { reg: u8 },

    /// Requested more bytes than one output frame, or the part declares
    /// more than [`MAX_DUMMY_BYTES`] dummy bytes
    InvalidLength(usize),
}

/// Generic driver, one instance per physical sensor
pub struct Imu<B, P: Part> {
    bus: B,
    address: Option<u8>,
    config: P::Config,
    gravity_threshold: f64,
    verify_config: bool,
    resolution: Option<Resolution>,
    bias: Option<Bias>,
    _part: PhantomData<P>,
}

impl<B, P> Imu<B, P>
where
    B: Bus,
    P: Part,
{
    /// Binds to the target in `targets` whose PID matches the part exactly.
    /// Without a match the driver stays [`State::Unbound`].
    pub fn new(bus: B, targets: &[TargetInfo], config: P::Config) -> Self {
        let address = find_target(targets, &P::PID).map(|target| target.dynamic_address);
        match address {
            Some(address) => log_info!("{} at dynamic address {:#x}", P::NAME, address),
            None => log_warn!("{} not found on the bus", P::NAME),
        }

        Self::with_bound(bus, address, config)
    }

    /// Binds to a fixed address, for plain I2C wiring
    pub fn with_address(bus: B, address: u8, config: P::Config) -> Self {
        Self::with_bound(bus, Some(address), config)
    }

    fn with_bound(bus: B, address: Option<u8>, config: P::Config) -> Self {
        Imu {
            bus,
            address,
            config,
            gravity_threshold: DEFAULT_GRAVITY_THRESHOLD,
            verify_config: false,
            resolution: None,
            bias: None,
            _part: PhantomData,
        }
    }

    /// Accelerometer mean (g) beyond which an axis is treated as vertical
    pub fn with_gravity_threshold(mut self, threshold: f64) -> Self {
        self.gravity_threshold = threshold;
        self
    }

    /// Read every configuration register back after writing it
    pub fn with_config_verification(mut self, enable: bool) -> Self {
        self.verify_config = enable;
        self
    }

    pub fn release(self) -> B {
        self.bus
    }

    pub fn state(&self) -> State {
        match (self.address, self.resolution, self.bias) {
            (None, _, _) => State::Unbound,
            (Some(_), None, _) => State::Bound,
            (Some(_), Some(_), None) => State::Configured,
            (Some(_), Some(_), Some(_)) => State::Calibrated,
        }
    }

    pub fn address(&self) -> Option<u8> {
        self.address
    }

    pub fn config(&self) -> &P::Config {
        &self.config
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn bias(&self) -> Option<Bias> {
        self.bias
    }

    fn bound_address(&self) -> Result<u8, Error<B::Error>> {
        self.address.ok_or(Error::NotReady(State::Unbound))
    }

    fn lookup_resolution(config: &P::Config) -> Result<Resolution, Error<B::Error>> {
        let accel_code = P::accel_range_code(config);
        let gyro_code = P::gyro_range_code(config);

        Ok(Resolution {
            accel: P::ACCEL_RANGES
                .resolution(accel_code)
                .ok_or(Error::UnsupportedFullScale(accel_code))?,
            gyro: P::GYRO_RANGES
                .resolution(gyro_code)
                .ok_or(Error::UnsupportedFullScale(gyro_code))?,
        })
    }

    /// Writes the configuration and caches the resulting resolution.
    /// Any previous bias is dropped since it was measured at another scale.
    pub async fn init_device(&mut self) -> Result<Resolution, Error<B::Error>> {
        let address = self.bound_address()?;
        let resolution = Self::lookup_resolution(&self.config)?;

        self.resolution = None;
        self.bias = None;

        let writes = P::encode(&self.config);
        for write in writes.as_ref() {
            log_debug!("{} write {:#x}, {} bytes", P::NAME, write.reg, write.payload().len());
            self.bus
                .write(address, &[write.reg], write.payload())
                .await
                .map_err(Error::Bus)?;

            if self.verify_config {
                self.verify_write(address, write).await?;
            }
        }

        self.resolution = Some(resolution);
        Ok(resolution)
    }

    /// Replaces the configuration and writes it to the device
    pub async fn reconfigure(&mut self, config: P::Config) -> Result<Resolution, Error<B::Error>> {
        self.config = config;
        self.init_device().await
    }

    async fn verify_write(
        &mut self,
        address: u8,
        write: &RegisterWrite,
    ) -> Result<(), Error<B::Error>> {
        let mut buf = [0u8; 2];
        let readback = &mut buf[..write.payload().len()];
        self.read_register(address, write.reg, readback).await?;

        if readback != write.payload() {
            log_warn!("{} register {:#x} did not read back as written", P::NAME, write.reg);
            return Err(Error::ConfigMismatch { reg: write.reg });
        }
        Ok(())
    }

    async fn read_register(
        &mut self,
        address: u8,
        reg: u8,
        out: &mut [u8],
    ) -> Result<(), Error<B::Error>> {
        if out.len() > FRAME_LEN {
            return Err(Error::InvalidLength(out.len()));
        }

        let len = P::DUMMY_BYTES + out.len();
        let mut buf = [0u8; MAX_DUMMY_BYTES + FRAME_LEN];
        let buf = buf.get_mut(..len).ok_or(Error::InvalidLength(len))?;

        self.bus
            .read(address, &[reg], buf)
            .await
            .map_err(Error::Bus)?;

        out.copy_from_slice(&buf[P::DUMMY_BYTES..]);
        Ok(())
    }

    /// Reads `out.len()` bytes starting at `reg`, dummy bytes removed.
    /// At most one output frame (12 bytes) per call.
    pub async fn read_config(&mut self, reg: u8, out: &mut [u8]) -> Result<(), Error<B::Error>> {
        let address = self.bound_address()?;
        self.read_register(address, reg, out).await
    }

    /// One output frame in LSB, no scaling or bias
    pub async fn read_raw(&mut self) -> Result<RawSample, Error<B::Error>> {
        let address = self.bound_address()?;

        let mut frame = [0u8; FRAME_LEN];
        self.read_register(address, P::DATA_REG, &mut frame).await?;

        Ok(RawSample::decode(&frame, P::AXIS_ORDER))
    }

    /// Averages `samples` back-to-back frames into a new bias.
    /// The device must be stationary and resting on one of its axes.
    /// On a bus error the previous bias, if any, is kept.
    pub async fn calibrate(&mut self, samples: u16) -> Result<Bias, Error<B::Error>> {
        let resolution = self.resolution.ok_or(Error::NotReady(self.state()))?;
        if samples == 0 {
            return Err(Error::NoSamples);
        }

        let mut acc = Accumulator::new();
        for _ in 0..samples {
            let raw = self.read_raw().await?;
            acc.push(&raw);
        }

        let bias = acc
            .bias(resolution, self.gravity_threshold)
            .ok_or(Error::NoSamples)?;
        log_info!(
            "{} bias accel [{}, {}, {}] g, gyro [{}, {}, {}] dps",
            P::NAME,
            bias.accel.x,
            bias.accel.y,
            bias.accel.z,
            bias.gyro.x,
            bias.gyro.y,
            bias.gyro.z
        );

        self.bias = Some(bias);
        Ok(bias)
    }

    /// Installs a bias measured earlier, e.g. restored from storage
    pub fn set_bias(&mut self, bias: Bias) -> Result<(), Error<B::Error>> {
        if self.resolution.is_none() {
            return Err(Error::NotReady(self.state()));
        }
        self.bias = Some(bias);
        Ok(())
    }

    /// Calibrated accelerometer (g) and gyroscope (dps) readings
    pub async fn read(&mut self) -> Result<ImuData, Error<B::Error>> {
        let (resolution, bias) = match (self.resolution, self.bias) {
            (Some(resolution), Some(bias)) => (resolution, bias),
            _ => return Err(Error::NotReady(self.state())),
        };

        let mut data = self.read_raw().await?.to_physical(resolution);
        data.accel -= bias.accel;
        data.gyro -= bias.gyro;

        Ok(data)
    }
}

impl<B, P> Imu<B, P>
where
    B: Registry,
    P: Part,
{
    /// Enumerates the bus and binds like [`Imu::new`]
    pub async fn discover(mut bus: B, config: P::Config) -> Result<Self, Error<B::Error>> {
        let targets = bus.targets().await.map_err(Error::Bus)?;
        Ok(Self::new(bus, &targets, config))
    }
}
