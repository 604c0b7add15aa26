//! Transport contract between the drivers and the bus controller.
//!
//! The controller (an I3C bridge, or a plain I2C peripheral through
//! [`I2cBus`]) moves bytes; it knows nothing about sensors. Drivers only ever
//! issue one transaction at a time and await it before the next.

use embedded_hal_async::i2c::I2c;
use heapless::Vec;

/// Length of an I3C provisional ID
pub const PID_LEN: usize = 6;

/// Upper bound on targets reported by a [`Registry`]
pub const MAX_TARGETS: usize = 16;

/// A device found on the bus during dynamic address assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetInfo {
    pub pid: [u8; PID_LEN],
    pub dynamic_address: u8,
}

pub type Targets = Vec<TargetInfo, MAX_TARGETS>;

/// Addressed register transfers
#[allow(async_fn_in_trait)]
pub trait Bus {
    type Error: core::fmt::Debug;

    /// Writes `subaddress`, then reads `buf.len()` bytes from `address`.
    /// An empty subaddress continues from the device's current pointer.
    async fn read(
        &mut self,
        address: u8,
        subaddress: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Writes `subaddress` followed by `payload` in one transfer
    async fn write(
        &mut self,
        address: u8,
        subaddress: &[u8],
        payload: &[u8],
    ) -> Result<(), Self::Error>;
}

/// A bus that can enumerate its targets
#[allow(async_fn_in_trait)]
pub trait Registry: Bus {
    async fn targets(&mut self) -> Result<Targets, Self::Error>;
}

impl<T: Bus> Bus for &mut T {
    type Error = T::Error;

    async fn read(
        &mut self,
        address: u8,
        subaddress: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).read(address, subaddress, buf).await
    }

    async fn write(
        &mut self,
        address: u8,
        subaddress: &[u8],
        payload: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).write(address, subaddress, payload).await
    }
}

impl<T: Registry> Registry for &mut T {
    async fn targets(&mut self) -> Result<Targets, Self::Error> {
        (**self).targets().await
    }
}

/// First target whose PID equals `pid` byte for byte
pub fn find_target<'a>(targets: &'a [TargetInfo], pid: &[u8; PID_LEN]) -> Option<&'a TargetInfo> {
    targets.iter().find(|target| &target.pid == pid)
}

/// Largest subaddress + payload the I2C adapter will frame
pub const MAX_WRITE_LEN: usize = 66;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError<E> {
    /// I2C bus error
    I2c(E),

    /// Subaddress and payload do not fit in one write frame
    Overflow,
}

/// Adapts an `embedded-hal-async` I2C peripheral to [`Bus`]
pub struct I2cBus<I> {
    i2c: I,
}

impl<I> I2cBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I, E> Bus for I2cBus<I>
where
    I: I2c<Error = E>,
    E: core::fmt::Debug,
{
    type Error = I2cBusError<E>;

    async fn read(
        &mut self,
        address: u8,
        subaddress: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        let result = if subaddress.is_empty() {
            self.i2c.read(address, buf).await
        } else {
            self.i2c.write_read(address, subaddress, buf).await
        };

        result.map_err(I2cBusError::I2c)
    }

    async fn write(
        &mut self,
        address: u8,
        subaddress: &[u8],
        payload: &[u8],
    ) -> Result<(), Self::Error> {
        let mut frame: Vec<u8, MAX_WRITE_LEN> = Vec::new();
        frame
            .extend_from_slice(subaddress)
            .map_err(|_| I2cBusError::Overflow)?;
        frame
            .extend_from_slice(payload)
            .map_err(|_| I2cBusError::Overflow)?;

        self.i2c
            .write(address, &frame)
            .await
            .map_err(I2cBusError::I2c)
    }
}
