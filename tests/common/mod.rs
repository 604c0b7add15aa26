#![allow(dead_code)]

use std::collections::VecDeque;

use i3c_imu::bus::{Bus, Registry, TargetInfo, Targets};

pub const BMI323_PID: [u8; 6] = [0x07, 0x70, 0x10, 0x43, 0x10, 0x00];
pub const LSM6DSV_PID: [u8; 6] = [0x02, 0x08, 0x00, 0x70, 0x92, 0x0B];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Read {
        address: u8,
        subaddress: Vec<u8>,
        len: usize,
    },
    Write {
        address: u8,
        subaddress: Vec<u8>,
        payload: Vec<u8>,
    },
}

/// I3C controller stand-in. Reads pop queued responses, then fall back to
/// `frame` forever. Every transfer is logged.
#[derive(Debug, Default)]
pub struct FakeBus {
    pub targets: Vec<TargetInfo>,
    pub responses: VecDeque<Vec<u8>>,
    pub frame: Vec<u8>,
    pub ops: Vec<Op>,
    /// Fail every transfer once this many have succeeded
    pub fail_after: Option<usize>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, pid: [u8; 6], dynamic_address: u8) -> Self {
        self.targets.push(TargetInfo {
            pid,
            dynamic_address,
        });
        self
    }

    pub fn with_frame(mut self, frame: &[u8]) -> Self {
        self.frame = frame.to_vec();
        self
    }

    pub fn push_response(&mut self, bytes: &[u8]) {
        self.responses.push_back(bytes.to_vec());
    }

    pub fn reads(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Read { .. }))
            .count()
    }

    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Write {
                    subaddress,
                    payload,
                    ..
                } => Some((subaddress[0], payload.clone())),
                _ => None,
            })
            .collect()
    }

    fn check_failure(&self) -> Result<(), FakeError> {
        match self.fail_after {
            Some(limit) if self.ops.len() >= limit => Err(FakeError),
            _ => Ok(()),
        }
    }
}

impl Bus for FakeBus {
    type Error = FakeError;

    async fn read(
        &mut self,
        address: u8,
        subaddress: &[u8],
        buf: &mut [u8],
    ) -> Result<(), FakeError> {
        self.check_failure()?;
        self.ops.push(Op::Read {
            address,
            subaddress: subaddress.to_vec(),
            len: buf.len(),
        });

        let data = self
            .responses
            .pop_front()
            .unwrap_or_else(|| self.frame.clone());
        let n = buf.len().min(data.len());
        buf[..n].copy_from_slice(&data[..n]);
        Ok(())
    }

    async fn write(
        &mut self,
        address: u8,
        subaddress: &[u8],
        payload: &[u8],
    ) -> Result<(), FakeError> {
        self.check_failure()?;
        self.ops.push(Op::Write {
            address,
            subaddress: subaddress.to_vec(),
            payload: payload.to_vec(),
        });
        Ok(())
    }
}

impl Registry for FakeBus {
    async fn targets(&mut self) -> Result<Targets, FakeError> {
        self.check_failure()?;
        Ok(self.targets.iter().copied().collect())
    }
}

/// BMI323 read: two dummy bytes, then accel and gyro words
pub fn bmi323_frame(accel: [i16; 3], gyro: [i16; 3]) -> Vec<u8> {
    let mut bytes = vec![0xA5, 0x5A];
    bytes.extend(words(accel, gyro));
    bytes
}

/// LSM6DSV read: gyro words first, no dummy bytes
pub fn lsm6dsv_frame(accel: [i16; 3], gyro: [i16; 3]) -> Vec<u8> {
    words(gyro, accel)
}

fn words(first: [i16; 3], second: [i16; 3]) -> Vec<u8> {
    first
        .iter()
        .chain(second.iter())
        .flat_map(|w| w.to_le_bytes())
        .collect()
}
