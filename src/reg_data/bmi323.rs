/// Provisional ID reported during I3C dynamic address assignment
pub const PID: [u8; 6] = [0x07, 0x70, 0x10, 0x43, 0x10, 0x00];

/// 7-bit address with SDO tied low
pub const I2C_ADDRESS: u8 = 0x68;

/// Every read returns this many dummy bytes ahead of the payload
pub const DUMMY_BYTES: usize = 2;

/// Accelerometer X, Y, Z followed by gyroscope X, Y, Z
pub const ACC_DATA_X: u8 = 0x03;

pub const ACC_CONF: u8 = 0x20;
pub const GYR_CONF: u8 = 0x21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelMode {
    Suspend = 0x00,
    LowPower = 0x30,
    HighPerformance = 0x40,
    Normal = 0x70,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroMode {
    Suspend = 0x00,
    DriveOnly = 0x10,
    LowPower = 0x30,
    HighPerformance = 0x40,
    Normal = 0x70,
}

/// Number of samples averaged in low power mode, shared by both sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Averaging {
    NoAvg = 0x00,
    Avg2 = 0x01,
    Avg4 = 0x02,
    Avg8 = 0x03,
    Avg16 = 0x04,
    Avg32 = 0x05,
    Avg64 = 0x06,
}

/// 3dB cutoff relative to the output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bandwidth {
    OdrHalf = 0x00,
    OdrQuarter = 0x80,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    G2 = 0x00,
    G4 = 0x10,
    G8 = 0x20,
    G16 = 0x30,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroRange {
    D125 = 0x00,
    D250 = 0x10,
    D500 = 0x20,
    D1000 = 0x30,
    D2000 = 0x40,
}

/// Output data rate, same encoding for accelerometer and gyroscope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Odr {
    Hz0_78125 = 0x01,
    Hz1_5625 = 0x02,
    Hz3_125 = 0x03,
    Hz6_25 = 0x04,
    Hz12_5 = 0x05,
    Hz25 = 0x06,
    Hz50 = 0x07,
    Hz100 = 0x08,
    Hz200 = 0x09,
    Hz400 = 0x0A,
    Hz800 = 0x0B,
    Hz1600 = 0x0C,
    Hz3200 = 0x0D,
    Hz6400 = 0x0E,
}
