/// Provisional ID reported during I3C dynamic address assignment
pub const PID: [u8; 6] = [0x02, 0x08, 0x00, 0x70, 0x92, 0x0B];

/// 7-bit address with SA0 tied high
pub const I2C_ADDRESS: u8 = 0x6A;

pub const DUMMY_BYTES: usize = 0;

/// Accelerometer mode and ODR
pub const CTRL1: u8 = 0x10;
/// Gyroscope mode and ODR
pub const CTRL2: u8 = 0x11;
/// Gyroscope full scale
pub const CTRL6: u8 = 0x15;
/// Accelerometer full scale
pub const CTRL8: u8 = 0x17;

/// Gyroscope X, Y, Z followed by accelerometer X, Y, Z
pub const OUTX_L_G: u8 = 0x22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelMode {
    HighPerformance = 0x00,
    HighAccuracy = 0x10,
    OdrTriggered = 0x30,
    LowPower1 = 0x40,
    LowPower2 = 0x50,
    LowPower3 = 0x60,
    Normal = 0x70,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroMode {
    HighPerformance = 0x00,
    HighAccuracy = 0x10,
    OdrTriggered = 0x30,
    Sleep = 0x40,
    LowPower = 0x50,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelOdr {
    PowerDown = 0x00,
    Hz1_875 = 0x01,
    Hz7_5 = 0x02,
    Hz15 = 0x03,
    Hz30 = 0x04,
    Hz60 = 0x05,
    Hz120 = 0x06,
    Hz240 = 0x07,
    Hz480 = 0x08,
    Hz960 = 0x09,
    Hz1920 = 0x0A,
    Hz3840 = 0x0B,
    Hz7680 = 0x0C,
}

/// Same as `AccelOdr` minus the 1.875 Hz low power rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroOdr {
    PowerDown = 0x00,
    Hz7_5 = 0x02,
    Hz15 = 0x03,
    Hz30 = 0x04,
    Hz60 = 0x05,
    Hz120 = 0x06,
    Hz240 = 0x07,
    Hz480 = 0x08,
    Hz960 = 0x09,
    Hz1920 = 0x0A,
    Hz3840 = 0x0B,
    Hz7680 = 0x0C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    G2 = 0x00,
    G4 = 0x01,
    G8 = 0x02,
    G16 = 0x03,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroRange {
    D125 = 0x00,
    D250 = 0x01,
    D500 = 0x02,
    D1000 = 0x03,
    D2000 = 0x04,
    D4000 = 0x0C,
}
