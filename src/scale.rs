//! Full-scale code to physical range lookup.

/// Magnitude of the signed 16-bit output range
pub const SYMMETRIC_RANGE: f64 = 32768.0;

/// Maps a part's full-scale register code to its range (g or dps)
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    entries: &'static [(u8, f64)],
}

impl RangeTable {
    pub const fn new(entries: &'static [(u8, f64)]) -> Self {
        Self { entries }
    }

    pub fn range(&self, code: u8) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, range)| *range)
    }

    /// Physical units per LSB for `code`
    pub fn resolution(&self, code: u8) -> Option<f64> {
        self.range(code).map(|range| range / SYMMETRIC_RANGE)
    }

    pub fn entries(&self) -> &'static [(u8, f64)] {
        self.entries
    }
}

/// Units per LSB for the currently configured ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// g per LSB
    pub accel: f64,
    /// dps per LSB
    pub gyro: f64,
}
