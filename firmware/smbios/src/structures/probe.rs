//! Voltage (type 26), Temperature (type 28) and Electrical Current (type 29)
//! probes
//!
//! The three types share one layout; only the units differ (mV, 1/10 °C and
//! mA respectively).

use crate::bits::split_low5_high3;
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Reading value meaning "unknown"
const VALUE_UNKNOWN: u16 = 0x8000;

/// Decoded probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeInfo {
    pub handle: u16,
    pub description: String,
    /// Location, bits 0-4 of the location-and-status byte
    pub location: u8,
    /// Status, bits 5-7 of the location-and-status byte
    pub status: u8,
    pub maximum_value: Option<u16>,
    pub minimum_value: Option<u16>,
    pub resolution: Option<u16>,
    pub tolerance: Option<u16>,
    pub accuracy: Option<u16>,
    pub oem_defined: u32,
    pub nominal_value: Option<u16>,
}

impl ProbeInfo {
    pub fn location_label(&self) -> &'static str {
        labels::probe_location(self.location)
    }

    pub fn status_label(&self) -> &'static str {
        labels::device_status(self.status)
    }
}

/// Reading field, `None` when absent or marked unknown
fn reading(s: &Structure<'_>, offset: usize) -> Option<u16> {
    s.word_opt(offset).filter(|&value| value != VALUE_UNKNOWN)
}

pub fn decode(s: &Structure<'_>) -> ProbeInfo {
    let (location, status) = split_low5_high3(s.byte(0x05));

    ProbeInfo {
        handle: s.handle(),
        description: s.string(0x04),
        location,
        status,
        maximum_value: reading(s, 0x06),
        minimum_value: reading(s, 0x08),
        resolution: reading(s, 0x0A),
        tolerance: reading(s, 0x0C),
        accuracy: reading(s, 0x0E),
        oem_defined: s.dword(0x10),
        nominal_value: reading(s, 0x14),
    }
}
