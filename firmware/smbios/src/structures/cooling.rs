//! Cooling Device (type 27)

use crate::bits::split_low5_high3;
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded Cooling Device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoolingDevice {
    pub handle: u16,
    /// Handle of the associated temperature probe, 0xFFFF when none
    pub temperature_probe_handle: u16,
    /// Device type, bits 0-4 of the type-and-status byte
    pub device_type: u8,
    /// Status, bits 5-7 of the type-and-status byte
    pub status: u8,
    pub unit_group: u8,
    pub oem_defined: u32,
    /// Nominal speed in RPM, `None` when unknown
    pub nominal_speed: Option<u16>,
    pub description: String,
}

impl CoolingDevice {
    pub fn device_type_label(&self) -> &'static str {
        labels::cooling_device_type(self.device_type)
    }

    pub fn status_label(&self) -> &'static str {
        labels::device_status(self.status)
    }
}

pub fn decode(s: &Structure<'_>) -> CoolingDevice {
    let (device_type, status) = split_low5_high3(s.byte(0x06));

    CoolingDevice {
        handle: s.handle(),
        temperature_probe_handle: s.word(0x04),
        device_type,
        status,
        unit_group: s.byte(0x07),
        oem_defined: s.dword(0x08),
        nominal_speed: s.word_opt(0x0C).filter(|&rpm| rpm != 0x8000),
        description: s.string(0x0E),
    }
}
