//! Physical Memory Array (type 16) and Memory Device (type 17)

use crate::bits::field_u8;
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// 16-bit device size that defers to the 32-bit extended size
const SIZE_SEE_EXTENDED: u16 = 0x7FFF;

/// 16-bit device size meaning "unknown"
const SIZE_UNKNOWN: u16 = 0xFFFF;

/// Bytes per MB for the extended array capacity
const BYTES_PER_MB: u64 = 1024 * 1024;

// =============================================================================
// PHYSICAL MEMORY ARRAY
// =============================================================================

/// Decoded Physical Memory Array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalMemoryArray {
    pub handle: u16,
    pub location: u8,
    pub array_use: u8,
    pub error_correction: u8,
    /// Extended capacity in MB when present, else the 32-bit field as stored
    pub maximum_capacity: u64,
    pub error_information_handle: u16,
    pub number_of_devices: u16,
}

impl PhysicalMemoryArray {
    pub fn location_label(&self) -> &'static str {
        labels::memory_array_location(self.location)
    }

    pub fn use_label(&self) -> &'static str {
        labels::memory_array_use(self.array_use)
    }

    pub fn error_correction_label(&self) -> &'static str {
        labels::memory_error_correction(self.error_correction)
    }
}

pub fn decode_array(s: &Structure<'_>) -> PhysicalMemoryArray {
    let extended = s.qword(0x0F);
    let maximum_capacity = if extended != 0 {
        extended / BYTES_PER_MB
    } else {
        u64::from(s.dword(0x07))
    };

    PhysicalMemoryArray {
        handle: s.handle(),
        location: s.byte(0x04),
        array_use: s.byte(0x05),
        error_correction: s.byte(0x06),
        maximum_capacity,
        error_information_handle: s.word(0x0B),
        number_of_devices: s.word(0x0D),
    }
}

// =============================================================================
// MEMORY DEVICE
// =============================================================================

/// Decoded Memory Device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDevice {
    pub handle: u16,
    pub array_handle: u16,
    pub error_information_handle: u16,
    pub total_width: u16,
    pub data_width: u16,
    /// Size in MB, 0 when unknown
    pub size_mb: u32,
    pub form_factor: u8,
    pub device_set: u8,
    pub device_locator: String,
    pub bank_locator: String,
    pub memory_type: u8,
    pub type_detail: u16,
    /// Speed in MT/s
    pub speed: u16,
    pub manufacturer: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub attributes: u8,
    pub configured_speed: u16,
    /// Voltages in millivolts
    pub minimum_voltage: u16,
    pub maximum_voltage: u16,
    pub configured_voltage: u16,
}

impl MemoryDevice {
    pub fn memory_type_label(&self) -> &'static str {
        labels::memory_type(self.memory_type)
    }

    pub fn form_factor_label(&self) -> &'static str {
        labels::form_factor(self.form_factor)
    }

    /// Rank (attributes bits 0-3), 0 when unknown
    pub fn rank(&self) -> u8 {
        field_u8(self.attributes, 0, 4)
    }
}

fn device_size_mb(size: u16, extended: u32) -> u32 {
    match size {
        SIZE_SEE_EXTENDED if extended != 0 => extended,
        SIZE_UNKNOWN => 0,
        n => u32::from(n),
    }
}

/// Decode a memory device; `None` for an empty slot (raw size 0)
pub fn decode_device(s: &Structure<'_>) -> Option<MemoryDevice> {
    let size = s.word(0x0C);
    if size == 0 {
        return None;
    }

    Some(MemoryDevice {
        handle: s.handle(),
        array_handle: s.word(0x04),
        error_information_handle: s.word(0x06),
        total_width: s.word(0x08),
        data_width: s.word(0x0A),
        size_mb: device_size_mb(size, s.dword(0x1C)),
        form_factor: s.byte(0x0E),
        device_set: s.byte(0x0F),
        device_locator: s.string(0x10),
        bank_locator: s.string(0x11),
        memory_type: s.byte(0x12),
        type_detail: s.word(0x13),
        speed: s.word(0x15),
        manufacturer: s.string(0x17),
        serial_number: s.string(0x18),
        asset_tag: s.string(0x19),
        part_number: s.string(0x1A),
        attributes: s.byte(0x1B),
        configured_speed: s.word(0x20),
        minimum_voltage: s.word(0x22),
        maximum_voltage: s.word(0x24),
        configured_voltage: s.word(0x26),
    })
}
