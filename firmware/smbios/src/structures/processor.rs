//! Processor Information (type 4)

use crate::bits::{bit_u8, field_u8};
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// Processor characteristics word (offset 0x26)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProcessorCharacteristics: u16 {
        const UNKNOWN = 1 << 1;
        const CAPABLE_64BIT = 1 << 2;
        const MULTI_CORE = 1 << 3;
        const HARDWARE_THREAD = 1 << 4;
        const EXECUTE_PROTECTION = 1 << 5;
        const ENHANCED_VIRTUALIZATION = 1 << 6;
        const POWER_PERFORMANCE_CONTROL = 1 << 7;
        const CAPABLE_128BIT = 1 << 8;
        const ARM64_SOC_ID = 1 << 9;
    }
}

/// Processor family byte that defers to the family 2 word
const FAMILY_SEE_FAMILY2: u8 = 0xFE;

/// Count byte that defers to the 16-bit count 2 field
const COUNT_SEE_COUNT2: u8 = 0xFF;

/// Decoded Processor Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorInfo {
    pub handle: u16,
    pub socket_designation: String,
    pub processor_type: u8,
    pub family: u16,
    pub manufacturer: String,
    pub processor_id: u64,
    pub version: String,
    /// Raw voltage byte, see [`ProcessorInfo::voltage_decivolts`]
    pub voltage: u8,
    /// External clock in MHz
    pub external_clock: u16,
    /// Maximum speed in MHz
    pub max_speed: u16,
    /// Current speed in MHz
    pub current_speed: u16,
    pub status: u8,
    pub upgrade: u8,
    pub l1_cache_handle: u16,
    pub l2_cache_handle: u16,
    pub l3_cache_handle: u16,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub core_count: u16,
    pub cores_enabled: u16,
    pub thread_count: u16,
    pub characteristics: ProcessorCharacteristics,
}

impl ProcessorInfo {
    pub fn processor_type_label(&self) -> &'static str {
        labels::processor_type(self.processor_type)
    }

    /// Socket populated (status bit 6)
    pub fn is_populated(&self) -> bool {
        bit_u8(self.status, 6)
    }

    /// CPU status (status bits 0-2), 1 means enabled
    pub fn cpu_status(&self) -> u8 {
        field_u8(self.status, 0, 3)
    }

    /// Core voltage in tenths of a volt
    ///
    /// Legacy encoding lists supported voltages as bits; the lowest set bit
    /// wins.
    pub fn voltage_decivolts(&self) -> Option<u8> {
        if bit_u8(self.voltage, 7) {
            return Some(field_u8(self.voltage, 0, 7));
        }
        [(0, 50), (1, 33), (2, 29)]
            .into_iter()
            .find(|&(bit, _)| bit_u8(self.voltage, bit))
            .map(|(_, decivolts)| decivolts)
    }

    pub fn supports_64bit(&self) -> bool {
        self.characteristics.contains(ProcessorCharacteristics::CAPABLE_64BIT)
    }
}

fn count(s: &Structure<'_>, offset: usize, offset2: usize) -> u16 {
    match s.byte(offset) {
        COUNT_SEE_COUNT2 if s.has(offset2, 2) => s.word(offset2),
        n => u16::from(n),
    }
}

pub fn decode(s: &Structure<'_>) -> ProcessorInfo {
    let family = match s.byte(0x06) {
        FAMILY_SEE_FAMILY2 if s.has(0x28, 2) => s.word(0x28),
        f => u16::from(f),
    };

    ProcessorInfo {
        handle: s.handle(),
        socket_designation: s.string(0x04),
        processor_type: s.byte(0x05),
        family,
        manufacturer: s.string(0x07),
        processor_id: s.qword(0x08),
        version: s.string(0x10),
        voltage: s.byte(0x11),
        external_clock: s.word(0x12),
        max_speed: s.word(0x14),
        current_speed: s.word(0x16),
        status: s.byte(0x18),
        upgrade: s.byte(0x19),
        l1_cache_handle: s.word(0x1A),
        l2_cache_handle: s.word(0x1C),
        l3_cache_handle: s.word(0x1E),
        serial_number: s.string(0x20),
        asset_tag: s.string(0x21),
        part_number: s.string(0x22),
        core_count: count(s, 0x23, 0x2A),
        cores_enabled: count(s, 0x24, 0x2C),
        thread_count: count(s, 0x25, 0x2E),
        characteristics: ProcessorCharacteristics::from_bits_retain(s.word(0x26)),
    }
}
