//! Cache Information (type 7)

use crate::bits::{bit_u16, field_u16};
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded Cache Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInfo {
    pub handle: u16,
    pub socket_designation: String,
    /// Raw cache configuration word
    pub configuration: u16,
    /// Maximum size in the firmware's granularity
    pub maximum_size: u32,
    /// Installed size in the firmware's granularity
    pub installed_size: u32,
    pub supported_sram_type: u16,
    pub current_sram_type: u16,
    /// Speed in nanoseconds, 0 when unknown
    pub speed: u8,
    pub error_correction_type: u8,
    pub system_cache_type: u8,
    pub associativity: u8,
}

impl CacheInfo {
    /// Cache level, 1 for L1
    pub fn level(&self) -> u8 {
        field_u16(self.configuration, 0, 3) as u8 + 1
    }

    pub fn socketed(&self) -> bool {
        bit_u16(self.configuration, 3)
    }

    /// Location (bits 5-6): internal, external, reserved, unknown
    pub fn location(&self) -> u8 {
        field_u16(self.configuration, 5, 2) as u8
    }

    pub fn enabled(&self) -> bool {
        bit_u16(self.configuration, 7)
    }

    /// Operational mode (bits 8-9)
    pub fn mode(&self) -> u8 {
        field_u16(self.configuration, 8, 2) as u8
    }

    pub fn location_label(&self) -> &'static str {
        labels::cache_location(self.location())
    }

    pub fn mode_label(&self) -> &'static str {
        labels::cache_mode(self.mode())
    }

    pub fn cache_type_label(&self) -> &'static str {
        labels::cache_type(self.system_cache_type)
    }

    pub fn associativity_label(&self) -> &'static str {
        labels::cache_associativity(self.associativity)
    }

    pub fn error_correction_label(&self) -> &'static str {
        labels::error_correction_type(self.error_correction_type)
    }
}

/// Pick between the 16-bit size and its 32-bit "size 2" counterpart
///
/// Bit 15 set on the 16-bit field means the value lives in the 32-bit one.
fn cache_size(size: u16, size2: Option<u32>) -> u32 {
    match size2 {
        Some(size2) if bit_u16(size, 15) => size2,
        // Pre-3.1 structures have no size 2 field; bit 15 is granularity there
        _ => u32::from(size & 0x7FFF),
    }
}

pub fn decode(s: &Structure<'_>) -> CacheInfo {
    CacheInfo {
        handle: s.handle(),
        socket_designation: s.string(0x04),
        configuration: s.word(0x05),
        maximum_size: cache_size(s.word(0x07), s.dword_opt(0x13)),
        installed_size: cache_size(s.word(0x09), s.dword_opt(0x17)),
        supported_sram_type: s.word(0x0B),
        current_sram_type: s.word(0x0D),
        speed: s.byte(0x0F),
        error_correction_type: s.byte(0x10),
        system_cache_type: s.byte(0x11),
        associativity: s.byte(0x12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::CACHE_INFORMATION;

    #[test]
    fn test_decode_cache() {
        // L2, internal, enabled, write back
        let fields = Fields::new(0x1B)
            .u8(0x04, 1)
            .u16(0x05, 0x0181)
            .u16(0x07, 0x0200)
            .u16(0x09, 0x0100)
            .u16(0x0B, 0x0020)
            .u16(0x0D, 0x0020)
            .u8(0x10, 0x05)
            .u8(0x11, 0x05)
            .u8(0x12, 0x07);

        with_structure(CACHE_INFORMATION, &fields, &["L2 Cache"], |s| {
            let cache = decode(s);
            assert_eq!(cache.socket_designation, "L2 Cache");
            assert_eq!(cache.level(), 2);
            assert!(!cache.socketed());
            assert!(cache.enabled());
            assert_eq!(cache.location_label(), "Internal");
            assert_eq!(cache.mode_label(), "Write Back");
            assert_eq!(cache.maximum_size, 0x0200);
            assert_eq!(cache.installed_size, 0x0100);
            assert_eq!(cache.cache_type_label(), "Unified");
            assert_eq!(cache.associativity_label(), "8-way Set-Associative");
            assert_eq!(cache.error_correction_label(), "Single-bit ECC");
        });
    }

    #[test]
    fn test_size_bit15_switch() {
        let fields = Fields::new(0x1B)
            .u16(0x07, 0x8000 | 0x0040)
            .u16(0x09, 0x0040)
            .u32(0x13, 0x0001_0000)
            .u32(0x17, 0x0002_0000);

        with_structure(CACHE_INFORMATION, &fields, &[], |s| {
            let cache = decode(s);
            assert_eq!(cache.maximum_size, 0x0001_0000);
            // Bit 15 clear: the 32-bit installed field is ignored
            assert_eq!(cache.installed_size, 0x0040);
        });

        let fields = Fields::new(0x1B)
            .u16(0x07, 0x0040)
            .u16(0x09, 0x8000 | 0x0040)
            .u32(0x13, 0x0001_0000)
            .u32(0x17, 0x0002_0000);

        with_structure(CACHE_INFORMATION, &fields, &[], |s| {
            let cache = decode(s);
            assert_eq!(cache.maximum_size, 0x0040);
            assert_eq!(cache.installed_size, 0x0002_0000);
        });
    }

    #[test]
    fn test_pre_3_1_layout() {
        let fields = Fields::new(0x13)
            .u16(0x07, 0x8000 | 0x0010)
            .u16(0x09, 0x8000 | 0x0008);
        with_structure(CACHE_INFORMATION, &fields, &[], |s| {
            let cache = decode(s);
            assert_eq!(cache.maximum_size, 0x0010);
            assert_eq!(cache.installed_size, 0x0008);
        });
    }
}
