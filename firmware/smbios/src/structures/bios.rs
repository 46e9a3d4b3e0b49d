//! BIOS Information (type 0)

use crate::bits::{bit_u8, field_u16};
use crate::walker::Structure;
use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// BIOS characteristics qword (offset 0x0A)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BiosCharacteristics: u64 {
        const NOT_SUPPORTED = 1 << 3;
        const ISA = 1 << 4;
        const MCA = 1 << 5;
        const EISA = 1 << 6;
        const PCI = 1 << 7;
        const PCMCIA = 1 << 8;
        const PLUG_AND_PLAY = 1 << 9;
        const APM = 1 << 10;
        const UPGRADEABLE = 1 << 11;
        const SHADOWING = 1 << 12;
        const VL_VESA = 1 << 13;
        const ESCD = 1 << 14;
        const BOOT_FROM_CD = 1 << 15;
        const SELECTABLE_BOOT = 1 << 16;
        const ROM_SOCKETED = 1 << 17;
        const BOOT_FROM_PCMCIA = 1 << 18;
        const EDD = 1 << 19;
        const PRINT_SCREEN = 1 << 24;
        const KEYBOARD_8042 = 1 << 25;
        const SERIAL = 1 << 26;
        const PRINTER = 1 << 27;
        const CGA_MONO_VIDEO = 1 << 28;
        const NEC_PC98 = 1 << 29;
    }
}

/// Decoded BIOS Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiosInfo {
    pub handle: u16,
    pub vendor: String,
    pub version: String,
    pub release_date: String,
    pub starting_segment: u16,
    /// Raw ROM size code, `64K * (n + 1)`
    pub rom_size: u8,
    pub characteristics: BiosCharacteristics,
    /// Characteristics extension bytes 1 and 2 (2.4+)
    pub characteristics_ext: [u8; 2],
    pub major_release: u8,
    pub minor_release: u8,
    pub ec_major_release: u8,
    pub ec_minor_release: u8,
    /// Extended ROM size word (3.1+), bits 14-15 are the unit
    pub extended_rom_size: u16,
}

impl BiosInfo {
    /// ROM size in KB
    pub fn rom_size_kb(&self) -> u64 {
        if self.rom_size == 0xFF && self.extended_rom_size != 0 {
            let size = u64::from(field_u16(self.extended_rom_size, 0, 14));
            match field_u16(self.extended_rom_size, 14, 2) {
                0 => return size * 1024,
                1 => return size * 1024 * 1024,
                _ => {}
            }
        }
        (u64::from(self.rom_size) + 1) * 64
    }

    /// ACPI supported (extension byte 1, bit 0)
    pub fn acpi(&self) -> bool {
        bit_u8(self.characteristics_ext[0], 0)
    }

    /// UEFI specification supported (extension byte 2, bit 3)
    pub fn uefi(&self) -> bool {
        bit_u8(self.characteristics_ext[1], 3)
    }

    /// Firmware running inside a virtual machine (extension byte 2, bit 4)
    pub fn virtual_machine(&self) -> bool {
        bit_u8(self.characteristics_ext[1], 4)
    }
}

pub fn decode(s: &Structure<'_>) -> BiosInfo {
    BiosInfo {
        handle: s.handle(),
        vendor: s.string(0x04),
        version: s.string(0x05),
        starting_segment: s.word(0x06),
        release_date: s.string(0x08),
        rom_size: s.byte(0x09),
        characteristics: BiosCharacteristics::from_bits_retain(s.qword(0x0A)),
        characteristics_ext: s.bytes(0x12),
        major_release: s.byte(0x14),
        minor_release: s.byte(0x15),
        ec_major_release: s.byte(0x16),
        ec_minor_release: s.byte(0x17),
        extended_rom_size: s.word(0x18),
    }
}
