//! Per-type structure decoders
//!
//! Every supported structure type has one module holding its record type and
//! a pure `decode` function over a [`Structure`] view. The registry at the
//! bottom of this file maps a structure type to the function that turns it
//! into a [`Record`]; adding a type is one module plus one registry entry.

pub mod baseboard;
pub mod battery;
pub mod bios;
pub mod cache;
pub mod cooling;
pub mod enclosure;
pub mod memory;
pub mod oem;
pub mod onboard;
pub mod port;
pub mod probe;
pub mod processor;
pub mod slot;
pub mod system;

use crate::walker::{structure_type, Structure};
use alloc::string::String;
use alloc::vec::Vec;

pub use baseboard::{BaseboardFeatures, BaseboardInfo};
pub use battery::PortableBattery;
pub use bios::{BiosCharacteristics, BiosInfo};
pub use cache::CacheInfo;
pub use cooling::CoolingDevice;
pub use enclosure::EnclosureInfo;
pub use memory::{MemoryDevice, PhysicalMemoryArray};
pub use onboard::OnboardDevice;
pub use port::PortConnector;
pub use probe::ProbeInfo;
pub use processor::{ProcessorCharacteristics, ProcessorInfo};
pub use slot::SystemSlot;
pub use system::SystemInfo;

/// One decoded structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Bios(BiosInfo),
    System(SystemInfo),
    Baseboard(BaseboardInfo),
    Enclosure(EnclosureInfo),
    Processor(ProcessorInfo),
    Cache(CacheInfo),
    PortConnector(PortConnector),
    SystemSlot(SystemSlot),
    OnboardDevices(Vec<OnboardDevice>),
    OemStrings(Vec<String>),
    ConfigOptions(Vec<String>),
    MemoryArray(PhysicalMemoryArray),
    MemoryDevice(MemoryDevice),
    Battery(PortableBattery),
    VoltageProbe(ProbeInfo),
    CoolingDevice(CoolingDevice),
    TemperatureProbe(ProbeInfo),
    CurrentProbe(ProbeInfo),
}

/// Decoder signature; `None` means the structure yields no record
pub type DecodeFn = fn(&Structure<'_>) -> Option<Record>;

/// Registry entry
#[derive(Debug, Clone, Copy)]
pub struct DecoderEntry {
    /// Structure type handled
    pub kind: u8,
    /// Decoder
    pub decode: DecodeFn,
}

macro_rules! decoder {
    ($kind:expr => $variant:ident($decode:path)) => {
        DecoderEntry {
            kind: $kind,
            decode: |s| Some(Record::$variant($decode(s))),
        }
    };
    ($kind:expr => $variant:ident($decode:path)?) => {
        DecoderEntry {
            kind: $kind,
            decode: |s| $decode(s).map(Record::$variant),
        }
    };
}

static DECODERS: &[DecoderEntry] = &[
    decoder!(structure_type::BIOS_INFORMATION => Bios(bios::decode)),
    decoder!(structure_type::SYSTEM_INFORMATION => System(system::decode)),
    decoder!(structure_type::BASEBOARD_INFORMATION => Baseboard(baseboard::decode)),
    decoder!(structure_type::SYSTEM_ENCLOSURE => Enclosure(enclosure::decode)),
    decoder!(structure_type::PROCESSOR_INFORMATION => Processor(processor::decode)),
    decoder!(structure_type::CACHE_INFORMATION => Cache(cache::decode)),
    decoder!(structure_type::PORT_CONNECTOR => PortConnector(port::decode)),
    decoder!(structure_type::SYSTEM_SLOTS => SystemSlot(slot::decode)),
    decoder!(structure_type::ON_BOARD_DEVICES => OnboardDevices(onboard::decode)),
    decoder!(structure_type::OEM_STRINGS => OemStrings(oem::decode_strings)),
    decoder!(structure_type::SYSTEM_CONFIG_OPTIONS => ConfigOptions(oem::decode_config_options)),
    decoder!(structure_type::PHYSICAL_MEMORY_ARRAY => MemoryArray(memory::decode_array)),
    decoder!(structure_type::MEMORY_DEVICE => MemoryDevice(memory::decode_device)?),
    decoder!(structure_type::PORTABLE_BATTERY => Battery(battery::decode)),
    decoder!(structure_type::VOLTAGE_PROBE => VoltageProbe(probe::decode)),
    decoder!(structure_type::COOLING_DEVICE => CoolingDevice(cooling::decode)),
    decoder!(structure_type::TEMPERATURE_PROBE => TemperatureProbe(probe::decode)),
    decoder!(structure_type::ELECTRICAL_CURRENT_PROBE => CurrentProbe(probe::decode)),
];

/// All registered decoders
pub fn registry() -> &'static [DecoderEntry] {
    DECODERS
}

/// Decoder registered for a structure type
pub fn decoder_for(kind: u8) -> Option<DecodeFn> {
    DECODERS
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_unique_kinds() {
        for (i, a) in DECODERS.iter().enumerate() {
            for b in &DECODERS[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }

    #[test]
    fn test_decoder_lookup() {
        assert!(decoder_for(structure_type::BIOS_INFORMATION).is_some());
        assert!(decoder_for(structure_type::ELECTRICAL_CURRENT_PROBE).is_some());
        assert!(decoder_for(5).is_none());
        assert!(decoder_for(structure_type::END_OF_TABLE).is_none());
        assert!(decoder_for(0xC8).is_none());
    }
}
