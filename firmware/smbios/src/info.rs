//! Decoded SMBIOS inventory
//!
//! [`SmbiosInfo`] is the aggregate a decode produces. Singleton structures
//! keep the last instance seen; repeatable structures are collected in table
//! order.

use crate::structures::{
    BaseboardInfo, BiosInfo, CacheInfo, CoolingDevice, EnclosureInfo, MemoryDevice, OnboardDevice,
    PhysicalMemoryArray, PortConnector, PortableBattery, ProbeInfo, ProcessorInfo, Record,
    SystemInfo, SystemSlot,
};
use crate::SmbiosVersion;
use alloc::string::String;
use alloc::vec::Vec;

/// Everything decoded from one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmbiosInfo {
    pub version: SmbiosVersion,

    pub bios: Option<BiosInfo>,
    pub system: Option<SystemInfo>,
    pub baseboard: Option<BaseboardInfo>,
    pub enclosure: Option<EnclosureInfo>,
    /// Last physical memory array seen
    pub physical_memory_array: Option<PhysicalMemoryArray>,

    pub memory_arrays: Vec<PhysicalMemoryArray>,
    pub processors: Vec<ProcessorInfo>,
    pub memory_devices: Vec<MemoryDevice>,
    pub caches: Vec<CacheInfo>,
    pub port_connectors: Vec<PortConnector>,
    pub system_slots: Vec<SystemSlot>,
    pub onboard_devices: Vec<OnboardDevice>,
    pub batteries: Vec<PortableBattery>,
    pub voltage_probes: Vec<ProbeInfo>,
    pub temperature_probes: Vec<ProbeInfo>,
    pub current_probes: Vec<ProbeInfo>,
    pub cooling_devices: Vec<CoolingDevice>,
    pub oem_strings: Vec<String>,
    pub config_options: Vec<String>,

    /// Structures visited by the walk, end-of-table marker excluded
    pub structure_count: usize,
    /// Structures with no registered decoder
    pub skipped_structures: usize,
    /// The table or its prologue was cut short
    pub partial: bool,
}

impl SmbiosInfo {
    /// Empty inventory for a table of `version`
    pub fn new(version: SmbiosVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Fold one decoded record in
    pub fn absorb(&mut self, record: Record) {
        match record {
            Record::Bios(bios) => self.bios = Some(bios),
            Record::System(system) => self.system = Some(system),
            Record::Baseboard(board) => self.baseboard = Some(board),
            Record::Enclosure(chassis) => self.enclosure = Some(chassis),
            Record::MemoryArray(array) => {
                self.physical_memory_array = Some(array.clone());
                self.memory_arrays.push(array);
            }
            Record::Processor(cpu) => self.processors.push(cpu),
            Record::Cache(cache) => self.caches.push(cache),
            Record::PortConnector(port) => self.port_connectors.push(port),
            Record::SystemSlot(slot) => self.system_slots.push(slot),
            Record::OnboardDevices(devices) => self.onboard_devices.extend(devices),
            Record::OemStrings(strings) => self.oem_strings.extend(strings),
            Record::ConfigOptions(options) => self.config_options.extend(options),
            Record::MemoryDevice(dimm) => self.memory_devices.push(dimm),
            Record::Battery(battery) => self.batteries.push(battery),
            Record::VoltageProbe(probe) => self.voltage_probes.push(probe),
            Record::CoolingDevice(fan) => self.cooling_devices.push(fan),
            Record::TemperatureProbe(probe) => self.temperature_probes.push(probe),
            Record::CurrentProbe(probe) => self.current_probes.push(probe),
        }
    }

    /// Total installed memory in MB
    pub fn total_memory_mb(&self) -> u64 {
        self.memory_devices
            .iter()
            .map(|dimm| u64::from(dimm.size_mb))
            .sum()
    }

    /// Populated processor sockets
    pub fn cpu_count(&self) -> usize {
        self.processors.iter().filter(|cpu| cpu.is_populated()).count()
    }

    /// Total cores across populated sockets
    pub fn total_cores(&self) -> u32 {
        self.processors
            .iter()
            .filter(|cpu| cpu.is_populated())
            .map(|cpu| u32::from(cpu.core_count))
            .sum()
    }

    /// Total threads across populated sockets
    pub fn total_threads(&self) -> u32 {
        self.processors
            .iter()
            .filter(|cpu| cpu.is_populated())
            .map(|cpu| u32::from(cpu.thread_count))
            .sum()
    }

    /// Cache structure referenced by a processor's cache handle
    pub fn cache_by_handle(&self, handle: u16) -> Option<&CacheInfo> {
        self.caches.iter().find(|cache| cache.handle == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{bios, cache, memory, processor};
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::{
        BIOS_INFORMATION, CACHE_INFORMATION, MEMORY_DEVICE, PHYSICAL_MEMORY_ARRAY,
        PROCESSOR_INFORMATION,
    };

    fn cpu(status: u8, cores: u8, threads: u8) -> ProcessorInfo {
        let fields = Fields::new(0x28)
            .u8(0x18, status)
            .u16(0x1C, 0x0100)
            .u8(0x23, cores)
            .u8(0x25, threads);
        with_structure(PROCESSOR_INFORMATION, &fields, &[], processor::decode)
    }

    fn dimm(size: u16) -> MemoryDevice {
        let fields = Fields::new(0x1C).u16(0x0C, size);
        with_structure(MEMORY_DEVICE, &fields, &[], memory::decode_device).unwrap()
    }

    #[test]
    fn test_aggregate_helpers() {
        let mut info = SmbiosInfo::new(SmbiosVersion::new(3, 4));
        info.absorb(Record::Processor(cpu(0x41, 8, 16)));
        info.absorb(Record::Processor(cpu(0x41, 8, 16)));
        info.absorb(Record::Processor(cpu(0x00, 8, 16)));
        info.absorb(Record::MemoryDevice(dimm(8192)));
        info.absorb(Record::MemoryDevice(dimm(0xFFFF)));
        info.absorb(Record::MemoryDevice(dimm(8192)));

        assert_eq!(info.cpu_count(), 2);
        assert_eq!(info.total_cores(), 16);
        assert_eq!(info.total_threads(), 32);
        assert_eq!(info.total_memory_mb(), 16384);
    }

    #[test]
    fn test_cache_by_handle() {
        let mut info = SmbiosInfo::default();
        let l2 = with_structure(
            CACHE_INFORMATION,
            &Fields::new(0x13).u8(0x04, 1),
            &["L2"],
            cache::decode,
        );
        info.absorb(Record::Cache(l2));
        info.absorb(Record::Processor(cpu(0x41, 4, 4)));

        let handle = info.processors[0].l2_cache_handle;
        let found = info.cache_by_handle(handle).unwrap();
        assert_eq!(found.socket_designation, "L2");
        assert!(info.cache_by_handle(0x0200).is_none());
    }

    #[test]
    fn test_last_singleton_wins() {
        let mut info = SmbiosInfo::default();
        let first = with_structure(
            PHYSICAL_MEMORY_ARRAY,
            &Fields::new(0x0F).u16(0x0D, 2),
            &[],
            memory::decode_array,
        );
        let second = PhysicalMemoryArray {
            number_of_devices: 4,
            ..first.clone()
        };

        info.absorb(Record::MemoryArray(first));
        info.absorb(Record::MemoryArray(second));

        assert_eq!(info.physical_memory_array.as_ref().unwrap().number_of_devices, 4);
        assert_eq!(info.memory_arrays.len(), 2);
        assert_eq!(info.memory_arrays[0].number_of_devices, 2);

        for vendor in ["First", "Second"] {
            let fields = Fields::new(0x12).u8(0x04, 1);
            let bios = with_structure(BIOS_INFORMATION, &fields, &[vendor], bios::decode);
            info.absorb(Record::Bios(bios));
        }
        assert_eq!(info.bios.as_ref().unwrap().vendor, "Second");
    }
}
