//! Code → label lookup tables
//!
//! Each table is a `static` slice of `(code, label)` pairs, read-only for the
//! life of the process. Lookups never fail: a code with no entry yields
//! [`UNKNOWN`].

/// Label for codes missing from a table
pub const UNKNOWN: &str = "Unknown";

type LabelTable = [(u8, &'static str)];

fn lookup(table: &'static LabelTable, code: u8) -> &'static str {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(UNKNOWN, |&(_, label)| label)
}

// =============================================================================
// MEMORY
// =============================================================================

static MEMORY_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "DRAM"), (0x04, "EDRAM"),
    (0x05, "VRAM"), (0x06, "SRAM"), (0x07, "RAM"), (0x08, "ROM"),
    (0x09, "FLASH"), (0x0A, "EEPROM"), (0x0B, "FEPROM"), (0x0C, "EPROM"),
    (0x0D, "CDRAM"), (0x0E, "3DRAM"), (0x0F, "SDRAM"), (0x10, "SGRAM"),
    (0x11, "RDRAM"), (0x12, "DDR"), (0x13, "DDR2"), (0x14, "DDR2 FB-DIMM"),
    (0x18, "DDR3"), (0x19, "FBD2"), (0x1A, "DDR4"), (0x1B, "LPDDR"),
    (0x1C, "LPDDR2"), (0x1D, "LPDDR3"), (0x1E, "LPDDR4"),
    (0x1F, "Logical non-volatile device"), (0x20, "HBM"), (0x21, "HBM2"),
    (0x22, "DDR5"), (0x23, "LPDDR5"),
];

static FORM_FACTORS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "SIMM"), (0x04, "SIP"),
    (0x05, "Chip"), (0x06, "DIP"), (0x07, "ZIP"), (0x08, "Proprietary Card"),
    (0x09, "DIMM"), (0x0A, "TSOP"), (0x0B, "Row of chips"), (0x0C, "RIMM"),
    (0x0D, "SODIMM"), (0x0E, "SRIMM"), (0x0F, "FB-DIMM"), (0x10, "Die"),
];

static MEMORY_ARRAY_LOCATIONS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "System board or motherboard"),
    (0x04, "ISA add-on card"), (0x05, "EISA add-on card"), (0x06, "PCI add-on card"),
    (0x07, "MCA add-on card"), (0x08, "PCMCIA add-on card"),
    (0x09, "Proprietary add-on card"), (0x0A, "NuBus"), (0xA0, "PC-98/C20 add-on card"),
    (0xA1, "PC-98/C24 add-on card"), (0xA2, "PC-98/E add-on card"),
    (0xA3, "PC-98/Local bus add-on card"), (0xA4, "CXL add-on card"),
];

static MEMORY_ARRAY_USES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "System memory"),
    (0x04, "Video memory"), (0x05, "Flash memory"), (0x06, "Non-volatile RAM"),
    (0x07, "Cache memory"),
];

static MEMORY_ERROR_CORRECTIONS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "None"), (0x04, "Parity"),
    (0x05, "Single-bit ECC"), (0x06, "Multi-bit ECC"), (0x07, "CRC"),
];

/// Memory device type (type 17, offset 0x12)
pub fn memory_type(code: u8) -> &'static str {
    lookup(MEMORY_TYPES, code)
}

/// Memory device form factor (type 17, offset 0x0E)
pub fn form_factor(code: u8) -> &'static str {
    lookup(FORM_FACTORS, code)
}

/// Physical memory array location (type 16, offset 0x04)
pub fn memory_array_location(code: u8) -> &'static str {
    lookup(MEMORY_ARRAY_LOCATIONS, code)
}

/// Physical memory array use (type 16, offset 0x05)
pub fn memory_array_use(code: u8) -> &'static str {
    lookup(MEMORY_ARRAY_USES, code)
}

/// Physical memory array error correction (type 16, offset 0x06)
pub fn memory_error_correction(code: u8) -> &'static str {
    lookup(MEMORY_ERROR_CORRECTIONS, code)
}

// =============================================================================
// PROCESSOR & CACHE
// =============================================================================

static PROCESSOR_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Central Processor"),
    (0x04, "Math Processor"), (0x05, "DSP Processor"), (0x06, "Video Processor"),
];

static CACHE_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Instruction"), (0x04, "Data"),
    (0x05, "Unified"),
];

static CACHE_ASSOCIATIVITIES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Direct Mapped"),
    (0x04, "2-way Set-Associative"), (0x05, "4-way Set-Associative"),
    (0x06, "Fully Associative"), (0x07, "8-way Set-Associative"),
    (0x08, "16-way Set-Associative"), (0x09, "12-way Set-Associative"),
    (0x0A, "24-way Set-Associative"), (0x0B, "32-way Set-Associative"),
    (0x0C, "48-way Set-Associative"), (0x0D, "64-way Set-Associative"),
    (0x0E, "20-way Set-Associative"),
];

static ERROR_CORRECTION_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "None"), (0x04, "Parity"),
    (0x05, "Single-bit ECC"), (0x06, "Multi-bit ECC"),
];

static CACHE_LOCATIONS: &LabelTable = &[
    (0x00, "Internal"), (0x01, "External"), (0x02, "Reserved"), (0x03, "Unknown"),
];

static CACHE_MODES: &LabelTable = &[
    (0x00, "Write Through"), (0x01, "Write Back"),
    (0x02, "Varies With Memory Address"), (0x03, "Unknown"),
];

/// Processor type (type 4, offset 0x05)
pub fn processor_type(code: u8) -> &'static str {
    lookup(PROCESSOR_TYPES, code)
}

/// System cache type (type 7, offset 0x11)
pub fn cache_type(code: u8) -> &'static str {
    lookup(CACHE_TYPES, code)
}

/// Cache associativity (type 7, offset 0x12)
pub fn cache_associativity(code: u8) -> &'static str {
    lookup(CACHE_ASSOCIATIVITIES, code)
}

/// Cache error correction type (type 7, offset 0x10)
pub fn error_correction_type(code: u8) -> &'static str {
    lookup(ERROR_CORRECTION_TYPES, code)
}

/// Cache location, bits 5-6 of the cache configuration word
pub fn cache_location(code: u8) -> &'static str {
    lookup(CACHE_LOCATIONS, code)
}

/// Cache operational mode, bits 8-9 of the cache configuration word
pub fn cache_mode(code: u8) -> &'static str {
    lookup(CACHE_MODES, code)
}

// =============================================================================
// SYSTEM, BOARD & CHASSIS
// =============================================================================

static WAKE_UP_TYPES: &LabelTable = &[
    (0x00, "Reserved"), (0x01, "Other"), (0x02, "Unknown"), (0x03, "APM Timer"),
    (0x04, "Modem Ring"), (0x05, "LAN Remote"), (0x06, "Power Switch"),
    (0x07, "PCI PME#"), (0x08, "AC Power Restored"),
];

static BOARD_TYPES: &LabelTable = &[
    (0x01, "Unknown"), (0x02, "Other"), (0x03, "Server Blade"),
    (0x04, "Connectivity Switch"), (0x05, "System Management Module"),
    (0x06, "Processor Module"), (0x07, "I/O Module"), (0x08, "Memory Module"),
    (0x09, "Daughter board"), (0x0A, "Motherboard"),
    (0x0B, "Processor/Memory Module"), (0x0C, "Processor/IO Module"),
    (0x0D, "Interconnect board"),
];

static CHASSIS_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Desktop"), (0x04, "Low Profile Desktop"),
    (0x05, "Pizza Box"), (0x06, "Mini Tower"), (0x07, "Tower"), (0x08, "Portable"),
    (0x09, "Laptop"), (0x0A, "Notebook"), (0x0B, "Hand Held"), (0x0C, "Docking Station"),
    (0x0D, "All In One"), (0x0E, "Sub Notebook"), (0x0F, "Space-saving"),
    (0x10, "Lunch Box"), (0x11, "Main Server Chassis"), (0x12, "Expansion Chassis"),
    (0x13, "Sub Chassis"), (0x14, "Bus Expansion Chassis"), (0x15, "Peripheral Chassis"),
    (0x16, "RAID Chassis"), (0x17, "Rack Mount Chassis"), (0x18, "Sealed-case PC"),
    (0x19, "Multi-system Chassis"), (0x1A, "Compact PCI"), (0x1B, "Advanced TCA"),
    (0x1C, "Blade"), (0x1D, "Blade Enclosure"), (0x1E, "Tablet"), (0x1F, "Convertible"),
    (0x20, "Detachable"), (0x21, "IoT Gateway"), (0x22, "Embedded PC"), (0x23, "Mini PC"),
    (0x24, "Stick PC"),
];

static CHASSIS_STATES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Safe"), (0x04, "Warning"),
    (0x05, "Critical"), (0x06, "Non-recoverable"),
];

static SECURITY_STATUSES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "None"),
    (0x04, "External interface locked out"), (0x05, "External interface enabled"),
];

/// System wake-up type (type 1, offset 0x18)
pub fn wake_up_type(code: u8) -> &'static str {
    lookup(WAKE_UP_TYPES, code)
}

/// Baseboard type (type 2, offset 0x0D)
pub fn board_type(code: u8) -> &'static str {
    lookup(BOARD_TYPES, code)
}

/// Chassis type (type 3, offset 0x05); bit 7 (lock present) is ignored
pub fn chassis_type(code: u8) -> &'static str {
    lookup(CHASSIS_TYPES, code & 0x7F)
}

/// Chassis boot-up, power supply or thermal state
pub fn chassis_state(code: u8) -> &'static str {
    lookup(CHASSIS_STATES, code)
}

/// Chassis security status (type 3, offset 0x0C)
pub fn security_status(code: u8) -> &'static str {
    lookup(SECURITY_STATUSES, code)
}

// =============================================================================
// SLOTS, PORTS & ON-BOARD DEVICES
// =============================================================================

static SLOT_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "ISA"), (0x04, "MCA"), (0x05, "EISA"),
    (0x06, "PCI"), (0x07, "PC Card (PCMCIA)"), (0x08, "VL-VESA"), (0x09, "Proprietary"),
    (0x0A, "Processor Card Slot"), (0x0B, "Proprietary Memory Card Slot"),
    (0x0C, "I/O Riser Card Slot"), (0x0D, "NuBus"), (0x0E, "PCI - 66MHz Capable"),
    (0x0F, "AGP"), (0x10, "AGP 2X"), (0x11, "AGP 4X"), (0x12, "PCI-X"),
    (0x13, "AGP 8X"), (0x14, "M.2 Socket 1-DP"), (0x15, "M.2 Socket 1-SD"),
    (0x16, "M.2 Socket 2"), (0x17, "M.2 Socket 3"), (0x18, "MXM Type I"),
    (0x19, "MXM Type II"), (0x1A, "MXM Type III (standard connector)"),
    (0x1B, "MXM Type III (HE connector)"), (0x1C, "MXM Type IV"),
    (0x1D, "MXM 3.0 Type A"), (0x1E, "MXM 3.0 Type B"),
    (0x1F, "PCI Express Gen 2 SFF-8639"), (0x20, "PCI Express Gen 3 SFF-8639"),
    (0x21, "PCI Express Mini 52-pin (CEM spec)"),
    (0x22, "PCI Express Mini 52-pin (CEM spec) without BSM"),
    (0x23, "PCI Express Mini 76-pin (CEM spec)"),
    (0xA1, "PC-98/C20"), (0xA2, "PC-98/C24"), (0xA3, "PC-98/E"), (0xA4, "PC-98/Local Bus"),
    (0xA5, "PC-98/Card"), (0xA6, "PCI Express"), (0xA7, "PCI Express x1"),
    (0xA8, "PCI Express x2"), (0xA9, "PCI Express x4"), (0xAA, "PCI Express x8"),
    (0xAB, "PCI Express x16"), (0xAC, "PCI Express Gen 2"), (0xAD, "PCI Express Gen 2 x1"),
    (0xAE, "PCI Express Gen 2 x2"), (0xAF, "PCI Express Gen 2 x4"),
    (0xB0, "PCI Express Gen 2 x8"), (0xB1, "PCI Express Gen 2 x16"),
    (0xB2, "PCI Express Gen 3"), (0xB3, "PCI Express Gen 3 x1"),
    (0xB4, "PCI Express Gen 3 x2"), (0xB5, "PCI Express Gen 3 x4"),
    (0xB6, "PCI Express Gen 3 x8"), (0xB7, "PCI Express Gen 3 x16"),
    (0xB8, "PCI Express Gen 4"), (0xB9, "PCI Express Gen 4 x1"),
    (0xBA, "PCI Express Gen 4 x2"), (0xBB, "PCI Express Gen 4 x4"),
    (0xBC, "PCI Express Gen 4 x8"), (0xBD, "PCI Express Gen 4 x16"),
    (0xBE, "PCI Express Gen 5"), (0xBF, "PCI Express Gen 5 x1"),
    (0xC0, "PCI Express Gen 5 x2"), (0xC1, "PCI Express Gen 5 x4"),
    (0xC2, "PCI Express Gen 5 x8"), (0xC3, "PCI Express Gen 5 x16"),
];

static SLOT_USAGES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Available"), (0x04, "In use"),
    (0x05, "Unavailable"),
];

static SLOT_LENGTHS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Short"), (0x04, "Long"),
    (0x05, "2.5\" drive form factor"), (0x06, "3.5\" drive form factor"),
];

static SLOT_BUS_WIDTHS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "8 bit"), (0x04, "16 bit"),
    (0x05, "32 bit"), (0x06, "64 bit"), (0x07, "128 bit"), (0x08, "x1"),
    (0x09, "x2"), (0x0A, "x4"), (0x0B, "x8"), (0x0C, "x12"), (0x0D, "x16"),
    (0x0E, "x32"),
];

static CONNECTOR_TYPES: &LabelTable = &[
    (0x00, "None"), (0x01, "Centronics"), (0x02, "Mini Centronics"), (0x03, "Proprietary"),
    (0x04, "DB-25 pin male"), (0x05, "DB-25 pin female"), (0x06, "DB-15 pin male"),
    (0x07, "DB-15 pin female"), (0x08, "DB-9 pin male"), (0x09, "DB-9 pin female"),
    (0x0A, "RJ-11"), (0x0B, "RJ-45"), (0x0C, "50-pin MiniSCSI"), (0x0D, "Mini-DIN"),
    (0x0E, "Micro-DIN"), (0x0F, "PS/2"), (0x10, "Infrared"), (0x11, "HP-HIL"),
    (0x12, "Access Bus (USB)"), (0x13, "SSA SCSI"), (0x14, "Circular DIN-8 male"),
    (0x15, "Circular DIN-8 female"), (0x16, "On Board IDE"), (0x17, "On Board Floppy"),
    (0x18, "9-pin Dual Inline (pin 10 cut)"), (0x19, "25-pin Dual Inline (pin 26 cut)"),
    (0x1A, "50-pin Dual Inline"), (0x1B, "68-pin Dual Inline"),
    (0x1C, "On Board Sound Input from CD-ROM"), (0x1D, "Mini-Centronics Type-14"),
    (0x1E, "Mini-Centronics Type-26"), (0x1F, "Mini-jack (headphones)"),
    (0x20, "BNC"), (0x21, "1394"), (0x22, "SAS/SATA Plug Receptacle"),
    (0x23, "USB Type-C Receptacle"), (0xA0, "PC-98"), (0xA1, "PC-98Hireso"),
    (0xA2, "PC-H98"), (0xA3, "PC-98Note"), (0xA4, "PC-98Full"),
];

static PORT_TYPES: &LabelTable = &[
    (0x00, "None"), (0x01, "Parallel Port XT/AT Compatible"), (0x02, "Parallel Port PS/2"),
    (0x03, "Parallel Port ECP"), (0x04, "Parallel Port EPP"), (0x05, "Parallel Port ECP/EPP"),
    (0x06, "Serial Port XT/AT Compatible"), (0x07, "Serial Port 16450 Compatible"),
    (0x08, "Serial Port 16550 Compatible"), (0x09, "Serial Port 16550A Compatible"),
    (0x0A, "SCSI Port"), (0x0B, "MIDI Port"), (0x0C, "Joy Stick Port"), (0x0D, "Keyboard Port"),
    (0x0E, "Mouse Port"), (0x0F, "SSA SCSI"), (0x10, "USB"), (0x11, "FireWire (IEEE P1394)"),
    (0x12, "PCMCIA Type I"), (0x13, "PCMCIA Type II"), (0x14, "PCMCIA Type III"),
    (0x15, "Cardbus"), (0x16, "Access Bus Port"), (0x17, "SCSI II"), (0x18, "SCSI Wide"),
    (0x19, "PC-98"), (0x1A, "PC-98-Hireso"), (0x1B, "PC-H98"), (0x1C, "Video Port"),
    (0x1D, "Audio Port"), (0x1E, "Modem Port"), (0x1F, "Network Port"), (0x20, "SATA"),
    (0x21, "SAS"), (0x22, "MFDP (Multi-Function Display Port)"), (0x23, "Thunderbolt"),
];

static ONBOARD_DEVICE_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Video"), (0x04, "SCSI Controller"),
    (0x05, "Ethernet"), (0x06, "Token Ring"), (0x07, "Sound"), (0x08, "PATA Controller"),
    (0x09, "SATA Controller"), (0x0A, "SAS Controller"),
];

/// System slot type (type 9, offset 0x05)
pub fn slot_type(code: u8) -> &'static str {
    lookup(SLOT_TYPES, code)
}

/// System slot current usage (type 9, offset 0x07)
pub fn slot_usage(code: u8) -> &'static str {
    lookup(SLOT_USAGES, code)
}

/// System slot length (type 9, offset 0x08)
pub fn slot_length(code: u8) -> &'static str {
    lookup(SLOT_LENGTHS, code)
}

/// System slot data bus width (type 9, offset 0x06)
pub fn slot_data_bus_width(code: u8) -> &'static str {
    lookup(SLOT_BUS_WIDTHS, code)
}

/// Port connector type (type 8, offsets 0x05 and 0x07)
pub fn connector_type(code: u8) -> &'static str {
    lookup(CONNECTOR_TYPES, code)
}

/// Port type (type 8, offset 0x08)
pub fn port_type(code: u8) -> &'static str {
    lookup(PORT_TYPES, code)
}

/// On-board device type, bits 0-6 of the device type byte (type 10)
pub fn onboard_device_type(code: u8) -> &'static str {
    lookup(ONBOARD_DEVICE_TYPES, code & 0x7F)
}

// =============================================================================
// POWER, PROBES & COOLING
// =============================================================================

static BATTERY_CHEMISTRIES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Lead Acid"), (0x04, "Nickel Cadmium"),
    (0x05, "Nickel Metal Hydride"), (0x06, "Lithium-ion"), (0x07, "Zinc air"),
    (0x08, "Lithium Polymer"),
];

static PROBE_LOCATIONS: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Processor"), (0x04, "Disk"),
    (0x05, "Peripheral Bay"), (0x06, "System Management Module"), (0x07, "Motherboard"),
    (0x08, "Memory Module"), (0x09, "Processor Module"), (0x0A, "Power Unit"),
    (0x0B, "Add-in Card"), (0x0C, "Front Panel Board"), (0x0D, "Back Panel Board"),
    (0x0E, "Power System Board"), (0x0F, "Drive Back Plane"),
];

static DEVICE_STATUSES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "OK"), (0x04, "Non-critical"),
    (0x05, "Critical"), (0x06, "Non-recoverable"),
];

static COOLING_DEVICE_TYPES: &LabelTable = &[
    (0x01, "Other"), (0x02, "Unknown"), (0x03, "Fan"), (0x04, "Centrifugal Blower"),
    (0x05, "Chip Fan"), (0x06, "Cabinet Fan"), (0x07, "Power Supply Fan"),
    (0x08, "Heat Pipe"), (0x09, "Integrated Refrigeration"), (0x10, "Active Cooling"),
    (0x11, "Passive Cooling"),
];

/// Portable battery chemistry (type 22, offset 0x09)
pub fn battery_chemistry(code: u8) -> &'static str {
    lookup(BATTERY_CHEMISTRIES, code)
}

/// Probe location, bits 0-4 of the location-and-status byte
pub fn probe_location(code: u8) -> &'static str {
    lookup(PROBE_LOCATIONS, code)
}

/// Probe or cooling device status, bits 5-7 of the status byte
pub fn device_status(code: u8) -> &'static str {
    lookup(DEVICE_STATUSES, code)
}

/// Cooling device type, bits 0-4 of the type-and-status byte
pub fn cooling_device_type(code: u8) -> &'static str {
    lookup(COOLING_DEVICE_TYPES, code)
}

// =============================================================================
// TESTS
// =============================================================================
