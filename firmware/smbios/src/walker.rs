//! Structure table walker
//!
//! Iterates the structure table one structure at a time: header, fixed part,
//! string area. The walker owns no data; it borrows the table and yields
//! [`Structure`] views that decoders read from.

use crate::cursor::ByteCursor;
use crate::strings::StringTable;
use alloc::string::String;
use static_assertions::const_assert_eq;

// =============================================================================
// STRUCTURE TYPES
// =============================================================================

/// SMBIOS structure types with a decoder, plus the table markers
pub mod structure_type {
    pub const BIOS_INFORMATION: u8 = 0;
    pub const SYSTEM_INFORMATION: u8 = 1;
    pub const BASEBOARD_INFORMATION: u8 = 2;
    pub const SYSTEM_ENCLOSURE: u8 = 3;
    pub const PROCESSOR_INFORMATION: u8 = 4;
    pub const CACHE_INFORMATION: u8 = 7;
    pub const PORT_CONNECTOR: u8 = 8;
    pub const SYSTEM_SLOTS: u8 = 9;
    pub const ON_BOARD_DEVICES: u8 = 10;
    pub const OEM_STRINGS: u8 = 11;
    pub const SYSTEM_CONFIG_OPTIONS: u8 = 12;
    pub const PHYSICAL_MEMORY_ARRAY: u8 = 16;
    pub const MEMORY_DEVICE: u8 = 17;
    pub const PORTABLE_BATTERY: u8 = 22;
    pub const VOLTAGE_PROBE: u8 = 26;
    pub const COOLING_DEVICE: u8 = 27;
    pub const TEMPERATURE_PROBE: u8 = 28;
    pub const ELECTRICAL_CURRENT_PROBE: u8 = 29;

    /// Disabled structure left in place by firmware
    pub const INACTIVE: u8 = 126;
    pub const END_OF_TABLE: u8 = 127;
}

// =============================================================================
// STRUCTURE HEADER
// =============================================================================

/// SMBIOS structure header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHeader {
    /// Structure type
    pub kind: u8,
    /// Length of the fixed part, header included
    pub length: u8,
    /// Handle
    pub handle: u16,
}

impl StructureHeader {
    /// Size
    pub const SIZE: usize = 4;

    /// Read a header at `offset`
    pub fn read(cursor: &ByteCursor<'_>, offset: usize) -> Option<Self> {
        Some(Self {
            kind: cursor.read_u8(offset).ok()?,
            length: cursor.read_u8(offset + 1).ok()?,
            handle: cursor.read_u16(offset + 2).ok()?,
        })
    }
}

const_assert_eq!(StructureHeader::SIZE, 4);

// =============================================================================
// STRUCTURE VIEW
// =============================================================================

/// One structure: header, fixed part and string area
///
/// Field accessors take offsets relative to the structure start (the same
/// offsets the SMBIOS reference uses). A field that lies beyond the declared
/// length reads as zero, which also makes its string resolve to
/// [`crate::strings::NOT_SPECIFIED`]. Older firmware emits shorter structures
/// and that is how their missing fields are reported.
#[derive(Debug, Clone, Copy)]
pub struct Structure<'a> {
    /// Header
    pub header: StructureHeader,
    /// Offset of the structure inside the table
    pub offset: usize,
    fixed: ByteCursor<'a>,
    strings: StringTable<'a>,
}

impl<'a> Structure<'a> {
    /// Build a view from the fixed part and its string area
    pub fn new(header: StructureHeader, offset: usize, fixed: &'a [u8], strings: &'a [u8]) -> Self {
        Self {
            header,
            offset,
            fixed: ByteCursor::new(fixed),
            strings: StringTable::new(strings),
        }
    }

    /// Structure type
    pub fn kind(&self) -> u8 {
        self.header.kind
    }

    /// Handle
    pub fn handle(&self) -> u16 {
        self.header.handle
    }

    /// Fixed-part bytes, header included
    pub fn fixed_bytes(&self) -> &'a [u8] {
        self.fixed.as_bytes()
    }

    /// String area
    pub fn strings(&self) -> StringTable<'a> {
        self.strings
    }

    /// Does the fixed part cover `width` bytes at `offset`
    pub fn has(&self, offset: usize, width: usize) -> bool {
        offset
            .checked_add(width)
            .is_some_and(|end| end <= self.fixed.len())
    }

    /// Byte field, zero when absent
    pub fn byte(&self, offset: usize) -> u8 {
        self.fixed.read_u8(offset).unwrap_or(0)
    }

    /// Word field, zero when absent
    pub fn word(&self, offset: usize) -> u16 {
        self.fixed.read_u16(offset).unwrap_or(0)
    }

    /// Dword field, zero when absent
    pub fn dword(&self, offset: usize) -> u32 {
        self.fixed.read_u32(offset).unwrap_or(0)
    }

    /// Qword field, zero when absent
    pub fn qword(&self, offset: usize) -> u64 {
        self.fixed.read_u64(offset).unwrap_or(0)
    }

    /// Word field, `None` when absent
    pub fn word_opt(&self, offset: usize) -> Option<u16> {
        self.fixed.read_u16(offset).ok()
    }

    /// Dword field, `None` when the structure is too short for it
    pub fn dword_opt(&self, offset: usize) -> Option<u32> {
        self.fixed.read_u32(offset).ok()
    }

    /// Byte array field, zeroed when absent
    pub fn bytes<const N: usize>(&self, offset: usize) -> [u8; N] {
        self.fixed.read_bytes(offset).unwrap_or([0; N])
    }

    /// Resolve the string whose index is stored in the byte at `offset`
    pub fn string(&self, offset: usize) -> String {
        self.strings.resolve(self.byte(offset))
    }
}

// =============================================================================
// WALKER
// =============================================================================

/// How a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// End-of-table structure reached
    EndOfTable,
    /// Buffer consumed exactly, no end-of-table marker
    Exhausted,
    /// A structure could not be read in full
    Truncated {
        /// Offset of the offending structure
        offset: usize,
    },
}

impl WalkEnd {
    /// Did the walk stop before the table was read in full
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Scanning { offset: usize },
    Done(WalkEnd),
}

/// Lazy iterator over the structures of a table
#[derive(Debug, Clone)]
pub struct StructureWalker<'a> {
    cursor: ByteCursor<'a>,
    state: WalkState,
}

impl<'a> StructureWalker<'a> {
    /// Walk the structure table in `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            state: WalkState::Scanning { offset: 0 },
        }
    }

    /// How the walk ended, `None` while it is still running
    pub fn end(&self) -> Option<WalkEnd> {
        match self.state {
            WalkState::Scanning { .. } => None,
            WalkState::Done(end) => Some(end),
        }
    }

    fn finish(&mut self, end: WalkEnd) -> Option<Structure<'a>> {
        if let WalkEnd::Truncated { offset } = end {
            log::warn!("SMBIOS table truncated at offset {:#x}", offset);
        }
        self.state = WalkState::Done(end);
        None
    }

    /// Offset of the byte after the double NUL closing the area at `start`
    fn string_area_end(&self, start: usize) -> Option<usize> {
        let area = self.cursor.tail(start).ok()?;
        area.windows(2)
            .position(|pair| pair == [0, 0])
            .map(|pos| start + pos + 2)
    }
}

impl<'a> Iterator for StructureWalker<'a> {
    type Item = Structure<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = match self.state {
            WalkState::Scanning { offset } => offset,
            WalkState::Done(_) => return None,
        };

        let remaining = self.cursor.len().saturating_sub(offset);
        if remaining == 0 {
            return self.finish(WalkEnd::Exhausted);
        }

        let Some(header) = StructureHeader::read(&self.cursor, offset) else {
            return self.finish(WalkEnd::Truncated { offset });
        };

        if header.kind == structure_type::END_OF_TABLE {
            return self.finish(WalkEnd::EndOfTable);
        }

        let length = usize::from(header.length);
        if length < StructureHeader::SIZE {
            log::warn!(
                "SMBIOS structure type {} at {:#x} declares length {}",
                header.kind,
                offset,
                length
            );
            return self.finish(WalkEnd::Truncated { offset });
        }

        let Ok(fixed) = self.cursor.slice(offset, length) else {
            return self.finish(WalkEnd::Truncated { offset });
        };

        let strings_start = offset + length;
        let strings = self.cursor.tail(strings_start).unwrap_or(&[]);

        #[cfg(feature = "trace-walk")]
        log::trace!(
            "SMBIOS structure type={} length={} handle={:#06x} at {:#x}",
            header.kind,
            header.length,
            header.handle,
            offset
        );

        self.state = match self.string_area_end(strings_start) {
            Some(next) => WalkState::Scanning { offset: next },
            None => {
                log::warn!(
                    "SMBIOS structure handle {:#06x} has no string area terminator",
                    header.handle
                );
                WalkState::Done(WalkEnd::Truncated { offset })
            }
        };

        Some(Structure::new(header, offset, fixed, strings))
    }
}

// =============================================================================
// TESTS
// =============================================================================
