//! SMBIOS entry point parsing
//!
//! The entry point tells where the structure table lives and which version
//! of the specification it follows. Hosts that export the table directly
//! (Linux sysfs) still publish the entry point next to it, and that is where
//! the table version comes from.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::SmbiosVersion;

/// SMBIOS 2.x anchor string
pub const SMBIOS2_ANCHOR: [u8; 4] = *b"_SM_";

/// SMBIOS 3.x anchor string
pub const SMBIOS3_ANCHOR: [u8; 5] = *b"_SM3_";

/// DMI anchor string
pub const DMI_ANCHOR: [u8; 5] = *b"_DMI_";

/// Bytes sum to zero modulo 256
fn checksum_ok(bytes: &[u8]) -> bool {
    bytes.iter().fold(0u8, |a, &b| a.wrapping_add(b)) == 0
}

// =============================================================================
// SMBIOS 2.x
// =============================================================================

/// SMBIOS 2.x entry point (32-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smbios2EntryPoint {
    /// Entry point length
    pub length: u8,
    /// Major version
    pub major_version: u8,
    /// Minor version
    pub minor_version: u8,
    /// Maximum structure size
    pub max_structure_size: u16,
    /// Entry point revision
    pub entry_point_revision: u8,
    /// Structure table length
    pub structure_table_length: u16,
    /// Structure table address
    pub structure_table_address: u32,
    /// Number of structures
    pub number_of_structures: u16,
    /// BCD revision
    pub bcd_revision: u8,
}

impl Smbios2EntryPoint {
    /// Size
    pub const SIZE: usize = 31;

    /// Offset of the intermediate (`_DMI_`) area
    const INTERMEDIATE: usize = 16;

    /// Parse and validate from bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let cursor = ByteCursor::new(bytes);
        if cursor.read_bytes::<4>(0)? != SMBIOS2_ANCHOR {
            return Err(Error::InvalidEntryPoint);
        }

        let length = cursor.read_u8(5)?;
        let whole = cursor.slice(0, usize::from(length).max(Self::SIZE))?;
        let intermediate = cursor.slice(Self::INTERMEDIATE, Self::SIZE - Self::INTERMEDIATE)?;

        if cursor.read_bytes::<5>(Self::INTERMEDIATE)? != DMI_ANCHOR
            || !checksum_ok(whole)
            || !checksum_ok(intermediate)
        {
            return Err(Error::InvalidEntryPoint);
        }

        Ok(Self {
            length,
            major_version: cursor.read_u8(6)?,
            minor_version: cursor.read_u8(7)?,
            max_structure_size: cursor.read_u16(8)?,
            entry_point_revision: cursor.read_u8(10)?,
            structure_table_length: cursor.read_u16(22)?,
            structure_table_address: cursor.read_u32(24)?,
            number_of_structures: cursor.read_u16(28)?,
            bcd_revision: cursor.read_u8(30)?,
        })
    }
}

// =============================================================================
// SMBIOS 3.x
// =============================================================================

/// SMBIOS 3.x entry point (64-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smbios3EntryPoint {
    /// Entry point length
    pub length: u8,
    /// Major version
    pub major_version: u8,
    /// Minor version
    pub minor_version: u8,
    /// Docrev
    pub docrev: u8,
    /// Entry point revision
    pub entry_point_revision: u8,
    /// Maximum structure table size
    pub structure_table_max_size: u32,
    /// Structure table address
    pub structure_table_address: u64,
}

impl Smbios3EntryPoint {
    /// Size
    pub const SIZE: usize = 24;

    /// Parse and validate from bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let cursor = ByteCursor::new(bytes);
        if cursor.read_bytes::<5>(0)? != SMBIOS3_ANCHOR {
            return Err(Error::InvalidEntryPoint);
        }

        let length = cursor.read_u8(6)?;
        if !checksum_ok(cursor.slice(0, usize::from(length).max(Self::SIZE))?) {
            return Err(Error::InvalidEntryPoint);
        }

        Ok(Self {
            length,
            major_version: cursor.read_u8(7)?,
            minor_version: cursor.read_u8(8)?,
            docrev: cursor.read_u8(9)?,
            entry_point_revision: cursor.read_u8(10)?,
            structure_table_max_size: cursor.read_u32(12)?,
            structure_table_address: cursor.read_u64(16)?,
        })
    }
}

// =============================================================================
// EITHER
// =============================================================================

/// A validated entry point of either generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    V2(Smbios2EntryPoint),
    V3(Smbios3EntryPoint),
}

impl EntryPoint {
    /// Detect the generation from the anchor and parse
    ///
    /// Any anchor, length or checksum problem is [`Error::InvalidEntryPoint`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let parsed = if bytes.starts_with(&SMBIOS3_ANCHOR) {
            Smbios3EntryPoint::parse(bytes).map(Self::V3)
        } else if bytes.starts_with(&SMBIOS2_ANCHOR) {
            Smbios2EntryPoint::parse(bytes).map(Self::V2)
        } else {
            Err(Error::InvalidEntryPoint)
        };

        // A short buffer is a bad entry point, not a table read error
        parsed.map_err(|_| Error::InvalidEntryPoint)
    }

    /// Table version
    pub fn version(&self) -> SmbiosVersion {
        match self {
            Self::V2(ep) => SmbiosVersion::new(ep.major_version, ep.minor_version),
            Self::V3(ep) => SmbiosVersion::new(ep.major_version, ep.minor_version),
        }
    }

    /// Revision byte carried in the firmware blob prologue
    pub fn revision(&self) -> u8 {
        match self {
            Self::V2(ep) => ep.entry_point_revision,
            Self::V3(ep) => ep.docrev,
        }
    }

    /// Structure table length (exact for 2.x, an upper bound for 3.x)
    pub fn table_length(&self) -> u32 {
        match self {
            Self::V2(ep) => u32::from(ep.structure_table_length),
            Self::V3(ep) => ep.structure_table_max_size,
        }
    }
}
