//! Table decoding
//!
//! [`RawTable`] holds the structure table and its version. [`TableDecoder`]
//! walks it once, dispatches each structure through the decoder registry and
//! folds the records into an [`SmbiosInfo`].

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::info::SmbiosInfo;
use crate::source::TableSource;
use crate::structures;
use crate::walker::StructureWalker;
use crate::SmbiosVersion;
use alloc::vec::Vec;

/// Size of the prologue in front of the structure table in a firmware blob
pub const PROLOGUE_SIZE: usize = 8;

// =============================================================================
// RAW TABLE
// =============================================================================

/// Undecoded structure table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    data: Vec<u8>,
    version: SmbiosVersion,
    truncated_input: bool,
}

impl RawTable {
    /// Wrap a structure table region
    pub fn load(bytes: impl Into<Vec<u8>>, version: SmbiosVersion) -> Result<Self> {
        let data = bytes.into();
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self {
            data,
            version,
            truncated_input: false,
        })
    }

    /// Split a firmware blob into prologue and structure table
    ///
    /// Blob layout: calling method, major, minor, DMI revision, u32 table
    /// length, table data. A prologue cut short or a length larger than the
    /// data present still yields a table, flagged as truncated.
    pub fn from_firmware_blob(blob: impl AsRef<[u8]>) -> Result<Self> {
        let blob = blob.as_ref();
        if blob.is_empty() {
            return Err(Error::EmptyInput);
        }

        let cursor = ByteCursor::new(blob);
        let version = SmbiosVersion::new(
            cursor.read_u8(1).unwrap_or(0),
            cursor.read_u8(2).unwrap_or(0),
        );

        let Ok(declared) = cursor.read_u32(4) else {
            log::warn!("SMBIOS blob of {} bytes has no complete prologue", blob.len());
            return Ok(Self {
                data: Vec::new(),
                version,
                truncated_input: true,
            });
        };

        let available = blob.len() - PROLOGUE_SIZE;
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        let truncated_input = declared > available;
        if truncated_input {
            log::warn!(
                "SMBIOS prologue declares {} table bytes, {} present",
                declared,
                available
            );
        }

        let data = cursor.slice(PROLOGUE_SIZE, declared.min(available))?;
        if data.is_empty() && !truncated_input {
            return Err(Error::EmptyInput);
        }

        Ok(Self {
            data: data.to_vec(),
            version,
            truncated_input,
        })
    }

    /// Table version
    pub fn version(&self) -> SmbiosVersion {
        self.version
    }

    /// Structure table bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Did the blob promise more data than it held
    pub fn truncated_input(&self) -> bool {
        self.truncated_input
    }
}

// =============================================================================
// DECODER
// =============================================================================

/// Structure table decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDecoder;

impl TableDecoder {
    /// Decode every structure of `raw`
    ///
    /// Never fails: a cut-short table decodes what it can and sets
    /// [`SmbiosInfo::partial`].
    pub fn decode(raw: &RawTable) -> SmbiosInfo {
        log::debug!(
            "Decoding SMBIOS {} table ({} bytes)",
            raw.version(),
            raw.data().len()
        );

        let mut info = SmbiosInfo::new(raw.version());
        let mut walker = StructureWalker::new(raw.data());

        for structure in walker.by_ref() {
            info.structure_count += 1;

            let Some(decode) = structures::decoder_for(structure.kind()) else {
                log::debug!(
                    "Skipping SMBIOS structure type {} (handle {:#06x})",
                    structure.kind(),
                    structure.handle()
                );
                info.skipped_structures += 1;
                continue;
            };

            if let Some(record) = decode(&structure) {
                info.absorb(record);
            }
        }

        let walk_truncated = walker.end().is_some_and(|end| end.is_truncated());
        info.partial = raw.truncated_input() || walk_truncated;

        log::debug!(
            "SMBIOS decode done: {} structures, {} skipped, {} processors, {} memory devices{}",
            info.structure_count,
            info.skipped_structures,
            info.processors.len(),
            info.memory_devices.len(),
            if info.partial { " (partial)" } else { "" }
        );

        info
    }

    /// Acquire a firmware blob from `source` and decode it
    pub fn acquire(source: &impl TableSource) -> Result<SmbiosInfo> {
        let blob = source.acquire()?;
        let raw = RawTable::from_firmware_blob(blob)?;
        Ok(Self::decode(&raw))
    }
}

// =============================================================================
// TESTS
// =============================================================================
