//! # SMBIOS Decode
//!
//! Decoder for the SMBIOS / DMI table that platform firmware exposes to the
//! operating system. The table is a sequence of variable-length structures,
//! each a 4-byte header, a fixed block of type-specific fields and a trailing
//! area of NUL-terminated strings referenced by 1-based index.
//!
//! ## Pipeline
//!
//! ```text
//! firmware blob ──► RawTable ──► StructureWalker ──► registry ──► decoder ──► SmbiosInfo
//! ```
//!
//! - [`cursor::ByteCursor`]: bounds-checked little-endian reads
//! - [`strings::StringTable`]: string index resolution with sentinels
//! - [`walker::StructureWalker`]: lazy structure iteration
//! - [`structures`]: one decoder per structure type
//! - [`labels`]: code to label lookup tables
//! - [`decoder::TableDecoder`]: orchestration into [`info::SmbiosInfo`]
//! - [`source`]: where firmware blobs come from
//!
//! ## Example
//!
//! ```no_run
//! use smbios_decode::{RawTable, TableDecoder};
//!
//! # fn blob() -> Vec<u8> { Vec::new() }
//! let raw = RawTable::from_firmware_blob(blob())?;
//! let info = TableDecoder::decode(&raw);
//! if let Some(system) = &info.system {
//!     println!("{} {} ({})", system.manufacturer, system.product_name, system.uuid);
//! }
//! for dimm in &info.memory_devices {
//!     println!("{}: {} MB {}", dimm.device_locator, dimm.size_mb, dimm.memory_type_label());
//! }
//! # Ok::<(), smbios_decode::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bits;
pub mod cursor;
pub mod decoder;
pub mod entry;
pub mod error;
pub mod info;
pub mod labels;
pub mod source;
pub mod strings;
pub mod structures;
pub mod walker;

#[cfg(test)]
mod test_support;

pub use decoder::{RawTable, TableDecoder};
pub use error::{Error, Result};
pub use info::SmbiosInfo;
pub use source::{MemorySource, TableSource};
#[cfg(feature = "std")]
pub use source::SysfsSource;

use core::fmt;

/// SMBIOS specification version a table was produced against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmbiosVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
}

impl SmbiosVersion {
    /// Create a version
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Check whether this version is at least `major.minor`
    pub const fn at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl fmt::Display for SmbiosVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
