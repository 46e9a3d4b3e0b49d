//! Table acquisition
//!
//! A [`TableSource`] hands the decoder one firmware blob: the 8-byte prologue
//! (calling method, major, minor, revision, u32 table length) followed by the
//! structure table. How the host produces it is the source's business.

use crate::error::{Error, Result};
use alloc::vec::Vec;

/// Producer of firmware blobs
pub trait TableSource {
    /// Fetch the blob; every failure is [`Error::AcquisitionFailed`]
    fn acquire(&self) -> Result<Vec<u8>>;
}

/// Build a firmware blob around a structure table
pub fn assemble_blob(major: u8, minor: u8, revision: u8, table: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(table.len())
        .map_err(|_| Error::acquisition("structure table larger than 4 GiB"))?;

    let mut blob = Vec::with_capacity(table.len() + 8);
    blob.extend_from_slice(&[0, major, minor, revision]);
    blob.extend_from_slice(&length.to_le_bytes());
    blob.extend_from_slice(table);
    Ok(blob)
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Blob already in memory (captured dump, host API result)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    blob: Vec<u8>,
}

impl MemorySource {
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self { blob: blob.into() }
    }
}

impl TableSource for MemorySource {
    fn acquire(&self) -> Result<Vec<u8>> {
        if self.blob.is_empty() {
            return Err(Error::acquisition("in-memory blob is empty"));
        }
        Ok(self.blob.clone())
    }
}

// =============================================================================
// LINUX SYSFS
// =============================================================================

#[cfg(feature = "std")]
pub use sysfs::SysfsSource;

#[cfg(feature = "std")]
mod sysfs {
    use super::{assemble_blob, TableSource};
    use crate::entry::EntryPoint;
    use crate::error::{Error, Result};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Default location of the exported tables
    pub const DEFAULT_DIR: &str = "/sys/firmware/dmi/tables";

    const ENTRY_POINT_FILE: &str = "smbios_entry_point";
    const TABLE_FILE: &str = "DMI";

    /// Tables exported by the Linux kernel under sysfs
    ///
    /// Reads `smbios_entry_point` for the version and `DMI` for the
    /// structure table. Both files are root-only on most distributions.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SysfsSource {
        dir: PathBuf,
    }

    impl Default for SysfsSource {
        fn default() -> Self {
            Self::with_dir(DEFAULT_DIR)
        }
    }

    impl SysfsSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Read from another directory holding the same two files
        pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn read(&self, name: &str) -> Result<Vec<u8>> {
            let path = self.dir.join(name);
            fs::read(&path).map_err(|e| Error::acquisition(format!("{}: {}", path.display(), e)))
        }
    }

    impl TableSource for SysfsSource {
        fn acquire(&self) -> Result<Vec<u8>> {
            let entry = EntryPoint::parse(&self.read(ENTRY_POINT_FILE)?)
                .map_err(|e| Error::acquisition(format!("{ENTRY_POINT_FILE}: {e}")))?;
            let table = self.read(TABLE_FILE)?;

            let version = entry.version();
            log::debug!(
                "SMBIOS {} entry point in {}, {} table bytes",
                version,
                self.dir.display(),
                table.len()
            );

            assemble_blob(version.major, version.minor, entry.revision(), &table)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{RawTable, TableDecoder};
    use crate::test_support::TableBuilder;
    use crate::SmbiosVersion;

    #[test]
    fn test_assemble_blob() {
        let blob = assemble_blob(3, 5, 0, &[1, 2, 3]).unwrap();
        assert_eq!(blob, [0, 3, 5, 0, 3, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_memory_source() {
        let blob = TableBuilder::new()
            .structure(0x80, 1, &[], &[])
            .end_of_table()
            .blob(3, 1);
        let source = MemorySource::new(blob.clone());
        assert_eq!(source.acquire(), Ok(blob));

        let err = MemorySource::default().acquire().unwrap_err();
        assert!(matches!(err, Error::AcquisitionFailed { .. }));
    }

    #[cfg(feature = "std")]
    mod sysfs_tests {
        use super::*;
        use crate::entry::tests::{entry_v2, entry_v3};
        use std::fs;
        use std::path::PathBuf;

        fn fixture_dir(name: &str) -> PathBuf {
            let dir = std::env::temp_dir().join(format!(
                "smbios-decode-{}-{}",
                name,
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            dir
        }

        #[test]
        fn test_sysfs_v3() {
            let dir = fixture_dir("v3");
            let table = TableBuilder::new()
                .structure(0x80, 1, &[], &["x"])
                .end_of_table()
                .build();
            fs::write(dir.join("smbios_entry_point"), entry_v3(3, 3, 0x4000)).unwrap();
            fs::write(dir.join("DMI"), &table).unwrap();

            let blob = SysfsSource::with_dir(&dir).acquire().unwrap();
            let raw = RawTable::from_firmware_blob(&blob).unwrap();
            assert_eq!(raw.version(), SmbiosVersion::new(3, 3));
            assert_eq!(raw.data(), &table[..]);

            let info = TableDecoder::acquire(&SysfsSource::with_dir(&dir)).unwrap();
            assert_eq!(info.structure_count, 1);
            assert!(!info.partial);

            fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_sysfs_v2() {
            let dir = fixture_dir("v2");
            let table = TableBuilder::new().structure(0x80, 1, &[], &[]).build();
            fs::write(dir.join("smbios_entry_point"), entry_v2(2, 7, 6)).unwrap();
            fs::write(dir.join("DMI"), &table).unwrap();

            let blob = SysfsSource::with_dir(&dir).acquire().unwrap();
            assert_eq!(&blob[..4], &[0, 2, 7, 0]);

            fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_sysfs_failures() {
            let dir = fixture_dir("missing");
            let err = SysfsSource::with_dir(&dir).acquire().unwrap_err();
            assert!(matches!(err, Error::AcquisitionFailed { .. }));

            fs::write(dir.join("smbios_entry_point"), b"_XX_garbage").unwrap();
            fs::write(dir.join("DMI"), [0x7Fu8, 4, 0, 0, 0, 0]).unwrap();
            let err = SysfsSource::with_dir(&dir).acquire().unwrap_err();
            assert!(err.is_fatal());
            assert!(err.to_string().contains("invalid SMBIOS entry point"));

            fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_default_dir() {
            assert_eq!(
                SysfsSource::new().dir(),
                std::path::Path::new("/sys/firmware/dmi/tables")
            );
        }
    }
}
