//! Error types for SMBIOS decoding
//!
//! Only acquisition failures and empty input are hard errors. Everything the
//! walker or a decoder runs into while reading the table is absorbed into
//! best-effort output and a partial-result flag on [`crate::SmbiosInfo`].

use alloc::string::String;

/// Result type for SMBIOS operations
pub type Result<T> = core::result::Result<T, Error>;

/// SMBIOS error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The table source could not produce a buffer
    #[error("SMBIOS table acquisition failed: {reason}")]
    AcquisitionFailed {
        /// What the source reported
        reason: String,
    },

    /// A zero-length buffer was supplied
    #[error("SMBIOS table buffer is empty")]
    EmptyInput,

    /// The table ended in the middle of a structure
    #[error("SMBIOS table truncated at offset {offset:#x}")]
    Truncated {
        /// Offset of the structure that could not be read in full
        offset: usize,
    },

    /// A read went past the end of the buffer
    #[error("read of {width} bytes at offset {offset:#x} exceeds buffer of {len} bytes")]
    OutOfBounds {
        /// Requested offset
        offset: usize,
        /// Requested width in bytes
        width: usize,
        /// Buffer length
        len: usize,
    },

    /// Entry point anchor, length or checksum is wrong
    #[error("invalid SMBIOS entry point")]
    InvalidEntryPoint,
}

impl Error {
    /// Wrap any displayable source failure as [`Error::AcquisitionFailed`]
    pub fn acquisition(reason: impl core::fmt::Display) -> Self {
        use alloc::string::ToString;

        Self::AcquisitionFailed {
            reason: reason.to_string(),
        }
    }

    /// Is this a hard failure that prevents decoding
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AcquisitionFailed { .. } | Self::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyInput.to_string(), "SMBIOS table buffer is empty");
        assert_eq!(
            Error::Truncated { offset: 0x40 }.to_string(),
            "SMBIOS table truncated at offset 0x40"
        );
        assert_eq!(
            Error::acquisition("permission denied").to_string(),
            "SMBIOS table acquisition failed: permission denied"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(Error::EmptyInput.is_fatal());
        assert!(Error::acquisition("x").is_fatal());
        assert!(!Error::Truncated { offset: 0 }.is_fatal());
        assert!(!Error::InvalidEntryPoint.is_fatal());
    }
}
