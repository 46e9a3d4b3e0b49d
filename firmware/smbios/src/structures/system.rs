//! System Information (type 1)

use crate::labels;
use crate::strings::NOT_SPECIFIED;
use crate::walker::Structure;
use alloc::format;
use alloc::string::String;

/// Decoded System Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub handle: u16,
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    /// Formatted UUID, `"Not Specified"` on 2.0 tables that lack the field
    pub uuid: String,
    pub uuid_bytes: [u8; 16],
    pub wake_up_type: u8,
    pub sku_number: String,
    pub family: String,
}

impl SystemInfo {
    pub fn wake_up_type_label(&self) -> &'static str {
        labels::wake_up_type(self.wake_up_type)
    }
}

/// Format raw UUID bytes
///
/// The first three groups are stored little-endian, the last two in wire
/// order.
pub fn format_uuid(u: &[u8; 16]) -> String {
    format!(
        "{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
        u[3], u[2], u[1], u[0], u[5], u[4], u[7], u[6],
        u[8], u[9], u[10], u[11], u[12], u[13], u[14], u[15]
    )
}

pub fn decode(s: &Structure<'_>) -> SystemInfo {
    let uuid_bytes: [u8; 16] = s.bytes(0x08);
    let uuid = if s.has(0x08, 16) {
        format_uuid(&uuid_bytes)
    } else {
        String::from(NOT_SPECIFIED)
    };

    SystemInfo {
        handle: s.handle(),
        manufacturer: s.string(0x04),
        product_name: s.string(0x05),
        version: s.string(0x06),
        serial_number: s.string(0x07),
        uuid,
        uuid_bytes,
        wake_up_type: s.byte(0x18),
        sku_number: s.string(0x19),
        family: s.string(0x1A),
    }
}
