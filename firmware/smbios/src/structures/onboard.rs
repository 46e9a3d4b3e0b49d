//! On Board Devices Information (type 10)
//!
//! Obsolete since 3.2 but still emitted by plenty of firmware. Each pair of
//! bytes after the header describes one device.

use crate::bits::{bit_u8, field_u8};
use crate::labels;
use crate::walker::{Structure, StructureHeader};
use alloc::string::String;
use alloc::vec::Vec;

/// One on-board device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardDevice {
    /// Handle of the structure listing the device
    pub handle: u16,
    pub device_type: u8,
    pub enabled: bool,
    pub description: String,
}

impl OnboardDevice {
    pub fn device_type_label(&self) -> &'static str {
        labels::onboard_device_type(self.device_type)
    }
}

pub fn decode(s: &Structure<'_>) -> Vec<OnboardDevice> {
    let count = usize::from(s.header.length).saturating_sub(StructureHeader::SIZE) / 2;

    (0..count)
        .map(|i| {
            let offset = StructureHeader::SIZE + i * 2;
            let kind = s.byte(offset);
            OnboardDevice {
                handle: s.handle(),
                device_type: field_u8(kind, 0, 7),
                enabled: bit_u8(kind, 7),
                description: s.string(offset + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::ON_BOARD_DEVICES;

    #[test]
    fn test_decode_onboard() {
        let fields = Fields::new(0x08)
            .u8(0x04, 0x80 | 0x05)
            .u8(0x05, 1)
            .u8(0x06, 0x07)
            .u8(0x07, 2);

        with_structure(ON_BOARD_DEVICES, &fields, &["Onboard LAN", "Onboard Audio"], |s| {
            let devices = decode(s);
            assert_eq!(devices.len(), 2);
            assert_eq!(devices[0].device_type_label(), "Ethernet");
            assert!(devices[0].enabled);
            assert_eq!(devices[0].description, "Onboard LAN");
            assert_eq!(devices[1].device_type_label(), "Sound");
            assert!(!devices[1].enabled);
            assert_eq!(devices[1].description, "Onboard Audio");
        });
    }

    #[test]
    fn test_odd_length() {
        // Trailing half entry is ignored
        let fields = Fields::new(0x07).u8(0x04, 0x83).u8(0x05, 1).u8(0x06, 0x83);
        with_structure(ON_BOARD_DEVICES, &fields, &["Video"], |s| {
            assert_eq!(decode(s).len(), 1);
        });
    }
}
