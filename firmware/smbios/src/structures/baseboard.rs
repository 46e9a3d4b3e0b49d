//! Baseboard Information (type 2)

use crate::labels;
use crate::walker::Structure;
use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// Baseboard feature flags (offset 0x09)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BaseboardFeatures: u8 {
        const HOSTING_BOARD = 1 << 0;
        const REQUIRES_DAUGHTER_BOARD = 1 << 1;
        const REMOVABLE = 1 << 2;
        const REPLACEABLE = 1 << 3;
        const HOT_SWAPPABLE = 1 << 4;
    }
}

/// Decoded Baseboard Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseboardInfo {
    pub handle: u16,
    pub manufacturer: String,
    pub product: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub features: BaseboardFeatures,
    pub location_in_chassis: String,
    pub chassis_handle: u16,
    pub board_type: u8,
}

impl BaseboardInfo {
    pub fn board_type_label(&self) -> &'static str {
        labels::board_type(self.board_type)
    }
}

pub fn decode(s: &Structure<'_>) -> BaseboardInfo {
    BaseboardInfo {
        handle: s.handle(),
        manufacturer: s.string(0x04),
        product: s.string(0x05),
        version: s.string(0x06),
        serial_number: s.string(0x07),
        asset_tag: s.string(0x08),
        features: BaseboardFeatures::from_bits_retain(s.byte(0x09)),
        location_in_chassis: s.string(0x0A),
        chassis_handle: s.word(0x0B),
        board_type: s.byte(0x0D),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::BASEBOARD_INFORMATION;

    #[test]
    fn test_decode_baseboard() {
        let fields = Fields::new(0x0F)
            .u8(0x04, 1)
            .u8(0x05, 2)
            .u8(0x06, 3)
            .u8(0x07, 4)
            .u8(0x08, 0)
            .u8(0x09, 0x09)
            .u8(0x0A, 5)
            .u16(0x0B, 0x0300)
            .u8(0x0D, 0x0A);
        let strings = ["ACME", "MB-1", "1.0", "BSN42", "Slot 0"];

        with_structure(BASEBOARD_INFORMATION, &fields, &strings, |s| {
            let board = decode(s);
            assert_eq!(board.manufacturer, "ACME");
            assert_eq!(board.product, "MB-1");
            assert_eq!(board.serial_number, "BSN42");
            assert_eq!(board.asset_tag, "Not Specified");
            assert_eq!(
                board.features,
                BaseboardFeatures::HOSTING_BOARD | BaseboardFeatures::REPLACEABLE
            );
            assert_eq!(board.location_in_chassis, "Slot 0");
            assert_eq!(board.chassis_handle, 0x0300);
            assert_eq!(board.board_type_label(), "Motherboard");
        });
    }
}
