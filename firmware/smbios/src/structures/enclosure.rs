//! System Enclosure or Chassis (type 3)

use crate::bits::{bit_u8, field_u8};
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded System Enclosure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosureInfo {
    pub handle: u16,
    pub manufacturer: String,
    /// Chassis type with the lock bit removed
    pub chassis_type: u8,
    pub lock_present: bool,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub bootup_state: u8,
    pub power_supply_state: u8,
    pub thermal_state: u8,
    pub security_status: u8,
    pub oem_defined: u32,
    /// Height in rack units, 0 when unspecified
    pub height: u8,
    pub power_cords: u8,
    pub sku_number: String,
}

impl EnclosureInfo {
    pub fn chassis_type_label(&self) -> &'static str {
        labels::chassis_type(self.chassis_type)
    }

    pub fn bootup_state_label(&self) -> &'static str {
        labels::chassis_state(self.bootup_state)
    }

    pub fn power_supply_state_label(&self) -> &'static str {
        labels::chassis_state(self.power_supply_state)
    }

    pub fn thermal_state_label(&self) -> &'static str {
        labels::chassis_state(self.thermal_state)
    }

    pub fn security_status_label(&self) -> &'static str {
        labels::security_status(self.security_status)
    }
}

pub fn decode(s: &Structure<'_>) -> EnclosureInfo {
    let raw_type = s.byte(0x05);

    // SKU follows the variable-length contained element records
    let element_count = usize::from(s.byte(0x13));
    let element_len = usize::from(s.byte(0x14));
    let sku_offset = 0x15 + element_count * element_len;

    EnclosureInfo {
        handle: s.handle(),
        manufacturer: s.string(0x04),
        chassis_type: field_u8(raw_type, 0, 7),
        lock_present: bit_u8(raw_type, 7),
        version: s.string(0x06),
        serial_number: s.string(0x07),
        asset_tag: s.string(0x08),
        bootup_state: s.byte(0x09),
        power_supply_state: s.byte(0x0A),
        thermal_state: s.byte(0x0B),
        security_status: s.byte(0x0C),
        oem_defined: s.dword(0x0D),
        height: s.byte(0x11),
        power_cords: s.byte(0x12),
        sku_number: s.string(sku_offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::SYSTEM_ENCLOSURE;

    #[test]
    fn test_decode_enclosure() {
        let fields = Fields::new(0x1C)
            .u8(0x04, 1)
            .u8(0x05, 0x80 | 0x17)
            .u8(0x06, 2)
            .u8(0x07, 3)
            .u8(0x08, 4)
            .u8(0x09, 0x03)
            .u8(0x0A, 0x03)
            .u8(0x0B, 0x04)
            .u8(0x0C, 0x03)
            .u32(0x0D, 0xDEAD_BEEF)
            .u8(0x11, 2)
            .u8(0x12, 1)
            .u8(0x13, 2)
            .u8(0x14, 3)
            .u8(0x1B, 5);
        let strings = ["ACME", "v1", "CSN", "Asset 7", "CH-SKU"];

        with_structure(SYSTEM_ENCLOSURE, &fields, &strings, |s| {
            let chassis = decode(s);
            assert_eq!(chassis.manufacturer, "ACME");
            assert_eq!(chassis.chassis_type, 0x17);
            assert!(chassis.lock_present);
            assert_eq!(chassis.chassis_type_label(), "Rack Mount Chassis");
            assert_eq!(chassis.asset_tag, "Asset 7");
            assert_eq!(chassis.bootup_state_label(), "Safe");
            assert_eq!(chassis.thermal_state_label(), "Warning");
            assert_eq!(chassis.security_status_label(), "None");
            assert_eq!(chassis.oem_defined, 0xDEAD_BEEF);
            assert_eq!(chassis.height, 2);
            assert_eq!(chassis.power_cords, 1);
            assert_eq!(chassis.sku_number, "CH-SKU");
        });
    }

    #[test]
    fn test_minimal_enclosure() {
        let fields = Fields::new(0x09).u8(0x05, 0x0A);
        with_structure(SYSTEM_ENCLOSURE, &fields, &[], |s| {
            let chassis = decode(s);
            assert_eq!(chassis.chassis_type_label(), "Notebook");
            assert!(!chassis.lock_present);
            assert_eq!(chassis.bootup_state, 0);
            assert_eq!(chassis.sku_number, "Not Specified");
        });
    }
}
