//! Portable Battery (type 22)

use crate::bits::field_u16;
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded Portable Battery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortableBattery {
    pub handle: u16,
    pub location: String,
    pub manufacturer: String,
    pub manufacture_date: String,
    pub serial_number: String,
    pub device_name: String,
    pub chemistry: u8,
    /// Design capacity in mWh before the multiplier is applied
    pub design_capacity: u16,
    /// Design voltage in mV
    pub design_voltage: u16,
    pub sbds_version: String,
    /// Maximum error in percent, 0xFF when unknown
    pub maximum_error: u8,
    pub sbds_serial_number: u16,
    pub sbds_manufacture_date: u16,
    pub sbds_chemistry: String,
    pub capacity_multiplier: u8,
    pub oem_specific: u32,
}

impl PortableBattery {
    pub fn chemistry_label(&self) -> &'static str {
        labels::battery_chemistry(self.chemistry)
    }

    /// Design capacity in mWh with the multiplier applied
    pub fn design_capacity_mwh(&self) -> u32 {
        u32::from(self.design_capacity) * u32::from(self.capacity_multiplier.max(1))
    }

    /// SBDS packed date as (year, month, day)
    pub fn sbds_date(&self) -> Option<(u16, u8, u8)> {
        let raw = self.sbds_manufacture_date;
        if raw == 0 {
            return None;
        }
        Some((
            1980 + field_u16(raw, 9, 7),
            field_u16(raw, 5, 4) as u8,
            field_u16(raw, 0, 5) as u8,
        ))
    }
}

pub fn decode(s: &Structure<'_>) -> PortableBattery {
    PortableBattery {
        handle: s.handle(),
        location: s.string(0x04),
        manufacturer: s.string(0x05),
        manufacture_date: s.string(0x06),
        serial_number: s.string(0x07),
        device_name: s.string(0x08),
        chemistry: s.byte(0x09),
        design_capacity: s.word(0x0A),
        design_voltage: s.word(0x0C),
        sbds_version: s.string(0x0E),
        maximum_error: s.byte(0x0F),
        sbds_serial_number: s.word(0x10),
        sbds_manufacture_date: s.word(0x12),
        sbds_chemistry: s.string(0x14),
        capacity_multiplier: s.byte(0x15),
        oem_specific: s.dword(0x16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::PORTABLE_BATTERY;

    #[test]
    fn test_decode_battery() {
        // 2024-03-14
        let date = ((2024 - 1980) << 9) | (3 << 5) | 14;
        let fields = Fields::new(0x1A)
            .u8(0x04, 1)
            .u8(0x05, 2)
            .u8(0x06, 0)
            .u8(0x07, 0)
            .u8(0x08, 3)
            .u8(0x09, 0x02)
            .u16(0x0A, 5700)
            .u16(0x0C, 11400)
            .u8(0x0E, 4)
            .u8(0x0F, 0xFF)
            .u16(0x10, 0x1234)
            .u16(0x12, date)
            .u8(0x14, 5)
            .u8(0x15, 10);
        let strings = ["Front", "LGC", "BAT0", "1.1", "LION"];

        with_structure(PORTABLE_BATTERY, &fields, &strings, |s| {
            let battery = decode(s);
            assert_eq!(battery.location, "Front");
            assert_eq!(battery.manufacturer, "LGC");
            assert_eq!(battery.manufacture_date, "Not Specified");
            assert_eq!(battery.device_name, "BAT0");
            assert_eq!(battery.chemistry_label(), "Unknown");
            assert_eq!(battery.design_capacity, 5700);
            assert_eq!(battery.design_capacity_mwh(), 57000);
            assert_eq!(battery.design_voltage, 11400);
            assert_eq!(battery.sbds_version, "1.1");
            assert_eq!(battery.sbds_serial_number, 0x1234);
            assert_eq!(battery.sbds_date(), Some((2024, 3, 14)));
            assert_eq!(battery.sbds_chemistry, "LION");
        });
    }

    #[test]
    fn test_short_battery() {
        let fields = Fields::new(0x10).u8(0x09, 0x06).u16(0x0A, 4800);
        with_structure(PORTABLE_BATTERY, &fields, &[], |s| {
            let battery = decode(s);
            assert_eq!(battery.chemistry_label(), "Lithium-ion");
            assert_eq!(battery.design_capacity_mwh(), 4800);
            assert_eq!(battery.sbds_date(), None);
        });
    }
}
