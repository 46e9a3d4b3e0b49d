//! System Slots (type 9)

use crate::bits::field_u8;
use crate::labels;
use crate::walker::Structure;
use alloc::string::String;

/// Decoded System Slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSlot {
    pub handle: u16,
    pub designation: String,
    pub slot_type: u8,
    pub data_bus_width: u8,
    pub current_usage: u8,
    pub slot_length: u8,
    pub slot_id: u16,
    pub characteristics1: u8,
    pub characteristics2: u8,
    /// PCI segment group (2.6+)
    pub segment_group: u16,
    pub bus_number: u8,
    /// Device (bits 3-7) and function (bits 0-2)
    pub device_function: u8,
}

impl SystemSlot {
    pub fn slot_type_label(&self) -> &'static str {
        labels::slot_type(self.slot_type)
    }

    pub fn data_bus_width_label(&self) -> &'static str {
        labels::slot_data_bus_width(self.data_bus_width)
    }

    pub fn usage_label(&self) -> &'static str {
        labels::slot_usage(self.current_usage)
    }

    pub fn length_label(&self) -> &'static str {
        labels::slot_length(self.slot_length)
    }

    pub fn device(&self) -> u8 {
        field_u8(self.device_function, 3, 5)
    }

    pub fn function(&self) -> u8 {
        field_u8(self.device_function, 0, 3)
    }
}

pub fn decode(s: &Structure<'_>) -> SystemSlot {
    SystemSlot {
        handle: s.handle(),
        designation: s.string(0x04),
        slot_type: s.byte(0x05),
        data_bus_width: s.byte(0x06),
        current_usage: s.byte(0x07),
        slot_length: s.byte(0x08),
        slot_id: s.word(0x09),
        characteristics1: s.byte(0x0B),
        characteristics2: s.byte(0x0C),
        segment_group: s.word(0x0D),
        bus_number: s.byte(0x0F),
        device_function: s.byte(0x10),
    }
}
