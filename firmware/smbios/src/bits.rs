//! Shift/mask helpers for bit-packed structure fields

/// Extract `width` bits starting at bit `shift`
#[inline]
pub const fn field_u8(value: u8, shift: u32, width: u32) -> u8 {
    (value >> shift) & mask_u8(width)
}

/// Extract `width` bits starting at bit `shift`
#[inline]
pub const fn field_u16(value: u16, shift: u32, width: u32) -> u16 {
    (value >> shift) & mask_u16(width)
}

/// Test a single bit
#[inline]
pub const fn bit_u8(value: u8, bit: u32) -> bool {
    (value >> bit) & 1 != 0
}

/// Test a single bit
#[inline]
pub const fn bit_u16(value: u16, bit: u32) -> bool {
    (value >> bit) & 1 != 0
}

const fn mask_u8(width: u32) -> u8 {
    if width >= 8 {
        u8::MAX
    } else {
        (1u8 << width) - 1
    }
}

const fn mask_u16(width: u32) -> u16 {
    if width >= 16 {
        u16::MAX
    } else {
        (1u16 << width) - 1
    }
}

/// Split a probe/cooling "type-or-location and status" byte into
/// (bits 0-4, bits 5-7)
#[inline]
pub const fn split_low5_high3(value: u8) -> (u8, u8) {
    (field_u8(value, 0, 5), field_u8(value, 5, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        assert_eq!(field_u8(0b1011_0110, 5, 3), 0b101);
        assert_eq!(field_u8(0xFF, 0, 8), 0xFF);
        assert_eq!(field_u16(0x0181, 8, 2), 0x01);
        assert_eq!(field_u16(0x0181, 0, 3), 0x01);
        assert!(bit_u8(0x80, 7));
        assert!(!bit_u16(0x7FFF, 15));
    }

    #[test]
    fn test_split_low5_high3() {
        // Processor location (0x03) with status OK (0x03)
        assert_eq!(split_low5_high3(0x63), (0x03, 0x03));
        assert_eq!(split_low5_high3(0x00), (0, 0));
        assert_eq!(split_low5_high3(0xFF), (0x1F, 0x07));
    }
}
