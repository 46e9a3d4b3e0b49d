//! OEM Strings (type 11) and System Configuration Options (type 12)
//!
//! Both are a count byte at offset 0x04 followed by that many strings.

use crate::walker::Structure;
use alloc::string::String;
use alloc::vec::Vec;

fn counted_strings(s: &Structure<'_>) -> Vec<String> {
    let count = usize::from(s.byte(0x04));
    s.strings()
        .iter()
        .take(count)
        .filter(|text| !text.is_empty())
        .collect()
}

pub fn decode_strings(s: &Structure<'_>) -> Vec<String> {
    counted_strings(s)
}

pub fn decode_config_options(s: &Structure<'_>) -> Vec<String> {
    counted_strings(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_structure, Fields};
    use crate::walker::structure_type::{OEM_STRINGS, SYSTEM_CONFIG_OPTIONS};

    #[test]
    fn test_decode_oem_strings() {
        let fields = Fields::new(0x05).u8(0x04, 2);
        with_structure(OEM_STRINGS, &fields, &["Board-ID 7", "Lot 99"], |s| {
            assert_eq!(decode_strings(s), ["Board-ID 7", "Lot 99"]);
        });
    }

    #[test]
    fn test_count_limits_strings() {
        let fields = Fields::new(0x05).u8(0x04, 1);
        with_structure(SYSTEM_CONFIG_OPTIONS, &fields, &["JP1: 1-2", "JP2: 2-3"], |s| {
            assert_eq!(decode_config_options(s), ["JP1: 1-2"]);
        });
    }

    #[test]
    fn test_count_past_area() {
        let fields = Fields::new(0x05).u8(0x04, 5);
        with_structure(OEM_STRINGS, &fields, &["only"], |s| {
            assert_eq!(decode_strings(s), ["only"]);
        });
    }
}
