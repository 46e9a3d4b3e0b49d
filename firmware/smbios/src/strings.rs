//! SMBIOS string area resolution
//!
//! Strings referenced by a structure live right after its fixed part as a
//! run of NUL-terminated strings closed by one more NUL. Fields store a
//! 1-based index into that run; index 0 means "no string".

use alloc::string::String;

/// Returned for string index 0
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Returned when the index points past the last string of the area
pub const NOT_AVAILABLE: &str = "Not Available";

/// String area following one structure
///
/// `data` starts at the first byte after the fixed part and may extend to the
/// end of the table; scanning stops at the double NUL.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Create from the bytes following a structure's fixed part
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw bytes of the string at 1-based `index`
    pub fn get_bytes(&self, index: u8) -> Option<&'a [u8]> {
        if index == 0 {
            return None;
        }
        self.iter_bytes().nth(usize::from(index) - 1)
    }

    /// String at 1-based `index`, with the sentinel values for missing strings
    pub fn resolve(&self, index: u8) -> String {
        if index == 0 {
            return String::from(NOT_SPECIFIED);
        }

        match self.get_bytes(index) {
            Some(bytes) => decode_text(bytes),
            None => String::from(NOT_AVAILABLE),
        }
    }

    /// Iterate all strings in area order
    pub fn iter(&self) -> impl Iterator<Item = String> + 'a {
        self.iter_bytes().map(decode_text)
    }

    /// Iterate the raw string runs
    pub fn iter_bytes(&self) -> StringTableIter<'a> {
        StringTableIter { data: self.data, pos: 0 }
    }
}

/// Iterator over the raw runs of a string area
#[derive(Debug, Clone)]
pub struct StringTableIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for StringTableIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.data.get(self.pos..)?;

        // An empty run is the area terminator
        let len = rest.iter().position(|&b| b == 0)?;
        if len == 0 {
            self.pos = self.data.len();
            return None;
        }

        self.pos += len + 1;
        Some(&rest[..len])
    }
}

/// UTF-8 when valid, Latin-1 otherwise
fn decode_text(bytes: &[u8]) -> String {
    match core::str::from_utf8(bytes) {
        Ok(text) => String::from(text),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_string_table() {
        let data = b"First\0Second\0Third\0\0";
        let table = StringTable::new(data);

        assert_eq!(table.resolve(1), "First");
        assert_eq!(table.resolve(2), "Second");
        assert_eq!(table.resolve(3), "Third");
        assert_eq!(table.resolve(4), NOT_AVAILABLE);
        assert_eq!(table.resolve(0), NOT_SPECIFIED);
    }

    #[test]
    fn test_empty_area() {
        let table = StringTable::new(b"\0\0");
        assert_eq!(table.resolve(1), NOT_AVAILABLE);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_missing_terminator() {
        // Buffer ends inside the second string
        let table = StringTable::new(b"Alpha\0Bet");
        assert_eq!(table.resolve(1), "Alpha");
        assert_eq!(table.resolve(2), NOT_AVAILABLE);

        let table = StringTable::new(b"");
        assert_eq!(table.resolve(1), NOT_AVAILABLE);
    }

    #[test]
    fn test_stops_at_area_end() {
        // Bytes after the double NUL belong to the next structure
        let table = StringTable::new(b"One\0\0\x01\x1b\0\0Two\0\0");
        assert_eq!(table.resolve(1), "One");
        assert_eq!(table.resolve(2), NOT_AVAILABLE);
    }

    #[test]
    fn test_latin1_fallback() {
        let table = StringTable::new(b"Caf\xe9\0\0");
        assert_eq!(table.resolve(1), "Caf\u{e9}");
    }

    #[test]
    fn test_iter() {
        let table = StringTable::new(b"a\0bb\0ccc\0\0");
        let all: Vec<String> = table.iter().collect();
        assert_eq!(all, ["a", "bb", "ccc"]);
    }
}
