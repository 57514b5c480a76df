// SPDX-License-Identifier: PMPL-1.0-or-later

//! Independent reader for compiled catalogs, used to check writer output.

#![allow(dead_code)]

pub const MAGIC: u32 = 0x950412DE;

pub fn word(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

/// One `(length, offset)` pair resolved to its string.
pub fn string_at(bytes: &[u8], table: usize, index: usize) -> String {
    let len = word(bytes, table + index * 8) as usize;
    let offset = word(bytes, table + index * 8 + 4) as usize;
    assert_eq!(bytes[offset + len], 0, "string at {offset} is not NUL-terminated");
    String::from_utf8(bytes[offset..offset + len].to_vec()).unwrap()
}

/// Decode every `(key, value)` pair in table order.
pub fn read_entries(bytes: &[u8]) -> Vec<(String, String)> {
    assert_eq!(word(bytes, 0), MAGIC, "bad magic");
    let count = word(bytes, 8) as usize;
    let keys = word(bytes, 12) as usize;
    let values = word(bytes, 16) as usize;
    (0..count)
        .map(|i| (string_at(bytes, keys, i), string_at(bytes, values, i)))
        .collect()
}

pub fn read_file(path: &std::path::Path) -> Vec<(String, String)> {
    read_entries(&std::fs::read(path).unwrap())
}
