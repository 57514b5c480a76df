// SPDX-License-Identifier: PMPL-1.0-or-later

//! Offset arithmetic for the binary catalog.
//!
//! Works on string lengths only, so it can be checked without any text.
//!
//! ```text
//! ┌────────────┬──────────────┬────────────────┬──────────┬────────────┐
//! │ header 28B │ key table 8N │ value table 8N │ key blob │ value blob │
//! └────────────┴──────────────┴────────────────┴──────────┴────────────┘
//! ```

use crate::error::{CompileError, Result};

/// Size of one table word.
pub const WORD_SIZE: u32 = 4;

/// Header: magic, revision, count, two table offsets, hash size and offset.
pub const HEADER_SIZE: u32 = 7 * WORD_SIZE;

/// One `(length, offset)` table pair.
pub const TABLE_ENTRY_SIZE: u32 = 2 * WORD_SIZE;

/// Absolute positions of every region and string in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub count: u32,
    pub key_table_offset: u32,
    pub value_table_offset: u32,
    pub key_blob_offset: u32,
    pub value_blob_offset: u32,
    /// Absolute file offset of each key string, in table order.
    pub key_offsets: Vec<u32>,
    /// Absolute file offset of each value string, in table order.
    pub value_offsets: Vec<u32>,
    pub total_size: u32,
}

impl Layout {
    /// Compute the layout for `(key, value)` byte lengths (without NUL
    /// terminators), already in table order.
    pub fn compute(lengths: &[(usize, usize)]) -> Result<Self> {
        let count = lengths.len() as u64;

        let key_table_offset = u64::from(HEADER_SIZE);
        let value_table_offset = key_table_offset + count * u64::from(TABLE_ENTRY_SIZE);
        let key_blob_offset = value_table_offset + count * u64::from(TABLE_ENTRY_SIZE);

        let (key_relative, key_blob_len) = cumulative(lengths.iter().map(|&(key, _)| key));
        let value_blob_offset = key_blob_offset + key_blob_len;
        let (value_relative, value_blob_len) = cumulative(lengths.iter().map(|&(_, value)| value));
        let total_size = value_blob_offset + value_blob_len;

        // Every absolute offset is below total_size, so one check covers all.
        if total_size > u64::from(u32::MAX) {
            return Err(CompileError::Oversized { bytes: total_size });
        }
        let narrow = |v: u64| v as u32;

        Ok(Layout {
            count: narrow(count),
            key_table_offset: narrow(key_table_offset),
            value_table_offset: narrow(value_table_offset),
            key_blob_offset: narrow(key_blob_offset),
            value_blob_offset: narrow(value_blob_offset),
            key_offsets: key_relative
                .into_iter()
                .map(|rel| narrow(key_blob_offset + rel))
                .collect(),
            value_offsets: value_relative
                .into_iter()
                .map(|rel| narrow(value_blob_offset + rel))
                .collect(),
            total_size: narrow(total_size),
        })
    }
}

/// Blob-relative start of each string plus the blob's total length,
/// counting one NUL after every string.
fn cumulative(lengths: impl ExactSizeIterator<Item = usize>) -> (Vec<u64>, u64) {
    let mut offsets = Vec::with_capacity(lengths.len());
    let mut next = 0u64;
    for len in lengths {
        offsets.push(next);
        next += len as u64 + 1;
    }
    (offsets, next)
}
