// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::error::{CompileError, Result};
use crate::mo::layout::Layout;
use crate::types::TranslationEntry;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Magic number opening every binary catalog.
pub const MO_MAGIC: u32 = 0x950412DE;

/// Format revision written to the header.
pub const MO_REVISION: u32 = 0;

/// Encode translations as a binary catalog.
///
/// Entries are sorted by the raw UTF-8 bytes of their source text, so a
/// reader can binary search the key table. Fails with `EmptyCatalog` when
/// `entries` is empty. Every integer is a little-endian `u32`.
pub fn encode(mut entries: Vec<TranslationEntry>) -> Result<Vec<u8>> {
    if entries.is_empty() {
        return Err(CompileError::EmptyCatalog);
    }
    entries.sort_by(|a, b| a.source_text.as_bytes().cmp(b.source_text.as_bytes()));

    let lengths: Vec<(usize, usize)> = entries
        .iter()
        .map(|e| (e.source_text.len(), e.translated_text.len()))
        .collect();
    let layout = Layout::compute(&lengths)?;

    let mut buf = Vec::with_capacity(layout.total_size as usize);

    // Header
    for word in [
        MO_MAGIC,
        MO_REVISION,
        layout.count,
        layout.key_table_offset,
        layout.value_table_offset,
        0, // hash table size
        0, // hash table offset
    ] {
        put_u32(&mut buf, word);
    }

    // Key table, then value table
    for ((len, _), offset) in lengths.iter().zip(&layout.key_offsets) {
        put_u32(&mut buf, *len as u32);
        put_u32(&mut buf, *offset);
    }
    for ((_, len), offset) in lengths.iter().zip(&layout.value_offsets) {
        put_u32(&mut buf, *len as u32);
        put_u32(&mut buf, *offset);
    }

    // Key blob, then value blob
    for entry in &entries {
        buf.extend_from_slice(entry.source_text.as_bytes());
        buf.push(0);
    }
    for entry in &entries {
        buf.extend_from_slice(entry.translated_text.as_bytes());
        buf.push(0);
    }

    debug_assert_eq!(buf.len(), layout.total_size as usize);
    Ok(buf)
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Write `bytes` to `path` so that `path` only ever holds a complete file.
///
/// Data goes to a temporary file in the same directory, is synced, then
/// renamed over `path`. On any failure the temporary file is removed and an
/// existing file at `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| CompileError::io(parent, e))?;

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| CompileError::io(parent, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| CompileError::io(temp_file.path(), e))?;
    }
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| CompileError::io(temp_file.path(), e))?;
    temp_file
        .persist(path)
        .map_err(|e| CompileError::io(path, e.error))?;
    Ok(())
}
